use crate::model::Entry;
use crate::store::Glossary;
use crate::suggest;

/// Outcome of a bare-term lookup, best match first.
#[derive(Debug)]
pub enum LookupOutcome {
    /// Exact case-insensitive term match.
    Found(Entry),
    /// No exact match, but exactly one substring match.
    Near(Entry),
    /// Several substring matches to pick from.
    Ambiguous(Vec<Entry>),
    /// Nothing matched; close terms ranked by similarity.
    Suggestions(Vec<String>),
    NotFound,
}

pub fn run(glossary: &Glossary, term: &str) -> LookupOutcome {
    if let Some(entry) = glossary.find_by_term(term) {
        return LookupOutcome::Found(entry.clone());
    }

    let matches = glossary.search(term);
    match matches.len() {
        0 => {
            let close =
                suggest::close_matches(term, glossary.entries().iter().map(|e| e.term.as_str()));
            if close.is_empty() {
                LookupOutcome::NotFound
            } else {
                LookupOutcome::Suggestions(close)
            }
        }
        1 => LookupOutcome::Near(matches[0].clone()),
        _ => LookupOutcome::Ambiguous(matches.into_iter().cloned().collect()),
    }
}
