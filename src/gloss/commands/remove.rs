use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GlossError, Result};
use crate::store::Glossary;

pub fn run(glossary: &mut Glossary, term: &str) -> Result<CmdResult> {
    let entry = glossary
        .find_by_term(term)
        .cloned()
        .ok_or_else(|| GlossError::TermNotFound(term.to_string()))?;

    glossary.remove_by_term(term);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry '{}' deleted.",
        entry.term
    )));
    result.affected_entries.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn removes_by_exact_term_ignoring_case() {
        let mut glossary = Glossary::new();
        add::run(
            &mut glossary,
            "Agile".to_string(),
            "def".to_string(),
            None,
            vec![],
        )
        .unwrap();

        let result = run(&mut glossary, "AGILE").unwrap();
        assert_eq!(result.affected_entries[0].term, "Agile");
        assert!(glossary.is_empty());
    }

    #[test]
    fn missing_term_is_not_found() {
        let mut glossary = Glossary::new();
        assert!(matches!(
            run(&mut glossary, "Nothing"),
            Err(GlossError::TermNotFound(_))
        ));
    }
}
