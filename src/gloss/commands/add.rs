use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GlossError, Result};
use crate::model::{dedup_tags, Entry};
use crate::store::Glossary;

/// Split a comma-separated tag list, trimming and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    dedup_tags(
        raw.split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
    )
}

/// The blank-input check the interactive shell loops on.
pub fn require_nonempty(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GlossError::Validation(format!("{} is required.", field)));
    }
    Ok(trimmed.to_string())
}

/// Add an entry, replacing any existing entry with the same term. The
/// caller has already confirmed the overwrite.
pub fn run(
    glossary: &mut Glossary,
    term: String,
    definition: String,
    category: Option<String>,
    tags: Vec<String>,
) -> Result<CmdResult> {
    let term = require_nonempty("Term", &term)?;
    let definition = require_nonempty("Definition", &definition)?;

    // Term uniqueness is enforced here, not in `add`: drop the old entry
    // first, then append.
    glossary.remove_by_term(&term);
    let entry = Entry::new(term, definition, category, tags);
    glossary.add(entry.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Term '{}' added to glossary.",
        entry.term
    )));
    result.affected_entries.push(entry);
    Ok(result)
}
