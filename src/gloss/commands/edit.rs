use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GlossError, Result};
use crate::store::{EntryPatch, Glossary};

pub fn run(
    glossary: &mut Glossary,
    term: &str,
    patch: &EntryPatch,
    force: bool,
) -> Result<CmdResult> {
    let report = glossary
        .update(term, patch)
        .ok_or_else(|| GlossError::TermNotFound(term.to_string()))?;

    let mut result = CmdResult::default();

    if let Some(taken) = &report.renamed_over {
        if !force {
            // Deliberate: the rename has already gone through and --force
            // only silences this warning.
            result.add_message(CmdMessage::warning(format!(
                "Target term '{}' already exists. Use --force to overwrite.",
                taken
            )));
        }
    }

    result.add_message(CmdMessage::success(format!("Entry '{}' updated.", term)));

    let current = patch
        .new_term
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(term);
    if let Some(entry) = glossary.find_by_term(current) {
        result.affected_entries.push(entry.clone());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::commands::MessageLevel;

    fn glossary_with(terms: &[&str]) -> Glossary {
        let mut glossary = Glossary::new();
        for term in terms {
            add::run(
                &mut glossary,
                term.to_string(),
                format!("About {}", term),
                None,
                vec![],
            )
            .unwrap();
        }
        glossary
    }

    #[test]
    fn editing_a_missing_term_fails() {
        let mut glossary = Glossary::new();
        assert!(matches!(
            run(&mut glossary, "Nothing", &EntryPatch::default(), false),
            Err(GlossError::TermNotFound(_))
        ));
    }

    #[test]
    fn rename_clash_warns_but_renames_anyway() {
        let mut glossary = glossary_with(&["Agile", "Scrum"]);
        let patch = EntryPatch {
            new_term: Some("Agile".to_string()),
            ..Default::default()
        };

        let result = run(&mut glossary, "Scrum", &patch, false).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert!(result.messages[0].content.contains("already exists"));
        assert!(glossary.find_by_term("Scrum").is_none());
    }

    #[test]
    fn force_silences_the_clash_warning() {
        let mut glossary = glossary_with(&["Agile", "Scrum"]);
        let patch = EntryPatch {
            new_term: Some("Agile".to_string()),
            ..Default::default()
        };

        let result = run(&mut glossary, "Scrum", &patch, true).unwrap();
        assert!(result
            .messages
            .iter()
            .all(|m| !matches!(m.level, MessageLevel::Warning)));
        // Behavior is otherwise identical.
        assert!(glossary.find_by_term("Scrum").is_none());
    }

    #[test]
    fn returns_the_updated_entry_under_its_new_term() {
        let mut glossary = glossary_with(&["Agile"]);
        let patch = EntryPatch {
            new_term: Some("Agility".to_string()),
            definition: Some("Renamed and redefined".to_string()),
            ..Default::default()
        };

        let result = run(&mut glossary, "Agile", &patch, false).unwrap();
        assert_eq!(result.affected_entries[0].term, "Agility");
        assert_eq!(result.affected_entries[0].definition, "Renamed and redefined");
    }
}
