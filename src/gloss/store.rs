//! The in-memory glossary store.
//!
//! One [`Glossary`] holds the entries of one glossary file, in load/insertion
//! order. Lookups and searches are linear scans; a personal glossary stays in
//! the hundreds-to-low-thousands range and needs no index. Durable state
//! lives only in the JSON file: callers load, mutate, and save back.

use crate::error::{GlossError, Result};
use crate::model::{dedup_tags, Entry};
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct Glossary {
    entries: Vec<Entry>,
}

/// A patch applied by [`Glossary::update`]. Absent fields leave the entry
/// untouched, so an all-absent patch is a successful no-op.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub new_term: Option<String>,
    pub definition: Option<String>,
    pub append_definition: Option<String>,
    pub category: Option<String>,
    pub clear_tags: bool,
    /// Replaces the tag list outright; `add_tags`/`remove_tags` are skipped
    /// when this is present.
    pub set_tags: Option<Vec<String>>,
    pub add_tags: Vec<String>,
    pub remove_tags: Vec<String>,
}

/// What [`Glossary::update`] did. `renamed_over` holds the term that was
/// already taken when a rename went through anyway.
#[derive(Debug, Default)]
pub struct UpdateReport {
    pub renamed_over: Option<String>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry. Uniqueness is the caller's job: replace an existing
    /// term by removing it first.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Case-insensitive exact match on the term.
    pub fn find_by_term(&self, term: &str) -> Option<&Entry> {
        let term_lower = term.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.term.to_lowercase() == term_lower)
    }

    /// Case-insensitive substring match against term or definition, in store
    /// order.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.term.to_lowercase().contains(&query_lower)
                    || e.definition.to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    /// Remove the first case-insensitive match. Returns whether a removal
    /// happened.
    pub fn remove_by_term(&mut self, term: &str) -> bool {
        let term_lower = term.to_lowercase();
        match self
            .entries
            .iter()
            .position(|e| e.term.to_lowercase() == term_lower)
        {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Apply `patch` to the entry holding `original_term`.
    ///
    /// Returns `None` when the term is absent. Fields apply in a fixed
    /// order: rename, definition replace, definition append, category,
    /// clear_tags, then set_tags or add/remove tags.
    pub fn update(&mut self, original_term: &str, patch: &EntryPatch) -> Option<UpdateReport> {
        let term_lower = original_term.to_lowercase();
        let pos = self
            .entries
            .iter()
            .position(|e| e.term.to_lowercase() == term_lower)?;

        let mut report = UpdateReport::default();

        if let Some(new_term) = &patch.new_term {
            if !new_term.is_empty() && new_term != original_term {
                let new_lower = new_term.to_lowercase();
                let taken = self
                    .entries
                    .iter()
                    .enumerate()
                    .any(|(i, e)| i != pos && e.term.to_lowercase() == new_lower);
                if taken {
                    report.renamed_over = Some(new_term.clone());
                }
                // The rename goes through even on a clash; callers decide
                // whether to surface the report as a warning.
                self.entries[pos].term = new_term.clone();
            }
        }

        let entry = &mut self.entries[pos];

        if let Some(definition) = &patch.definition {
            entry.definition = definition.clone();
        }
        if let Some(text) = &patch.append_definition {
            // Runs after a replacement, so both in one call append to the
            // replacement text.
            if !text.is_empty() {
                if entry.definition.is_empty() {
                    entry.definition = text.clone();
                } else {
                    entry.definition = format!("{}\n\n{}", entry.definition.trim_end(), text);
                }
            }
        }
        if let Some(category) = &patch.category {
            entry.category = Some(category.clone());
        }

        if patch.clear_tags {
            entry.tags.clear();
        }
        if let Some(set_tags) = &patch.set_tags {
            entry.tags = dedup_tags(
                set_tags
                    .iter()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect(),
            );
        } else {
            for tag in &patch.add_tags {
                let tag = tag.trim();
                if !tag.is_empty() && !entry.tags.iter().any(|t| t == tag) {
                    entry.tags.push(tag.to_string());
                }
            }
            for tag in &patch.remove_tags {
                let tag = tag.trim();
                entry.tags.retain(|t| t != tag);
            }
        }

        Some(report)
    }

    /// Load a glossary from `path`. A missing file is an empty glossary, not
    /// an error; malformed JSON fails without a partial store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(GlossError::Io)?;
        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(GlossError::Serialization)?;
        Ok(Self { entries })
    }

    /// Write the whole glossary to `path` as a pretty-printed JSON array
    /// (2-space indent, non-ASCII left as literal UTF-8). Single-shot full
    /// rewrite; racing writers are last-writer-wins.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(GlossError::Io)?;
            }
        }
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(GlossError::Serialization)?;
        fs::write(path, content).map_err(GlossError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(term: &str) -> Entry {
        Entry::new(term.to_string(), format!("About {}", term), None, vec![])
    }

    #[test]
    fn find_by_term_ignores_case() {
        let mut glossary = Glossary::new();
        glossary.add(entry("Agile"));
        glossary.add(entry("Scrum"));

        assert_eq!(glossary.find_by_term("agile").unwrap().term, "Agile");
        assert_eq!(glossary.find_by_term("SCRUM").unwrap().term, "Scrum");
        assert!(glossary.find_by_term("Kanban").is_none());
    }

    #[test]
    fn search_matches_term_or_definition_in_store_order() {
        let mut glossary = Glossary::new();
        glossary.add(Entry::new(
            "Waterfall".to_string(),
            "The opposite of agile".to_string(),
            None,
            vec![],
        ));
        glossary.add(entry("Agile"));

        let hits = glossary.search("agile");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].term, "Waterfall");
        assert_eq!(hits[1].term, "Agile");
    }

    #[test]
    fn remove_by_term_reports_whether_anything_happened() {
        let mut glossary = Glossary::new();
        glossary.add(entry("Agile"));

        assert!(glossary.remove_by_term("AGILE"));
        assert!(!glossary.remove_by_term("Agile"));
        assert!(glossary.is_empty());
    }

    #[test]
    fn update_missing_term_returns_none() {
        let mut glossary = Glossary::new();
        assert!(glossary
            .update("Nothing", &EntryPatch::default())
            .is_none());
    }

    #[test]
    fn empty_patch_is_a_successful_noop() {
        let mut glossary = Glossary::new();
        glossary.add(Entry::new(
            "Agile".to_string(),
            "Def".to_string(),
            Some("SE".to_string()),
            vec!["a".to_string()],
        ));

        let report = glossary.update("Agile", &EntryPatch::default()).unwrap();
        assert!(report.renamed_over.is_none());

        let e = glossary.find_by_term("Agile").unwrap();
        assert_eq!(e.definition, "Def");
        assert_eq!(e.category.as_deref(), Some("SE"));
        assert_eq!(e.tags, vec!["a"]);
    }

    #[test]
    fn rename_clash_is_reported_but_goes_through() {
        let mut glossary = Glossary::new();
        glossary.add(entry("Agile"));
        glossary.add(entry("Scrum"));

        let patch = EntryPatch {
            new_term: Some("Agile".to_string()),
            ..Default::default()
        };
        let report = glossary.update("Scrum", &patch).unwrap();
        assert_eq!(report.renamed_over.as_deref(), Some("Agile"));
        assert!(glossary.find_by_term("Scrum").is_none());
    }

    #[test]
    fn rename_to_same_term_with_different_case_does_not_clash() {
        let mut glossary = Glossary::new();
        glossary.add(entry("agile"));

        let patch = EntryPatch {
            new_term: Some("Agile".to_string()),
            ..Default::default()
        };
        let report = glossary.update("agile", &patch).unwrap();
        assert!(report.renamed_over.is_none());
        assert_eq!(glossary.entries()[0].term, "Agile");
    }

    #[test]
    fn replace_then_append_in_one_call_appends_to_the_replacement() {
        let mut glossary = Glossary::new();
        glossary.add(entry("Agile"));

        let patch = EntryPatch {
            definition: Some("Replaced.  ".to_string()),
            append_definition: Some("Appended.".to_string()),
            ..Default::default()
        };
        glossary.update("Agile", &patch).unwrap();
        assert_eq!(
            glossary.find_by_term("Agile").unwrap().definition,
            "Replaced.\n\nAppended."
        );
    }

    #[test]
    fn append_to_empty_definition_is_just_the_text() {
        let mut glossary = Glossary::new();
        glossary.add(Entry::new("Agile".to_string(), String::new(), None, vec![]));

        let patch = EntryPatch {
            append_definition: Some("Now defined.".to_string()),
            ..Default::default()
        };
        glossary.update("Agile", &patch).unwrap();
        assert_eq!(
            glossary.find_by_term("Agile").unwrap().definition,
            "Now defined."
        );
    }

    #[test]
    fn definition_may_be_replaced_with_empty() {
        let mut glossary = Glossary::new();
        glossary.add(entry("Agile"));

        let patch = EntryPatch {
            definition: Some(String::new()),
            ..Default::default()
        };
        glossary.update("Agile", &patch).unwrap();
        assert_eq!(glossary.find_by_term("Agile").unwrap().definition, "");
    }

    #[test]
    fn adding_the_same_tag_twice_keeps_one_occurrence() {
        let mut glossary = Glossary::new();
        glossary.add(entry("Agile"));

        let patch = EntryPatch {
            add_tags: vec!["process".to_string()],
            ..Default::default()
        };
        glossary.update("Agile", &patch).unwrap();
        glossary.update("Agile", &patch).unwrap();

        assert_eq!(glossary.find_by_term("Agile").unwrap().tags, vec!["process"]);
    }

    #[test]
    fn set_tags_overrides_add_and_remove() {
        let mut glossary = Glossary::new();
        glossary.add(Entry::new(
            "Agile".to_string(),
            "Def".to_string(),
            None,
            vec!["old".to_string()],
        ));

        let patch = EntryPatch {
            set_tags: Some(vec![" a ".to_string(), "b".to_string(), "a".to_string()]),
            add_tags: vec!["ignored".to_string()],
            remove_tags: vec!["b".to_string()],
            ..Default::default()
        };
        glossary.update("Agile", &patch).unwrap();
        assert_eq!(glossary.find_by_term("Agile").unwrap().tags, vec!["a", "b"]);
    }

    #[test]
    fn remove_tags_is_case_sensitive_exact() {
        let mut glossary = Glossary::new();
        glossary.add(Entry::new(
            "Agile".to_string(),
            "Def".to_string(),
            None,
            vec!["Process".to_string(), "method".to_string()],
        ));

        let patch = EntryPatch {
            remove_tags: vec!["process".to_string()],
            ..Default::default()
        };
        glossary.update("Agile", &patch).unwrap();
        assert_eq!(
            glossary.find_by_term("Agile").unwrap().tags,
            vec!["Process", "method"]
        );
    }

    #[test]
    fn save_then_load_reproduces_the_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.json");

        let mut glossary = Glossary::new();
        glossary.add(Entry::new(
            "Größe".to_string(),
            "Umlauts stay literal".to_string(),
            Some("Deutsch".to_string()),
            vec!["äöü".to_string()],
        ));
        glossary.add(entry("Agile"));
        glossary.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Größe"));
        assert!(!raw.contains("\\u"));

        let loaded = Glossary::load(&path).unwrap();
        assert_eq!(loaded.entries(), glossary.entries());
    }

    #[test]
    fn load_missing_path_is_empty_and_save_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let glossary = Glossary::load(&path).unwrap();
        assert!(glossary.is_empty());

        glossary.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn load_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            Glossary::load(&path),
            Err(GlossError::Serialization(_))
        ));
    }
}
