//! The active-glossary pointer.
//!
//! A sidecar text file holds the path of the glossary that implicit
//! operations act on. The store itself never reads or writes this file; the
//! API layer resolves the pointer before `load`/`save`.

use crate::error::{GlossError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback when no pointer has been written yet.
pub const DEFAULT_GLOSSARY_FILE: &str = "glossary.json";

#[derive(Debug, Clone)]
pub struct ActivePointer {
    file: PathBuf,
}

impl ActivePointer {
    pub fn new(file: PathBuf) -> Self {
        Self { file }
    }

    /// Path of the currently active glossary. An absent or empty pointer
    /// file resolves to [`DEFAULT_GLOSSARY_FILE`].
    pub fn resolve(&self) -> Result<PathBuf> {
        if self.file.exists() {
            let content = fs::read_to_string(&self.file).map_err(GlossError::Io)?;
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }
        Ok(PathBuf::from(DEFAULT_GLOSSARY_FILE))
    }

    /// Point at `path`. Written on `init` and `checkout`.
    pub fn set(&self, path: &Path) -> Result<()> {
        fs::write(&self.file, path.display().to_string()).map_err(GlossError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pointer_resolves_to_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let pointer = ActivePointer::new(dir.path().join(".active"));
        assert_eq!(
            pointer.resolve().unwrap(),
            PathBuf::from(DEFAULT_GLOSSARY_FILE)
        );
    }

    #[test]
    fn empty_pointer_resolves_to_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".active");
        fs::write(&file, "  \n").unwrap();

        let pointer = ActivePointer::new(file);
        assert_eq!(
            pointer.resolve().unwrap(),
            PathBuf::from(DEFAULT_GLOSSARY_FILE)
        );
    }

    #[test]
    fn set_then_resolve_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let pointer = ActivePointer::new(dir.path().join(".active"));
        let target = dir.path().join("work.json");

        pointer.set(&target).unwrap();
        assert_eq!(pointer.resolve().unwrap(), target);
    }
}
