use crate::commands::{CmdMessage, CmdResult, GlossPaths, GlossaryInfo};
use crate::error::{GlossError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(paths: &GlossPaths, active: &Path) -> Result<CmdResult> {
    let mut files: Vec<PathBuf> = Vec::new();
    if paths.glossary_dir.exists() {
        for dir_entry in fs::read_dir(&paths.glossary_dir).map_err(GlossError::Io)? {
            let path = dir_entry.map_err(GlossError::Io)?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                files.push(path);
            }
        }
    }
    files.sort();

    let mut result = CmdResult::default();
    if files.is_empty() {
        result.add_message(CmdMessage::info("No glossaries found."));
        return Ok(result);
    }

    let active = resolved(active);
    let glossaries = files
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let active = resolved(&path) == active;
            GlossaryInfo { name, active }
        })
        .collect();

    Ok(result.with_glossaries(glossaries))
}

// Symlink-tolerant path comparison; a path that does not exist yet stays
// as-is.
fn resolved(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
