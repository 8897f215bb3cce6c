use crate::filter::ListPage;
use crate::model::Entry;
use std::path::PathBuf;

pub mod add;
pub mod checkout;
pub mod edit;
pub mod glossaries;
pub mod init;
pub mod list;
pub mod lookup;
pub mod remove;

const POINTER_FILENAME: &str = ".active";

/// Filesystem layout the commands operate in.
#[derive(Debug, Clone)]
pub struct GlossPaths {
    /// Directory holding the `*.json` glossary files.
    pub glossary_dir: PathBuf,
    /// Sidecar file tracking the active glossary.
    pub pointer_file: PathBuf,
}

impl GlossPaths {
    pub fn new(glossary_dir: PathBuf) -> Self {
        let pointer_file = glossary_dir.join(POINTER_FILENAME);
        Self {
            glossary_dir,
            pointer_file,
        }
    }

    pub fn glossary_file(&self, name: &str) -> PathBuf {
        self.glossary_dir.join(format!("{}.json", name))
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One glossary file as shown by `list-glossaries`.
#[derive(Debug, Clone)]
pub struct GlossaryInfo {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub page: Option<ListPage>,
    pub glossaries: Vec<GlossaryInfo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: ListPage) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_glossaries(mut self, glossaries: Vec<GlossaryInfo>) -> Self {
        self.glossaries = glossaries;
        self
    }
}
