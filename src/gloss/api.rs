//! # API Facade
//!
//! [`GlossApi`] is the single entry point for all glossary operations. It
//! resolves the active-glossary pointer, loads the store once per
//! invocation, dispatches to the command layer, and persists the store
//! after every mutating operation. It returns structured results and never
//! touches stdout or stderr; rendering belongs to the CLI.

use crate::active::ActivePointer;
use crate::commands::lookup::LookupOutcome;
use crate::commands::{self, CmdResult, GlossPaths};
use crate::error::Result;
use crate::filter::ListFilter;
use crate::model::Entry;
use crate::store::{EntryPatch, Glossary};
use std::path::{Path, PathBuf};

pub struct GlossApi {
    glossary: Glossary,
    paths: GlossPaths,
    pointer: ActivePointer,
    active_path: PathBuf,
}

impl GlossApi {
    /// Resolve the active glossary under `paths` and load it.
    pub fn open(paths: GlossPaths) -> Result<Self> {
        let pointer = ActivePointer::new(paths.pointer_file.clone());
        let active_path = pointer.resolve()?;
        let glossary = Glossary::load(&active_path)?;
        Ok(Self {
            glossary,
            paths,
            pointer,
            active_path,
        })
    }

    pub fn active_path(&self) -> &Path {
        &self.active_path
    }

    pub fn find_entry(&self, term: &str) -> Option<&Entry> {
        self.glossary.find_by_term(term)
    }

    pub fn init_glossary(&mut self, name: &str, force: bool) -> Result<CmdResult> {
        let result = commands::init::run(&self.paths, &self.pointer, name, force)?;
        self.reload()?;
        Ok(result)
    }

    pub fn add_entry(
        &mut self,
        term: String,
        definition: String,
        category: Option<String>,
        tags: Vec<String>,
    ) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.glossary, term, definition, category, tags)?;
        self.glossary.save(&self.active_path)?;
        Ok(result)
    }

    pub fn remove_entry(&mut self, term: &str) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.glossary, term)?;
        self.glossary.save(&self.active_path)?;
        Ok(result)
    }

    pub fn edit_entry(&mut self, term: &str, patch: &EntryPatch, force: bool) -> Result<CmdResult> {
        let result = commands::edit::run(&mut self.glossary, term, patch, force)?;
        self.glossary.save(&self.active_path)?;
        Ok(result)
    }

    pub fn list_entries(&self, filter: &ListFilter) -> Result<CmdResult> {
        commands::list::run(&self.glossary, filter)
    }

    pub fn list_glossaries(&self) -> Result<CmdResult> {
        commands::glossaries::run(&self.paths, &self.active_path)
    }

    pub fn checkout(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::checkout::run(&self.paths, &self.pointer, name)?;
        self.reload()?;
        Ok(result)
    }

    pub fn lookup(&self, term: &str) -> LookupOutcome {
        commands::lookup::run(&self.glossary, term)
    }

    // Follow a pointer move within this invocation (init/checkout).
    fn reload(&mut self) -> Result<()> {
        self.active_path = self.pointer.resolve()?;
        self.glossary = Glossary::load(&self.active_path)?;
        Ok(())
    }
}
