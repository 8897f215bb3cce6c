use crate::active::ActivePointer;
use crate::commands::{CmdMessage, CmdResult, GlossPaths};
use crate::error::Result;
use crate::store::Glossary;

pub fn run(paths: &GlossPaths, pointer: &ActivePointer, name: &str) -> Result<CmdResult> {
    let path = paths.glossary_file(name);
    let mut result = CmdResult::default();

    if !path.exists() {
        result.add_message(CmdMessage::error(format!(
            "Glossary file {}.json does not exist in '{}'.",
            name,
            paths.glossary_dir.display()
        )));
        result.add_message(CmdMessage::info(
            "Use 'list-glossaries' to see available glossaries.",
        ));
        return Ok(result);
    }

    let glossary = Glossary::load(&path)?;
    pointer.set(&path)?;

    result.add_message(CmdMessage::success(format!(
        "Glossary file set to '{}'.",
        path.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "Entries in this glossary: {}",
        glossary.len()
    )));
    Ok(result)
}
