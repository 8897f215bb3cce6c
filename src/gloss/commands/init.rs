use crate::active::ActivePointer;
use crate::commands::{CmdMessage, CmdResult, GlossPaths};
use crate::error::Result;
use crate::store::Glossary;

pub fn run(paths: &GlossPaths, pointer: &ActivePointer, name: &str, force: bool) -> Result<CmdResult> {
    let path = paths.glossary_file(name);
    let mut result = CmdResult::default();

    if path.exists() && !force {
        result.add_message(CmdMessage::warning(format!(
            "Glossary file {} exists. Use --force to overwrite it.",
            path.display()
        )));
        return Ok(result);
    }

    Glossary::new().save(&path)?;
    pointer.set(&path)?;

    result.add_message(CmdMessage::success(format!(
        "Glossary file '{}' created and activated.",
        path.display()
    )));
    Ok(result)
}
