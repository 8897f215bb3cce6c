use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, ListFilter};
use crate::store::Glossary;

pub fn run(glossary: &Glossary, filter: &ListFilter) -> Result<CmdResult> {
    let page = filter::run(glossary.entries(), filter);

    let mut result = CmdResult::default();
    if page.entries.is_empty() {
        let message = if filter.is_filtered() {
            "No entries found using these filters."
        } else {
            "No entries found."
        };
        result.add_message(CmdMessage::info(message));
    }

    Ok(result.with_page(page))
}
