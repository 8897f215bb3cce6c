use colored::Colorize;
use gloss::commands::{CmdMessage, GlossaryInfo, MessageLevel};
use gloss::filter::ListPage;
use gloss::model::Entry;
use unicode_width::UnicodeWidthStr;

const VALUE_WIDTH: usize = 70;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Render one entry as a bordered two-column table, wrapping values at
/// [`VALUE_WIDTH`] display columns.
pub(crate) fn print_entry_table(entry: &Entry) {
    let labels = ["Term", "Definition", "Category", "Tags"];
    let values = [
        entry.term.clone(),
        entry.definition.clone(),
        entry.category.clone().unwrap_or_else(|| "-".to_string()),
        if entry.tags.is_empty() {
            "-".to_string()
        } else {
            entry.tags.join(", ")
        },
    ];

    let key_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    // One row per wrapped line; only the first line of a value carries the
    // label.
    let mut rows: Vec<(&str, String)> = Vec::new();
    for (label, value) in labels.iter().zip(values.iter()) {
        for (i, line) in wrap_to_width(value, VALUE_WIDTH).into_iter().enumerate() {
            rows.push((if i == 0 { label } else { "" }, line));
        }
    }

    let separator = format!(
        "+{}+{}+",
        "-".repeat(key_width + 2),
        "-".repeat(VALUE_WIDTH + 2)
    );

    println!("{}", separator);
    for (i, (label, line)) in rows.iter().enumerate() {
        println!(
            "| {}{} | {}{} |",
            label,
            " ".repeat(key_width - label.width()),
            line,
            " ".repeat(VALUE_WIDTH.saturating_sub(line.width()))
        );
        let next_starts_value = rows.get(i + 1).map(|(l, _)| !l.is_empty()).unwrap_or(false);
        if next_starts_value {
            println!("{}", separator);
        }
    }
    println!("{}", separator);
}

/// Numbered listing plus a summary with the pre-pagination total.
pub(crate) fn print_list_page(page: &ListPage) {
    if page.entries.is_empty() {
        return;
    }

    for (i, entry) in page.entries.iter().enumerate() {
        let category = entry.category.as_deref().unwrap_or("-");
        let tags = if entry.tags.is_empty() {
            "-".to_string()
        } else {
            entry.tags.join(", ")
        };
        println!(
            "{}. {}  [{}]  Tags: {}",
            page.offset + i + 1,
            entry.term,
            category,
            tags
        );
    }

    println!();
    if page.limit > 0 {
        println!(
            "Showing {} entries (offset={}, limit={}). {} matches overall (before paging).",
            page.shown(),
            page.offset,
            page.limit,
            page.total
        );
    } else {
        println!(
            "Showing {} entries. {} matches overall.",
            page.shown(),
            page.total
        );
    }
}

pub(crate) fn print_glossaries(glossaries: &[GlossaryInfo]) {
    if glossaries.is_empty() {
        return;
    }
    println!("Available glossaries:");
    for (i, info) in glossaries.iter().enumerate() {
        if info.active {
            println!("{}. {} {}", i + 1, info.name, "(active)".green());
        } else {
            println!("{}. {}", i + 1, info.name);
        }
    }
}

// Greedy word wrap on display width; words longer than the width are split.
fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_long_word(word, width) {
            let needed = if current.is_empty() {
                piece.width()
            } else {
                current.width() + 1 + piece.width()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn split_long_word(word: &str, width: usize) -> Vec<String> {
    use unicode_width::UnicodeWidthChar;

    if word.width() <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for c in word.chars() {
        let char_width = c.width().unwrap_or(0);
        if piece_width + char_width > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += char_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_to_width("a few words", 70), vec!["a few words"]);
    }

    #[test]
    fn long_text_wraps_at_word_boundaries() {
        let lines = wrap_to_width("aaa bbb ccc", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(wrap_to_width("", 70), vec![""]);
    }

    #[test]
    fn oversized_words_are_split() {
        let lines = wrap_to_width("abcdefgh", 3);
        assert_eq!(lines, vec!["abc", "def", "gh"]);
    }
}
