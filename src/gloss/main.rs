use clap::{CommandFactory, Parser};
use colored::Colorize;
use directories::ProjectDirs;
use gloss::api::GlossApi;
use gloss::commands::add::{parse_tags, require_nonempty};
use gloss::commands::lookup::LookupOutcome;
use gloss::commands::GlossPaths;
use gloss::error::{GlossError, Result};
use gloss::filter::ListFilter;
use gloss::store::EntryPatch;
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_entry_table, print_glossaries, print_list_page, print_messages};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        let code = match e {
            GlossError::TermNotFound(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_none() && cli.term.is_empty() {
        Cli::command().print_help().map_err(GlossError::Io)?;
        return Ok(());
    }

    let paths = resolve_paths()?;
    let mut api = GlossApi::open(paths)?;

    match cli.command {
        Some(Commands::Init { name, force }) => handle_init(&mut api, &name, force),
        Some(Commands::Add { term }) => handle_add(&mut api, &term),
        Some(Commands::Remove { term, force }) => handle_remove(&mut api, &term, force),
        Some(Commands::Edit {
            term,
            term_new,
            definition,
            append_definition,
            category,
            add_tags,
            remove_tags,
            set_tags,
            clear_tags,
            force,
        }) => {
            let patch = EntryPatch {
                new_term: term_new,
                definition,
                append_definition,
                category,
                clear_tags,
                set_tags: set_tags.as_deref().map(parse_tags),
                add_tags,
                remove_tags,
            };
            handle_edit(&mut api, &term, &patch, force)
        }
        Some(Commands::List {
            tags,
            tags_csv,
            category,
            match_any,
            query,
            limit,
            offset,
        }) => {
            let mut tag_filters = Vec::new();
            if let Some(csv) = &tags_csv {
                tag_filters.extend(parse_tags(csv));
            }
            tag_filters.extend(
                tags.into_iter()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty()),
            );
            let filter = ListFilter {
                category,
                tags: tag_filters,
                match_any,
                query,
                offset,
                limit,
            };
            handle_list(&api, &filter)
        }
        Some(Commands::ListGlossaries) => handle_list_glossaries(&api),
        Some(Commands::Checkout { name }) => handle_checkout(&mut api, &name),
        None => handle_lookup(&api, cli.term.join(" ").trim()),
    }
}

/// Glossary files live under `GLOSS_HOME` when set, else the platform data
/// directory. Created on first use.
fn resolve_paths() -> Result<GlossPaths> {
    let glossary_dir = match std::env::var_os("GLOSS_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "gloss", "gloss")
            .ok_or_else(|| GlossError::Store("Could not determine a data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };
    if !glossary_dir.exists() {
        std::fs::create_dir_all(&glossary_dir).map_err(GlossError::Io)?;
    }
    Ok(GlossPaths::new(glossary_dir))
}

fn handle_init(api: &mut GlossApi, name: &str, force: bool) -> Result<()> {
    let result = api.init_glossary(name, force)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut GlossApi, term: &str) -> Result<()> {
    let term = term.trim().to_string();
    println!("New entry for term: {}", term);

    let definition = prompt_required("Definition")?;
    let category = prompt_line("Category (optional)")?.unwrap_or_default();
    let category = if category.is_empty() {
        None
    } else {
        Some(category)
    };
    let tags_raw = prompt_line("Tags, separated by comma (optional)")?.unwrap_or_default();
    let tags = parse_tags(&tags_raw);

    if api.find_entry(&term).is_some() {
        let overwrite = confirm(&format!("Term '{}' already exists. Overwrite? (y/N)", term))?;
        if !overwrite {
            println!("Cancelled. Entry was not changed.");
            return Ok(());
        }
    }

    let result = api.add_entry(term, definition, category, tags)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(api: &mut GlossApi, term: &str, force: bool) -> Result<()> {
    let entry = api
        .find_entry(term)
        .cloned()
        .ok_or_else(|| GlossError::TermNotFound(term.to_string()))?;

    println!("Entry found in glossary:");
    print_entry_table(&entry);

    if !force {
        let confirmed = confirm(&format!("Delete '{}'? (y/N)", entry.term))?;
        if !confirmed {
            println!("Cancelled. Entry was not deleted.");
            return Ok(());
        }
    }

    let result = api.remove_entry(term)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut GlossApi, term: &str, patch: &EntryPatch, force: bool) -> Result<()> {
    let result = api.edit_entry(term, patch, force)?;
    print_messages(&result.messages);
    if let Some(entry) = result.affected_entries.first() {
        print_entry_table(entry);
    }
    Ok(())
}

fn handle_list(api: &GlossApi, filter: &ListFilter) -> Result<()> {
    let result = api.list_entries(filter)?;
    if let Some(page) = &result.page {
        print_list_page(page);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list_glossaries(api: &GlossApi) -> Result<()> {
    let result = api.list_glossaries()?;
    print_glossaries(&result.glossaries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_checkout(api: &mut GlossApi, name: &str) -> Result<()> {
    let result = api.checkout(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_lookup(api: &GlossApi, term: &str) -> Result<()> {
    match api.lookup(term) {
        LookupOutcome::Found(entry) => print_entry_table(&entry),
        LookupOutcome::Near(entry) => {
            println!("Did you mean:");
            print_entry_table(&entry);
        }
        LookupOutcome::Ambiguous(entries) => {
            println!("More than one entry matches '{}':", term);
            for (i, entry) in entries.iter().enumerate() {
                println!("{}. {}", i + 1, entry.term);
            }
            println!("Type the exact term to view a single entry.");
        }
        LookupOutcome::Suggestions(close) => {
            println!("No glossary entry with term '{}'. Did you mean:", term);
            for candidate in &close {
                println!("- {}", candidate);
            }
        }
        LookupOutcome::NotFound => {
            println!("No glossary entry found with term '{}'.", term);
        }
    }
    Ok(())
}

/// One trimmed line from stdin, `None` at end of input.
fn prompt_line(label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush().map_err(GlossError::Io)?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input).map_err(GlossError::Io)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Re-ask until the input passes the blank check. End of input surfaces the
/// validation error instead of looping forever.
fn prompt_required(label: &str) -> Result<String> {
    loop {
        match prompt_line(label)? {
            None => return require_nonempty(label, ""),
            Some(input) => match require_nonempty(label, &input) {
                Ok(value) => return Ok(value),
                Err(e) => println!("{}", e),
            },
        }
    }
}

fn confirm(question: &str) -> Result<bool> {
    let answer = prompt_line(question)?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
