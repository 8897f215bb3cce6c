use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "gloss")]
#[command(about = "Personal glossary manager for the command line", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Term to look up when no subcommand is given
    #[arg(trailing_var_arg = true)]
    pub term: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create and activate a new glossary
    Init {
        /// Name of the glossary file (without .json)
        name: String,

        /// Overwrite an existing glossary file
        #[arg(short, long)]
        force: bool,
    },

    /// Add a glossary entry (prompts for the details)
    Add {
        /// Term to add
        term: String,
    },

    /// Remove an existing entry
    #[command(alias = "rm")]
    Remove {
        /// Exact term to remove
        term: String,

        /// Remove without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Edit an existing entry
    Edit {
        /// Exact existing term to edit
        term: String,

        /// Rename the term
        #[arg(long = "term-new")]
        term_new: Option<String>,

        /// Replace the definition (use quotes)
        #[arg(long)]
        definition: Option<String>,

        /// Append text to the definition
        #[arg(long = "append-definition")]
        append_definition: Option<String>,

        /// Set the category
        #[arg(long)]
        category: Option<String>,

        /// Add a tag (repeatable)
        #[arg(long = "add-tag")]
        add_tags: Vec<String>,

        /// Remove a tag (repeatable)
        #[arg(long = "remove-tag")]
        remove_tags: Vec<String>,

        /// Replace all tags, comma separated (tag1,tag2)
        #[arg(long = "set-tags")]
        set_tags: Option<String>,

        /// Clear all tags
        #[arg(long = "clear-tags")]
        clear_tags: bool,

        /// Silence the rename conflict warning
        #[arg(long)]
        force: bool,
    },

    /// List entries
    #[command(alias = "ls")]
    List {
        /// Require a tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Comma-separated tags (tag1,tag2)
        #[arg(long = "tags")]
        tags_csv: Option<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Match entries with ANY of the tags (logical OR). Default is AND
        #[arg(long = "match-any")]
        match_any: bool,

        /// Substring match on the term, applied after tag/category filters
        #[arg(long)]
        query: Option<String>,

        /// Limit the number of entries shown (0 = no limit)
        #[arg(long, default_value_t = 0)]
        limit: i64,

        /// Skip this many entries
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },

    /// List all available glossaries
    ListGlossaries,

    /// Switch the active glossary
    Checkout {
        /// Name of the glossary file (without .json)
        name: String,
    },
}
