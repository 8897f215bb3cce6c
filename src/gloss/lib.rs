//! # Gloss Architecture
//!
//! Gloss is a **UI-agnostic glossary library** with a CLI client on top.
//! The split matters: everything from `api.rs` inward takes plain Rust
//! arguments, returns `Result` values, and never assumes a terminal.
//!
//! ```text
//! CLI layer (main.rs, args.rs, print.rs)
//!   parses arguments, prompts on stdin, renders tables, owns exit codes
//!         │
//!         ▼
//! API layer (api.rs)
//!   resolves the active glossary, loads the store, dispatches, saves
//!         │
//!         ▼
//! Command layer (commands/*.rs)
//!   one module per operation, pure logic returning CmdResult
//!         │
//!         ▼
//! Core (model, store, filter, suggest, active)
//!   Entry records, the in-memory Glossary, list pipeline, fuzzy matching
//! ```
//!
//! Each invocation is load → one operation → save (for mutations) → exit.
//! There is no long-lived state beyond the loaded [`store::Glossary`]; the
//! JSON file is the source of truth, and racing processes are simply
//! last-writer-wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The in-memory glossary and its JSON persistence
//! - [`model`]: The [`model::Entry`] record
//! - [`filter`]: Filter/sort/pagination pipeline behind `list`
//! - [`suggest`]: Fuzzy "did you mean" ranking
//! - [`active`]: The active-glossary pointer file
//! - [`error`]: Error types
//! - `args`/`print`: Argument parsing and rendering for the binary (not
//!   part of the lib API)

pub mod active;
pub mod api;
pub mod commands;
pub mod error;
pub mod filter;
pub mod model;
pub mod store;
pub mod suggest;
