//! tracefold - command-line filters for emulator trace logs
//!
//! tracefold provides:
//! - `trace-group`: folds repeated instruction records and annotates them
//!   with occurrence counts and branch summaries
//! - `sort-count`: counts distinct lines of stdin, least frequent first
//! - Shared output formats (text/jsonl/json)

pub mod cli;
pub mod core;
pub mod counter;
pub mod grouper;
