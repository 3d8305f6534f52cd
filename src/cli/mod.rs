//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `analyze <doc>` | Show sprint / story / subtask counts and titles |
//! | `generate <doc>` | Write one file per sprint, story and subtask |
//! | `sprint <doc> <index>` | Write the files of a single sprint |
//! | `templates init [dir]` | Write the built-in templates for editing |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! sprintdoc --verbose generate plan.docx
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod plan;
mod templates;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
