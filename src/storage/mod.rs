//! # Storage Layer
//!
//! Everything that touches the file system: plan documents in, rendered
//! item files out, plus templates and configuration.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Plan document | DOCX or plain text | any path |
//! | Templates | Markdown with `{placeholder}` tokens | `{templates_dir}/sprint.md`, `story.md`, `subtask.md` |
//! | Generated items | Rendered templates | `{output_dir}/{prefix}sprint_1.md`, ... |
//! | Config | TOML | `sprintdoc.toml`, `~/.config/sprintdoc/config.toml` |
//!
//! ## Key Types
//!
//! - [`load_plan`] - Read a document and parse it into sprints
//! - [`TemplateSet`] - Load and render the three templates
//! - [`FileGenerator`] - Write one file per sprint, story and subtask
//! - [`Config`] - Project and global configuration

mod document;
mod templates;
mod generator;
mod config;

pub use document::{load_plan, read_document_text, DocumentError, DocumentFormat};
pub use templates::{format_story_content, TemplateError, TemplateSet};
pub use generator::{item_file_name, FileGenerator, ItemKind};
pub use config::{Config, ConfigError, GlobalConfig, OutputFormat as ConfigOutputFormat, ProjectConfig};
