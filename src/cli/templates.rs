//! Template commands

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::storage::TemplateSet;

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Write the built-in templates to a directory for editing
    Init {
        /// Target directory
        #[arg(default_value = "templates")]
        dir: PathBuf,

        /// Overwrite existing template files
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cmd: TemplateCommands, output: &Output) -> Result<()> {
    match cmd {
        TemplateCommands::Init { dir, force } => {
            output.verbose_ctx("templates", &format!("Writing templates to: {}", dir.display()));
            let written = TemplateSet::builtin().write_to(&dir, force)?;

            if output.is_json() {
                output.data(&serde_json::json!({
                    "success": true,
                    "directory": dir.display().to_string(),
                    "files": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
                }));
            } else {
                output.success(&format!("Wrote {} templates to {}", written.len(), dir.display()));
            }
        }
    }

    Ok(())
}
