//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::plan::{self, GenerateOptions};
use super::templates;
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "sprintdoc")]
#[command(author, version, about = "Split sprint planning documents into per-item files")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (default: `default_format` from global config)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the sprint / story / subtask structure of a document
    Analyze {
        /// Plan document (.docx, .txt or .md)
        document: PathBuf,
    },

    /// Generate one file per sprint, story and subtask
    Generate {
        /// Plan document (.docx, .txt or .md)
        document: PathBuf,

        #[command(flatten)]
        options: GenerateOptions,
    },

    /// Generate files for a single sprint
    Sprint {
        /// Plan document (.docx, .txt or .md)
        document: PathBuf,

        /// Zero-based sprint index (0 for the first sprint)
        index: usize,

        #[command(flatten)]
        options: GenerateOptions,
    },

    /// Manage templates
    #[command(subcommand)]
    Templates(templates::TemplateCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose("sprintdoc starting");
    if let Some(root) = &config.project_root {
        output.verbose_ctx("config", &format!("Using project config in: {}", root.display()));
    }

    match cli.command {
        Commands::Analyze { document } => plan::analyze(&output, &document)?,

        Commands::Generate { document, options } => {
            plan::generate(&output, &config, &document, options)?
        }

        Commands::Sprint { document, index, options } => {
            plan::generate_sprint(&output, &config, &document, index, options)?
        }

        Commands::Templates(cmd) => templates::run(cmd, &output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
