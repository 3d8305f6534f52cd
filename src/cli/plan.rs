//! Plan commands: analyze a document and generate item files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::output::Output;
use crate::domain::{select_sprint, PlanSummary, Sprint};
use crate::storage::{load_plan, Config, FileGenerator, TemplateSet};

/// Options shared by the generating commands
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Directory for generated files (default: `output_dir` from config)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Directory containing sprint.md, story.md and subtask.md
    #[arg(long, short = 't')]
    pub templates: Option<PathBuf>,

    /// Prefix for generated file names
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,
}

#[derive(Serialize)]
struct GenerateReport<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sprint_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sprint_title: Option<&'a str>,
    generated_files_count: usize,
    output_directory: String,
    files: Vec<String>,
}

fn read_plan(output: &Output, document: &Path) -> Result<Vec<Sprint>> {
    output.verbose_ctx("parse", &format!("Reading document: {}", document.display()));
    let sprints = load_plan(document)?;
    output.verbose_ctx("parse", &format!("Found {} sprint(s)", sprints.len()));
    Ok(sprints)
}

fn build_generator(output: &Output, config: &Config, options: GenerateOptions) -> Result<FileGenerator> {
    let templates_dir = config.templates_dir(options.templates);
    match &templates_dir {
        Some(dir) => output.verbose_ctx("templates", &format!("Loading templates from: {}", dir.display())),
        None => output.verbose_ctx("templates", "Using built-in templates"),
    }
    let templates = TemplateSet::load_or_builtin(templates_dir.as_deref())?;

    let output_dir = config.output_dir(options.output);
    output.verbose_ctx("generate", &format!("Output directory: {}", output_dir.display()));

    Ok(FileGenerator::new(output_dir, config.file_prefix(options.prefix), templates))
}

/// Prints the hierarchy summary of a document
pub fn analyze(output: &Output, document: &Path) -> Result<()> {
    let sprints = read_plan(output, document)?;
    let summary = PlanSummary::from_sprints(&sprints);

    if output.is_json() {
        output.data(&summary);
        return Ok(());
    }

    println!(
        "{} sprint(s), {} story(ies), {} subtask(s)",
        summary.total_sprints,
        summary.story_count(),
        summary.subtask_count()
    );

    for (sprint_summary, sprint) in summary.sprints.iter().zip(&sprints) {
        output.blank();
        println!(
            "{}. {} ({} stories, {} subtasks)",
            sprint_summary.sprint_number,
            sprint_summary.title,
            sprint_summary.story_count,
            sprint.subtask_count()
        );
        for story in &sprint_summary.stories {
            let number = format!("{}.{}", sprint_summary.sprint_number, story.story_number);
            let subtasks = format!("{} subtask(s)", story.subtask_count);
            output.row(&["", number.as_str(), story.title.as_str(), subtasks.as_str()]);
        }
    }

    Ok(())
}

/// Generates files for every sprint in a document
pub fn generate(output: &Output, config: &Config, document: &Path, options: GenerateOptions) -> Result<()> {
    let sprints = read_plan(output, document)?;
    let generator = build_generator(output, config, options)?;

    let files = generator
        .generate_all(&sprints)
        .context("Failed to generate sprint files")?;

    report(output, &generator, None, files);
    Ok(())
}

/// Generates files for one sprint, selected by zero-based index
pub fn generate_sprint(
    output: &Output,
    config: &Config,
    document: &Path,
    index: usize,
    options: GenerateOptions,
) -> Result<()> {
    let sprints = read_plan(output, document)?;
    let sprint = select_sprint(&sprints, index)?;
    output.verbose_ctx("sprint", &format!("Selected sprint {}: {}", index, sprint.title));

    let generator = build_generator(output, config, options)?;
    let files = generator
        .generate_sprint(&sprints, index)
        .context("Failed to generate sprint files")?;

    report(output, &generator, Some((index + 1, sprint.title.as_str())), files);
    Ok(())
}

fn report(output: &Output, generator: &FileGenerator, sprint: Option<(usize, &str)>, files: Vec<PathBuf>) {
    let report = GenerateReport {
        success: true,
        sprint_number: sprint.map(|(number, _)| number),
        sprint_title: sprint.map(|(_, title)| title),
        generated_files_count: files.len(),
        output_directory: generator.output_dir().display().to_string(),
        files: files.iter().map(|f| f.display().to_string()).collect(),
    };

    if output.is_json() {
        output.data(&report);
        return;
    }

    if let Some((number, title)) = sprint {
        output.success(&format!("Sprint {}: {}", number, title));
    }
    for file in &report.files {
        println!("  {}", file);
    }
    output.success(&format!(
        "Generated {} file(s) in {}",
        report.generated_files_count, report.output_directory
    ));
}
