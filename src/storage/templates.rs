//! Template rendering for generated files
//!
//! A template set is three markdown files (`sprint.md`, `story.md`,
//! `subtask.md`) containing literal `{placeholder}` tokens. Every occurrence
//! of a token is replaced; braces in substituted content are left alone.
//!
//! | Template | Placeholders |
//! |----------|--------------|
//! | `sprint.md` | `{sprint_title}` `{sprint_number}` `{total_sprints}` `{sprint_description}` `{story_count}` |
//! | `story.md` | `{story_title}` `{sprint_number}` `{story_number}` `{story_content}` `{subtask_count}` |
//! | `subtask.md` | `{subtask_content}` `{sprint_number}` `{story_number}` `{subtask_number}` |
//!
//! Story content is reformatted into Jira markup before substitution
//! (see [`format_story_content`]).

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use thiserror::Error;

use crate::domain::{Sprint, Story, Subtask};

pub const SPRINT_TEMPLATE_FILE: &str = "sprint.md";
pub const STORY_TEMPLATE_FILE: &str = "story.md";
pub const SUBTASK_TEMPLATE_FILE: &str = "subtask.md";

const BUILTIN_SPRINT: &str = "\
# {sprint_title}

Sprint {sprint_number} of {total_sprints}

{sprint_description}

Stories: {story_count}
";

const BUILTIN_STORY: &str = "\
h2. {story_title}

Sprint {sprint_number} / Story {story_number}

{story_content}

Subtasks: {subtask_count}
";

const BUILTIN_SUBTASK: &str = "\
Sprint {sprint_number} / Story {story_number} / Subtask {subtask_number}

{subtask_content}
";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template already exists: {0} (use --force to overwrite)")]
    AlreadyExists(String),
}

/// Line rewrites applied to story content, in order
static STORY_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?m)^(Como uma?.*)$", "*${1}*\n"),
        (r"(?m)^(Critérios de Aceite.*)$", "\nh3. ${1}\n"),
        (r"(?m)^(Cenário [0-9]+:.*)$", "\n*${1}*"),
        (r"(?m)^(Dado que.*)$", "* {color:#00875a}✓{color} ${1}"),
        (r"(?m)^(Quando.*)$", "* {color:#0052cc}→{color} ${1}"),
        (r"(?m)^(Então.*)$", "* {color:#6554c0}✓{color} ${1}"),
        (r"(?m)^(Sub-Tarefas.*)$", "\n----\n\nh3. ${1}\n"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("valid story rule"), replacement)
    })
    .collect()
});

/// Reformats story content into Jira markup.
///
/// Recognizes the user story opening (`Como um…`), the acceptance criteria
/// header, numbered scenarios and `Dado que`/`Quando`/`Então` steps.
pub fn format_story_content(content: &str) -> String {
    let formatted = STORY_RULES
        .iter()
        .fold(content.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        });

    formatted.trim().to_string()
}

/// Replaces every `{name}` token in order
fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}

/// The sprint, story and subtask templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub sprint: String,
    pub story: String,
    pub subtask: String,
}

impl TemplateSet {
    /// Built-in templates used when no template directory is configured
    pub fn builtin() -> Self {
        Self {
            sprint: BUILTIN_SPRINT.to_string(),
            story: BUILTIN_STORY.to_string(),
            subtask: BUILTIN_SUBTASK.to_string(),
        }
    }

    /// Loads `sprint.md`, `story.md` and `subtask.md` from a directory
    pub fn load(dir: &Path) -> Result<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to load template: {}", path.display()))
        };

        Ok(Self {
            sprint: read(SPRINT_TEMPLATE_FILE)?,
            story: read(STORY_TEMPLATE_FILE)?,
            subtask: read(SUBTASK_TEMPLATE_FILE)?,
        })
    }

    /// Loads from `dir` if given, otherwise returns the built-in set
    pub fn load_or_builtin(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load(dir),
            None => Ok(Self::builtin()),
        }
    }

    /// Writes the three templates into `dir`, returning the written paths
    pub fn write_to(&self, dir: &Path, force: bool) -> Result<Vec<std::path::PathBuf>> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let files = [
            (SPRINT_TEMPLATE_FILE, &self.sprint),
            (STORY_TEMPLATE_FILE, &self.story),
            (SUBTASK_TEMPLATE_FILE, &self.subtask),
        ];

        if !force {
            if let Some((name, _)) = files.iter().find(|(name, _)| dir.join(name).exists()) {
                return Err(TemplateError::AlreadyExists(dir.join(name).display().to_string()).into());
            }
        }

        let mut written = Vec::with_capacity(files.len());
        for (name, content) in files {
            let path = dir.join(name);
            fs::write(&path, content)
                .with_context(|| format!("Failed to write template: {}", path.display()))?;
            written.push(path);
        }

        Ok(written)
    }

    /// Renders a sprint file
    pub fn render_sprint(&self, sprint: &Sprint, sprint_number: usize, total_sprints: usize) -> String {
        substitute(
            &self.sprint,
            &[
                ("sprint_title", sprint.title.as_str()),
                ("sprint_number", sprint_number.to_string().as_str()),
                ("total_sprints", total_sprints.to_string().as_str()),
                ("sprint_description", sprint.description.as_str()),
                ("story_count", sprint.stories.len().to_string().as_str()),
            ],
        )
    }

    /// Renders a story file; the content goes through [`format_story_content`]
    pub fn render_story(&self, story: &Story, sprint_number: usize, story_number: usize) -> String {
        substitute(
            &self.story,
            &[
                ("story_title", story.title.as_str()),
                ("sprint_number", sprint_number.to_string().as_str()),
                ("story_number", story_number.to_string().as_str()),
                ("story_content", format_story_content(&story.content).as_str()),
                ("subtask_count", story.subtasks.len().to_string().as_str()),
            ],
        )
    }

    /// Renders a subtask file
    pub fn render_subtask(
        &self,
        subtask: &Subtask,
        sprint_number: usize,
        story_number: usize,
        subtask_number: usize,
    ) -> String {
        substitute(
            &self.subtask,
            &[
                ("subtask_content", subtask.content.as_str()),
                ("sprint_number", sprint_number.to_string().as_str()),
                ("story_number", story_number.to_string().as_str()),
                ("subtask_number", subtask_number.to_string().as_str()),
            ],
        )
    }
}
