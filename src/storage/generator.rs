//! Per-item file generation
//!
//! Every sprint, story and subtask becomes one file named from its 1-based
//! position in the plan:
//!
//! ```text
//! {prefix}sprint_1.md
//! {prefix}story_1_1.md
//! {prefix}subtask_1_1_1.md
//! {prefix}subtask_1_1_2.md
//! {prefix}story_1_2.md
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::templates::TemplateSet;
use crate::domain::{select_sprint, Sprint};

/// Kind of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Sprint,
    Story,
    Subtask,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Sprint => "sprint",
            ItemKind::Story => "story",
            ItemKind::Subtask => "subtask",
        }
    }
}

/// Builds a file name such as `plan-story_2_1.md`
pub fn item_file_name(prefix: Option<&str>, kind: ItemKind, numbers: &[usize]) -> String {
    let numbers = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("_");

    format!("{}{}_{}.md", prefix.unwrap_or_default(), kind.as_str(), numbers)
}

/// Writes rendered plan items into an output directory
pub struct FileGenerator {
    output_dir: PathBuf,
    file_prefix: Option<String>,
    templates: TemplateSet,
}

impl FileGenerator {
    pub fn new(output_dir: impl Into<PathBuf>, file_prefix: Option<String>, templates: TemplateSet) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_prefix,
            templates,
        }
    }

    /// Returns the output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generates files for every sprint, in document order
    pub fn generate_all(&self, sprints: &[Sprint]) -> Result<Vec<PathBuf>> {
        self.ensure_output_dir()?;

        let mut files = Vec::new();
        for (idx, sprint) in sprints.iter().enumerate() {
            self.write_sprint_tree(sprint, idx + 1, sprints.len(), &mut files)?;
        }

        Ok(files)
    }

    /// Generates files for the sprint at a zero-based index.
    ///
    /// The sprint is rendered as a one-sprint plan: its files are numbered
    /// from `sprint_1` and `{total_sprints}` is 1.
    pub fn generate_sprint(&self, sprints: &[Sprint], index: usize) -> Result<Vec<PathBuf>> {
        let sprint = select_sprint(sprints, index)?;
        self.ensure_output_dir()?;

        let mut files = Vec::new();
        self.write_sprint_tree(sprint, 1, 1, &mut files)?;

        Ok(files)
    }

    fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory: {}", self.output_dir.display())
        })
    }

    fn write_sprint_tree(
        &self,
        sprint: &Sprint,
        sprint_number: usize,
        total_sprints: usize,
        files: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let content = self.templates.render_sprint(sprint, sprint_number, total_sprints);
        files.push(self.write_item(ItemKind::Sprint, &[sprint_number], &content)?);

        for (story_idx, story) in sprint.stories.iter().enumerate() {
            let story_number = story_idx + 1;
            let content = self.templates.render_story(story, sprint_number, story_number);
            files.push(self.write_item(ItemKind::Story, &[sprint_number, story_number], &content)?);

            for (subtask_idx, subtask) in story.subtasks.iter().enumerate() {
                let subtask_number = subtask_idx + 1;
                let content =
                    self.templates
                        .render_subtask(subtask, sprint_number, story_number, subtask_number);
                files.push(self.write_item(
                    ItemKind::Subtask,
                    &[sprint_number, story_number, subtask_number],
                    &content,
                )?);
            }
        }

        Ok(())
    }

    fn write_item(&self, kind: ItemKind, numbers: &[usize], content: &str) -> Result<PathBuf> {
        let file_name = item_file_name(self.file_prefix.as_deref(), kind, numbers);
        let path = self.output_dir.join(file_name);

        fs::write(&path, content)
            .with_context(|| format!("Failed to write {} file: {}", kind.as_str(), path.display()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_plan, PlanError};
    use tempfile::TempDir;

    fn plan() -> Vec<Sprint> {
        build_plan([
            "Sprint 1.1 Base",
            "User Story: Login",
            "Como um usuário, quero entrar",
            "Tarefa 1.1.1 Tela",
            "Tarefa 1.1.2 API",
            "User Story: Logout",
            "Sprint 1.2 Pagamentos",
            "User Story: Checkout",
            "Tarefa 1.2.1 Gateway",
        ])
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn file_names() {
        assert_eq!(item_file_name(None, ItemKind::Sprint, &[3]), "sprint_3.md");
        assert_eq!(
            item_file_name(Some("proj-"), ItemKind::Subtask, &[1, 2, 3]),
            "proj-subtask_1_2_3.md"
        );
    }

    #[test]
    fn generate_all_in_document_order() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("out");
        let generator = FileGenerator::new(&out, None, TemplateSet::builtin());

        let files = generator.generate_all(&plan()).unwrap();

        assert_eq!(
            names(&files),
            vec![
                "sprint_1.md",
                "story_1_1.md",
                "subtask_1_1_1.md",
                "subtask_1_1_2.md",
                "story_1_2.md",
                "sprint_2.md",
                "story_2_1.md",
                "subtask_2_1_1.md",
            ]
        );
        assert!(files.iter().all(|f| f.is_file()));

        let sprint = fs::read_to_string(out.join("sprint_2.md")).unwrap();
        assert!(sprint.contains("# Sprint 1.2 Pagamentos"));
        assert!(sprint.contains("Sprint 2 of 2"));

        let story = fs::read_to_string(out.join("story_1_1.md")).unwrap();
        assert!(story.contains("*Como um usuário, quero entrar*"));
        assert!(story.contains("Subtasks: 2"));

        let subtask = fs::read_to_string(out.join("subtask_1_1_2.md")).unwrap();
        assert!(subtask.contains("Tarefa 1.1.2 API"));
    }

    #[test]
    fn generate_with_prefix() {
        let dir = TempDir::new().unwrap();
        let generator = FileGenerator::new(dir.path(), Some("acme-".to_string()), TemplateSet::builtin());

        let files = generator.generate_all(&plan()).unwrap();
        assert!(names(&files).iter().all(|n| n.starts_with("acme-")));
        assert!(dir.path().join("acme-story_1_2.md").is_file());
    }

    #[test]
    fn generate_single_sprint_as_one_sprint_plan() {
        let dir = TempDir::new().unwrap();
        let generator = FileGenerator::new(dir.path(), None, TemplateSet::builtin());

        let files = generator.generate_sprint(&plan(), 1).unwrap();

        assert_eq!(names(&files), vec!["sprint_1.md", "story_1_1.md", "subtask_1_1_1.md"]);
        assert!(!dir.path().join("sprint_2.md").exists());

        let sprint = fs::read_to_string(dir.path().join("sprint_1.md")).unwrap();
        assert!(sprint.contains("# Sprint 1.2 Pagamentos"));
        assert!(sprint.contains("Sprint 1 of 1"));

        let subtask = fs::read_to_string(dir.path().join("subtask_1_1_1.md")).unwrap();
        assert!(subtask.contains("Tarefa 1.2.1 Gateway"));
    }

    #[test]
    fn generate_single_sprint_out_of_range() {
        let dir = TempDir::new().unwrap();
        let generator = FileGenerator::new(dir.path().join("out"), None, TemplateSet::builtin());

        let err = generator.generate_sprint(&plan(), 5).unwrap_err();

        assert_eq!(
            err.downcast_ref::<PlanError>(),
            Some(&PlanError::SprintIndexOutOfRange { index: 5, count: 2 })
        );
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn generate_empty_plan_creates_directory_only() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("empty");
        let generator = FileGenerator::new(&out, None, TemplateSet::builtin());

        assert!(generator.generate_all(&[]).unwrap().is_empty());
        assert!(out.is_dir());
    }
}
