//! Plan domain model
//!
//! A plan is an ordered list of sprints. Each sprint owns its stories and
//! each story owns its subtasks, always in document order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Invalid sprint index: {index}. Valid range: 0-{}", .count.saturating_sub(1))]
    SprintIndexOutOfRange { index: usize, count: usize },

    #[error("Invalid sprint index: {0}. The document contains no sprints")]
    NoSprints(usize),
}

/// Top-level planning period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    /// The full title line, e.g. `Sprint 1.1 Kickoff`
    pub title: String,

    /// Reserved; no document pattern populates it yet
    pub description: String,

    pub stories: Vec<Story>,
}

impl Sprint {
    /// Creates an empty sprint from its title line
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            stories: Vec::new(),
        }
    }

    /// Total number of subtasks across all stories
    pub fn subtask_count(&self) -> usize {
        self.stories.iter().map(|s| s.subtasks.len()).sum()
    }
}

/// A unit of work within a sprint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,

    /// Narrative text between the title and the first subtask
    pub content: String,

    pub subtasks: Vec<Subtask>,
}

impl Story {
    /// Creates an empty story from its title line
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            subtasks: Vec::new(),
        }
    }
}

/// Smallest unit of work; its content starts with the title line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub content: String,
}

impl Subtask {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Selects a sprint by zero-based index
pub fn select_sprint(sprints: &[Sprint], index: usize) -> Result<&Sprint, PlanError> {
    if sprints.is_empty() {
        return Err(PlanError::NoSprints(index));
    }

    sprints.get(index).ok_or(PlanError::SprintIndexOutOfRange {
        index,
        count: sprints.len(),
    })
}

/// Serializable overview of a parsed plan (counts and titles)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_sprints: usize,
    pub sprints: Vec<SprintSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintSummary {
    pub sprint_number: usize,
    pub title: String,
    pub description: String,
    pub story_count: usize,
    pub stories: Vec<StorySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySummary {
    pub story_number: usize,
    pub title: String,
    /// Length of the story content in characters
    pub content_length: usize,
    pub subtask_count: usize,
}

impl PlanSummary {
    /// Builds a summary with 1-based sprint and story numbers
    pub fn from_sprints(sprints: &[Sprint]) -> Self {
        let sprints = sprints
            .iter()
            .enumerate()
            .map(|(idx, sprint)| SprintSummary {
                sprint_number: idx + 1,
                title: sprint.title.clone(),
                description: sprint.description.clone(),
                story_count: sprint.stories.len(),
                stories: sprint
                    .stories
                    .iter()
                    .enumerate()
                    .map(|(story_idx, story)| StorySummary {
                        story_number: story_idx + 1,
                        title: story.title.clone(),
                        content_length: story.content.chars().count(),
                        subtask_count: story.subtasks.len(),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        Self {
            total_sprints: sprints.len(),
            sprints,
        }
    }

    /// Total number of stories across all sprints
    pub fn story_count(&self) -> usize {
        self.sprints.iter().map(|s| s.story_count).sum()
    }

    /// Total number of subtasks across all stories
    pub fn subtask_count(&self) -> usize {
        self.sprints
            .iter()
            .flat_map(|s| s.stories.iter())
            .map(|s| s.subtask_count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Sprint> {
        let mut login = Story::new("User Story: Login");
        login.content = "Como um usuário, quero entrar".to_string();
        login.subtasks.push(Subtask::new("Tarefa 1.1.1 Design"));
        login.subtasks.push(Subtask::new("Tarefa 1.1.2 API"));

        let mut first = Sprint::new("Sprint 1.1 Kickoff");
        first.stories.push(login);
        first.stories.push(Story::new("User Story: Logout"));

        vec![first, Sprint::new("Sprint 1.2")]
    }

    #[test]
    fn select_sprint_in_range() {
        let sprints = sample();
        assert_eq!(select_sprint(&sprints, 1).unwrap().title, "Sprint 1.2");
    }

    #[test]
    fn select_sprint_out_of_range() {
        let sprints = sample();
        let err = select_sprint(&sprints, 5).unwrap_err();

        assert_eq!(err, PlanError::SprintIndexOutOfRange { index: 5, count: 2 });
        assert_eq!(err.to_string(), "Invalid sprint index: 5. Valid range: 0-1");
    }

    #[test]
    fn select_sprint_from_empty_plan() {
        let err = select_sprint(&[], 0).unwrap_err();
        assert_eq!(err, PlanError::NoSprints(0));
        assert!(err.to_string().contains("no sprints"));
    }

    #[test]
    fn summary_counts_and_numbers() {
        let summary = PlanSummary::from_sprints(&sample());

        assert_eq!(summary.total_sprints, 2);
        assert_eq!(summary.story_count(), 2);
        assert_eq!(summary.subtask_count(), 2);

        let first = &summary.sprints[0];
        assert_eq!(first.sprint_number, 1);
        assert_eq!(first.story_count, 2);
        assert_eq!(first.stories[0].story_number, 1);
        assert_eq!(first.stories[0].subtask_count, 2);
        assert_eq!(first.stories[1].content_length, 0);
        assert_eq!(summary.sprints[1].sprint_number, 2);
    }

    #[test]
    fn summary_content_length_counts_chars() {
        let mut story = Story::new("Story");
        story.content = "ação".to_string();
        let mut sprint = Sprint::new("Sprint 1.1");
        sprint.stories.push(story);

        let summary = PlanSummary::from_sprints(&[sprint]);
        assert_eq!(summary.sprints[0].stories[0].content_length, 4);
    }

    #[test]
    fn summary_serializes_field_names() {
        let json = serde_json::to_value(PlanSummary::from_sprints(&sample())).unwrap();

        assert_eq!(json["total_sprints"], 2);
        assert_eq!(json["sprints"][0]["title"], "Sprint 1.1 Kickoff");
        assert_eq!(json["sprints"][0]["description"], "");
        assert_eq!(json["sprints"][0]["stories"][0]["subtask_count"], 2);
    }
}
