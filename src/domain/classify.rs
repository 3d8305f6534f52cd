//! Title classification for plan documents
//!
//! Each line of a plan is either a sprint title, a story title, a subtask
//! title, or plain content. Sprint and subtask titles are anchored numeric
//! patterns; story titles are a loose substring match.
//!
//! | Level | Rule | Example |
//! |-------|------|---------|
//! | Sprint | `^Sprint <int>.<int>` (any case) | `Sprint 1.2 Payments` |
//! | Story | contains a story marker (any case) | `User Story: Checkout` |
//! | Subtask | `^Tarefa <int>.<int>.<int>` (any case) | `Tarefa 1.2.3 Webhooks` |

use std::sync::LazyLock;

use regex::Regex;

static SPRINT_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Sprint\s+([0-9]+\.[0-9]+)").expect("valid sprint pattern")
});

static SUBTASK_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Tarefa\s+([0-9]+\.[0-9]+\.[0-9]+)").expect("valid subtask pattern")
});

/// Phrases that mark a story title, matched against the lowercased line
const STORY_MARKERS: [&str; 3] = ["user story", "história de usuário", "story"];

/// A recognized sprint title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintHeading {
    /// Level identifier, e.g. `1.2`
    pub number: String,
}

/// A recognized subtask title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskHeading {
    /// Level identifier, e.g. `1.2.3`
    pub number: String,
}

/// Classification of a single line in scan context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Sprint(SprintHeading),
    Story,
    Subtask(SubtaskHeading),
    Content,
}

/// Returns the sprint heading if the line opens a sprint
pub fn classify_sprint(line: &str) -> Option<SprintHeading> {
    SPRINT_TITLE.captures(line).map(|caps| SprintHeading {
        number: caps[1].to_string(),
    })
}

/// Returns true if the line contains any story marker
pub fn classify_story(line: &str) -> bool {
    let lower = line.to_lowercase();
    STORY_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Returns the subtask heading if the line opens a subtask
pub fn classify_subtask(line: &str) -> Option<SubtaskHeading> {
    SUBTASK_TITLE.captures(line).map(|caps| SubtaskHeading {
        number: caps[1].to_string(),
    })
}

/// Classifies a line given which levels are currently open.
///
/// Priority is sprint, then story, then subtask. A story title without an
/// open sprint, or a subtask title without an open story, is plain content.
pub fn classify(line: &str, has_sprint: bool, has_story: bool) -> LineKind {
    if let Some(heading) = classify_sprint(line) {
        return LineKind::Sprint(heading);
    }

    if has_sprint && classify_story(line) {
        return LineKind::Story;
    }

    if has_story {
        if let Some(heading) = classify_subtask(line) {
            return LineKind::Subtask(heading);
        }
    }

    LineKind::Content
}
