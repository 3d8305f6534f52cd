//! Domain models for sprintdoc
//!
//! Contains the plan model and the document parser without any I/O concerns.

mod plan;
mod classify;
mod builder;

pub use plan::{select_sprint, PlanError, PlanSummary, Sprint, SprintSummary, Story, StorySummary, Subtask};
pub use classify::{classify, classify_sprint, classify_story, classify_subtask, LineKind, SprintHeading, SubtaskHeading};
pub use builder::{build_plan, parse_plan, split_lines};
