//! sprintdoc - Split sprint planning documents into per-item files
//!
//! A plan document lists sprints (`Sprint 1.1 ...`), their user stories and
//! the stories' subtasks (`Tarefa 1.1.1 ...`) as plain paragraphs. sprintdoc
//! rebuilds that hierarchy and renders one file per item through templates,
//! ready for import into an issue tracker.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{build_plan, parse_plan, PlanSummary, Sprint, Story, Subtask};
