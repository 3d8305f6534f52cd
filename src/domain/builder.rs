//! Hierarchy builder
//!
//! Rebuilds the sprint → story → subtask tree from the flat line sequence
//! of a plan document in a single pass.
//!
//! Plain lines are held in a pending buffer until the next title line
//! forces a flush. The flush target is the deepest open entity:
//!
//! - an open subtask gets a line break plus the lines appended, even when
//!   no lines are buffered, so a subtask closed by a title ends with `\n`
//! - otherwise an open story takes them as its content
//! - otherwise they are dropped (nothing owns them yet)
//!
//! At end of input only buffered lines are flushed, so the last subtask
//! never gains a bare trailing line break.
//!
//! Once a story has a subtask, later lines only ever reach subtasks.
//!
//! Lines are trimmed of whitespace and of the U+FEFF byte order mark that
//! text exports often start with.

use super::classify::{classify, LineKind};
use super::plan::{Sprint, Story, Subtask};

/// Splits extracted document text into trimmed, non-empty lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Parses extracted document text into sprints
pub fn parse_plan(text: &str) -> Vec<Sprint> {
    build_plan(split_lines(text))
}

/// Builds the sprint tree from an ordered sequence of lines.
///
/// Lines are trimmed and blank ones skipped, so raw extractor output is
/// accepted as well. Never fails: anything unrecognized is content.
pub fn build_plan<I, S>(lines: I) -> Vec<Sprint>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ScanState::default();

    for line in lines {
        let line = trim_line(line.as_ref());
        if line.is_empty() {
            continue;
        }
        state.push_line(line);
    }

    state.finish()
}

/// Scan state for one parse
#[derive(Debug, Default)]
struct ScanState {
    sprints: Vec<Sprint>,
    sprint: Option<Sprint>,
    story: Option<Story>,
    subtask: Option<Subtask>,
    pending: Vec<String>,
}

impl ScanState {
    fn push_line(&mut self, line: &str) {
        match classify(line, self.sprint.is_some(), self.story.is_some()) {
            LineKind::Sprint(_) => self.open_sprint(line),
            LineKind::Story => self.open_story(line),
            LineKind::Subtask(_) => self.open_subtask(line),
            LineKind::Content => self.pending.push(line.to_string()),
        }
    }

    fn open_sprint(&mut self, title: &str) {
        self.flush_pending();
        self.close_story();
        if let Some(sprint) = self.sprint.take() {
            self.sprints.push(sprint);
        }
        self.sprint = Some(Sprint::new(title));
    }

    fn open_story(&mut self, title: &str) {
        self.flush_pending();
        self.close_story();
        self.story = Some(Story::new(title));
    }

    fn open_subtask(&mut self, title: &str) {
        // With no subtask open yet this is the first-subtask boundary:
        // the buffered lines become the story's content.
        self.flush_pending();
        self.close_subtask();
        self.subtask = Some(Subtask::new(title));
    }

    /// Flushes the buffer on a title transition
    fn flush_pending(&mut self) {
        let text = self.pending.join("\n");
        self.pending.clear();

        if let Some(subtask) = self.subtask.as_mut() {
            subtask.content.push('\n');
            subtask.content.push_str(&text);
        } else if let Some(story) = self.story.as_mut().filter(|_| !text.is_empty()) {
            story.content = text;
        }
    }

    fn close_subtask(&mut self) {
        if let (Some(subtask), Some(story)) = (self.subtask.take(), self.story.as_mut()) {
            story.subtasks.push(subtask);
        }
    }

    fn close_story(&mut self) {
        self.close_subtask();
        if let (Some(story), Some(sprint)) = (self.story.take(), self.sprint.as_mut()) {
            sprint.stories.push(story);
        }
    }

    fn finish(mut self) -> Vec<Sprint> {
        if !self.pending.is_empty() {
            self.flush_pending();
        }
        self.close_story();
        if let Some(sprint) = self.sprint.take() {
            self.sprints.push(sprint);
        }
        self.sprints
    }
}
