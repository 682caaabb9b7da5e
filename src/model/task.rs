use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text of the task seeded into an empty list on startup.
pub const PLACEHOLDER_TEXT: &str = "First task, add some new tasks!";

/// Task lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Todo,
    Done,
    Cancelled,
}

/// Snapshot of a task's mutable fields, taken before an edit so the edit can
/// be rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    pub state: TaskState,
    pub text: String,
    pub date: Option<DateTime<Utc>>,
}

/// A single to-do item.
///
/// The completion date is set exactly when the state is `Done` or
/// `Cancelled`; every transition below keeps that true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    state: TaskState,
    text: String,
    #[serde(rename = "completionDate", alias = "date", default)]
    date: Option<DateTime<Utc>>,
    #[serde(skip)]
    checkpoint: Option<Checkpoint>,
}

impl Task {
    /// Create a TODO task. The new task starts with a checkpoint of itself.
    pub fn new(text: impl Into<String>) -> Self {
        let mut task = Task {
            state: TaskState::Todo,
            text: text.into(),
            date: None,
            checkpoint: None,
        };
        task.checkpoint();
        task
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the task was completed or cancelled
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Replace the text. Editing always demotes the task to TODO and drops
    /// its completion date.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.mark_todo();
    }

    pub fn mark_todo(&mut self) {
        self.state = TaskState::Todo;
        self.date = None;
    }

    pub fn mark_done(&mut self) {
        self.state = TaskState::Done;
        self.date = Some(Utc::now());
    }

    pub fn mark_cancelled(&mut self) {
        self.state = TaskState::Cancelled;
        self.date = Some(Utc::now());
    }

    /// The text cut down to at most `max_width` characters, ending in `…`
    /// when it had to be shortened. Counts chars, not display cells.
    pub fn excerpt(&self, max_width: usize) -> String {
        if self.text.chars().count() <= max_width {
            return self.text.clone();
        }
        if max_width == 0 {
            return String::new();
        }
        let mut out: String = self.text.chars().take(max_width - 1).collect();
        out.push('\u{2026}');
        out
    }

    /// Remember the current state, text and date.
    pub fn checkpoint(&mut self) {
        self.checkpoint = Some(Checkpoint {
            state: self.state,
            text: self.text.clone(),
            date: self.date,
        });
    }

    /// Roll back to the last checkpoint, consuming it. Returns false if there
    /// was none.
    pub fn restore_checkpoint(&mut self) -> bool {
        match self.checkpoint.take() {
            Some(cp) => {
                self.state = cp.state;
                self.text = cp.text;
                self.date = cp.date;
                true
            }
            None => false,
        }
    }

    /// Keep the current fields and forget the checkpoint.
    pub fn commit_edit(&mut self) {
        self.checkpoint = None;
    }

    pub fn has_checkpoint(&self) -> bool {
        self.checkpoint.is_some()
    }

    /// Repair records loaded from disk: a TODO task never carries a date.
    pub(crate) fn normalize(&mut self) {
        if self.state == TaskState::Todo {
            self.date = None;
        }
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.text == other.text && self.date == other.date
    }
}

impl Eq for Task {}
