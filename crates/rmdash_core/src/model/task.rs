//! Task domain model.
//!
//! # Invariants
//! - Completing a task never rewrites its subtask states, and vice versa.

use crate::model::user::{Priority, RecordId, User};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: RecordId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub assigned_to: User,
    pub due_date: NaiveDateTime,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub category: String,
    pub sub_tasks: Vec<SubTask>,
    pub completed: bool,
}

impl Task {
    /// Flips task-level completion only.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Flips one subtask. Returns `false` when `sub_task_id` is unknown.
    pub fn toggle_sub_task(&mut self, sub_task_id: &str) -> bool {
        match self.sub_tasks.iter_mut().find(|sub| sub.id == sub_task_id) {
            Some(sub) => {
                sub.completed = !sub.completed;
                true
            }
            None => false,
        }
    }

    /// `(completed, total)` subtask counts for progress display.
    pub fn sub_task_progress(&self) -> (usize, usize) {
        let done = self.sub_tasks.iter().filter(|sub| sub.completed).count();
        (done, self.sub_tasks.len())
    }
}
