//! Shared note model.
//!
//! # Invariants
//! - `last_modified` moves forward on every title or content edit.

use crate::model::user::RecordId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Title given to notes created from the "new note" action.
pub const DEFAULT_NOTE_TITLE: &str = "New Note";
/// Notebook assigned to notes created from the "new note" action.
pub const DEFAULT_NOTEBOOK: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    /// Free-text grouping label, display only.
    pub notebook: String,
    pub is_shared: bool,
    pub last_modified: NaiveDateTime,
}

impl Note {
    /// Empty, unshared note in the default notebook.
    pub fn blank(id: RecordId, now: NaiveDateTime) -> Self {
        Self {
            id,
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
            notebook: DEFAULT_NOTEBOOK.to_string(),
            is_shared: false,
            last_modified: now,
        }
    }
}
