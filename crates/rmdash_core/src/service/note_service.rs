//! Shared-notes use-cases.
//!
//! # Responsibility
//! - Create and edit notes, keeping `last_modified` current.
//! - Serve notebook groupings for the notes sidebar.
//!
//! # Invariants
//! - Every edit stamps `last_modified` with the clock's `now`.
//! - Removing the active note re-points the selection to the first
//!   remaining note, or none.

use crate::clock::Clock;
use crate::model::note::Note;
use crate::model::user::{new_record_id, RecordId};
use crate::service::app_state::{ActiveView, AppState};
use log::info;

impl<C: Clock> AppState<C> {
    /// Prepends a blank note and makes it active.
    pub fn create_note(&mut self) -> RecordId {
        let note = Note::blank(new_record_id(), self.clock.now());
        let id = note.id.clone();
        self.notes.save(note);
        self.active_note_id = Some(id.clone());
        info!("event=note_create module=notes status=ok");
        id
    }

    pub fn update_note_title(&mut self, id: &str, title: &str) -> bool {
        let now = self.clock.now();
        self.notes.update(id, |note| {
            note.title = title.to_string();
            note.last_modified = now;
        })
    }

    pub fn update_note_content(&mut self, id: &str, content: &str) -> bool {
        let now = self.clock.now();
        self.notes.update(id, |note| {
            note.content = content.to_string();
            note.last_modified = now;
        })
    }

    /// Activates a note and switches to the notes view.
    pub fn open_note(&mut self, id: &str) -> bool {
        if !self.set_active_note(Some(id)) {
            return false;
        }
        self.navigate(ActiveView::Notes);
        true
    }

    /// Distinct notebook labels in first-seen order.
    pub fn notebooks(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for note in &self.notes {
            if !labels.contains(&note.notebook.as_str()) {
                labels.push(&note.notebook);
            }
        }
        labels
    }

    pub fn notes_in(&self, notebook: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|note| note.notebook == notebook)
            .collect()
    }

    pub(super) fn remove_note(&mut self, id: &str) -> Option<Note> {
        let removed = self.notes.delete(id)?;
        if self.active_note_id.as_deref() == Some(id) {
            self.active_note_id = self.notes.first().map(|note| note.id.clone());
        }
        Some(removed)
    }
}
