//! Two-step delete confirmation.
//!
//! # Responsibility
//! - Record a pending destructive action with its user-facing prompt.
//! - Apply it only on explicit confirmation.
//!
//! # Invariants
//! - At most one deletion is pending; a new request replaces the old one.
//! - `cancel_delete` never mutates a store.
//! - Confirming a delete of a missing record is a no-op.

use crate::clock::Clock;
use crate::model::user::RecordId;
use crate::service::app_state::AppState;
use log::info;

/// Record targeted by a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Shipment(RecordId),
    Task(RecordId),
    Note(RecordId),
    CustomEvent(RecordId),
}

impl DeleteTarget {
    pub fn id(&self) -> &str {
        match self {
            Self::Shipment(id) | Self::Task(id) | Self::Note(id) | Self::CustomEvent(id) => id,
        }
    }

    /// Confirmation prompt shown to the user.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Shipment(_) => "Are you sure you want to delete this shipment?",
            Self::Task(_) => "Are you sure you want to delete this task?",
            Self::Note(_) => "Are you sure you want to delete this note?",
            Self::CustomEvent(_) => "Are you sure you want to delete this event?",
        }
    }

    fn log_kind(&self) -> &'static str {
        match self {
            Self::Shipment(_) => "shipment",
            Self::Task(_) => "task",
            Self::Note(_) => "note",
            Self::CustomEvent(_) => "custom_event",
        }
    }
}

/// Delete awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub target: DeleteTarget,
    pub prompt: &'static str,
}

impl<C: Clock> AppState<C> {
    /// Records `target` for confirmation and returns the pending request.
    pub fn request_delete(&mut self, target: DeleteTarget) -> &PendingDeletion {
        let prompt = target.prompt();
        info!(
            "event=delete_request module=deletion kind={}",
            target.log_kind()
        );
        self.pending_deletion.insert(PendingDeletion { target, prompt })
    }

    pub fn pending_deletion(&self) -> Option<&PendingDeletion> {
        self.pending_deletion.as_ref()
    }

    /// Drops the pending request without touching any store.
    pub fn cancel_delete(&mut self) -> Option<DeleteTarget> {
        let pending = self.pending_deletion.take()?;
        info!(
            "event=delete_cancel module=deletion kind={}",
            pending.target.log_kind()
        );
        Some(pending.target)
    }

    /// Performs the pending delete.
    ///
    /// Returns `true` when a record was removed; `false` when nothing was
    /// pending or the record was already gone.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(PendingDeletion { target, .. }) = self.pending_deletion.take() else {
            return false;
        };

        let removed = match &target {
            DeleteTarget::Shipment(id) => {
                let removed = self.shipments.delete(id).is_some();
                if self.selected_shipment_id.as_deref() == Some(id.as_str()) {
                    self.selected_shipment_id = None;
                }
                removed
            }
            DeleteTarget::Task(id) => self.tasks.delete(id).is_some(),
            DeleteTarget::Note(id) => self.remove_note(id).is_some(),
            DeleteTarget::CustomEvent(id) => {
                let removed = self.custom_events.delete(id).is_some();
                if self.selected_event_id.as_deref() == Some(id.as_str()) {
                    self.selected_event_id = None;
                }
                removed
            }
        };

        info!(
            "event=delete_confirm module=deletion kind={} status={}",
            target.log_kind(),
            if removed { "ok" } else { "skip" }
        );
        removed
    }
}
