//! Calendar event models.
//!
//! # Responsibility
//! - Define the flat event shape consumed by calendar/dashboard views.
//! - Keep user-created (custom) events typed apart from derived markers.
//!
//! # Invariants
//! - Derived event ids are `event-s-<shipmentId>` / `event-t-<taskId>`.
//! - A custom event can only be a pickup or a meeting.
//! - Custom events must have `end >= start`.

use crate::model::user::RecordId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const SHIPMENT_EVENT_PREFIX: &str = "event-s-";
const TASK_EVENT_PREFIX: &str = "event-t-";

/// Event category as seen by views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Derived from a shipment due date.
    Shipment,
    /// Derived from an open task due date.
    Task,
    /// Custom courier pickup slot.
    Pickup,
    /// Custom meeting.
    Meeting,
}

/// Subset of [`EventType`] a user can create directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomEventKind {
    Pickup,
    Meeting,
}

impl From<CustomEventKind> for EventType {
    fn from(value: CustomEventKind) -> Self {
        match value {
            CustomEventKind::Pickup => Self::Pickup,
            CustomEventKind::Meeting => Self::Meeting,
        }
    }
}

impl TryFrom<EventType> for CustomEventKind {
    type Error = EventType;

    fn try_from(value: EventType) -> Result<Self, Self::Error> {
        match value {
            EventType::Pickup => Ok(Self::Pickup),
            EventType::Meeting => Ok(Self::Meeting),
            other => Err(other),
        }
    }
}

/// User-managed calendar entry persisted in the custom event store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEvent {
    pub id: RecordId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: CustomEventKind,
    /// Opaque handle of the external resource (courier, room).
    pub resource_id: String,
}

/// Flat calendar entry produced by [`crate::calendar::project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: RecordId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Source shipment/task id for derived events.
    pub resource_id: String,
}

impl From<&CustomEvent> for CalendarEvent {
    fn from(value: &CustomEvent) -> Self {
        Self {
            id: value.id.clone(),
            title: value.title.clone(),
            start: value.start,
            end: value.end,
            kind: value.kind.into(),
            resource_id: value.resource_id.clone(),
        }
    }
}

/// Calendar id of the due-date marker for shipment `shipment_id`.
pub fn shipment_event_id(shipment_id: &str) -> RecordId {
    format!("{SHIPMENT_EVENT_PREFIX}{shipment_id}")
}

/// Calendar id of the due-date marker for task `task_id`.
pub fn task_event_id(task_id: &str) -> RecordId {
    format!("{TASK_EVENT_PREFIX}{task_id}")
}

/// Whether `event_id` names a derived marker rather than a custom event.
pub fn is_derived_event_id(event_id: &str) -> bool {
    event_id.starts_with(SHIPMENT_EVENT_PREFIX) || event_id.starts_with(TASK_EVENT_PREFIX)
}
