//! Derived calendar projection.
//!
//! # Responsibility
//! - Merge shipment due dates, open task due dates and custom events into
//!   one flat event sequence.
//!
//! # Invariants
//! - Exactly one `event-s-<id>` per shipment, whatever its status.
//! - `event-t-<id>` exists iff the task is not completed.
//! - Custom events pass through unchanged.
//! - Projection is total and stateless; callers rerun it after any change.

use crate::model::event::{
    shipment_event_id, task_event_id, CalendarEvent, CustomEvent, EventType,
};
use crate::model::shipment::Shipment;
use crate::model::task::Task;
use chrono::NaiveDate;

/// Projects all calendar sources into view-ready events.
///
/// Output order is shipments, open tasks, custom events; consumers sort by
/// start time as needed.
pub fn project(
    shipments: &[Shipment],
    tasks: &[Task],
    custom_events: &[CustomEvent],
) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(shipments.len() + tasks.len() + custom_events.len());
    events.extend(shipments.iter().map(shipment_marker));
    events.extend(tasks.iter().filter(|task| !task.completed).map(task_marker));
    events.extend(custom_events.iter().map(CalendarEvent::from));
    events
}

/// Events starting on `day`, earliest first.
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    let mut matching = events
        .iter()
        .filter(|event| event.start.date() == day)
        .collect::<Vec<_>>();
    matching.sort_by_key(|event| event.start);
    matching
}

fn shipment_marker(shipment: &Shipment) -> CalendarEvent {
    CalendarEvent {
        id: shipment_event_id(&shipment.id),
        title: format!("Due {}", shipment.order_number),
        start: shipment.due_date,
        end: shipment.due_date,
        kind: EventType::Shipment,
        resource_id: shipment.id.clone(),
    }
}

fn task_marker(task: &Task) -> CalendarEvent {
    CalendarEvent {
        id: task_event_id(&task.id),
        title: task.title.clone(),
        start: task.due_date,
        end: task.due_date,
        kind: EventType::Task,
        resource_id: task.id.clone(),
    }
}
