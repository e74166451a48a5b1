//! Dashboard read model.
//!
//! # Invariants
//! - Built fresh from current state on every read; nothing is cached.
//! - Column order follows the kanban stage order.

use crate::calendar::projector::events_on;
use crate::clock::Clock;
use crate::kanban::KANBAN_COLUMNS;
use crate::model::event::{CalendarEvent, CustomEventKind};
use crate::model::note::Note;
use crate::model::shipment::{Shipment, ShipmentStatus};
use crate::model::task::Task;
use crate::service::app_state::AppState;
use chrono::NaiveDateTime;

/// Tasks listed in the "upcoming" card.
pub const UPCOMING_TASK_LIMIT: usize = 5;
/// Notes listed in the "recent notes" card.
pub const RECENT_NOTE_LIMIT: usize = 3;

/// Shipments in one stage, earliest due date first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColumn<'a> {
    pub status: ShipmentStatus,
    pub shipments: Vec<&'a Shipment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary<'a> {
    /// ToDo plus InProgress shipments.
    pub pending_shipments: usize,
    /// Open tasks due on the current day.
    pub tasks_due_today: usize,
    /// Earliest pickup starting after `now`.
    pub next_pickup: Option<CalendarEvent>,
    pub shipments_by_status: Vec<StatusColumn<'a>>,
    pub upcoming_tasks: Vec<&'a Task>,
    pub recent_notes: Vec<&'a Note>,
    pub today_events: Vec<CalendarEvent>,
}

impl<'a> DashboardSummary<'a> {
    pub fn build<C: Clock>(state: &'a AppState<C>, now: NaiveDateTime) -> Self {
        let today = now.date();

        let pending_shipments = state
            .shipments()
            .iter()
            .filter(|shipment| shipment.status.is_pending())
            .count();

        let tasks_due_today = state
            .tasks()
            .iter()
            .filter(|task| !task.completed && task.due_date.date() == today)
            .count();

        let next_pickup = state
            .custom_events()
            .iter()
            .filter(|event| event.kind == CustomEventKind::Pickup && event.start > now)
            .min_by_key(|event| event.start)
            .map(CalendarEvent::from);

        let shipments_by_status = KANBAN_COLUMNS
            .iter()
            .map(|status| {
                let mut shipments = state
                    .shipments()
                    .iter()
                    .filter(|shipment| shipment.status == *status)
                    .collect::<Vec<_>>();
                shipments.sort_by_key(|shipment| shipment.due_date);
                StatusColumn {
                    status: *status,
                    shipments,
                }
            })
            .collect();

        let mut upcoming_tasks = state
            .tasks()
            .iter()
            .filter(|task| !task.completed)
            .collect::<Vec<_>>();
        upcoming_tasks.sort_by_key(|task| task.due_date);
        upcoming_tasks.truncate(UPCOMING_TASK_LIMIT);

        let mut recent_notes = state.notes().iter().collect::<Vec<_>>();
        recent_notes.sort_by(|left, right| right.last_modified.cmp(&left.last_modified));
        recent_notes.truncate(RECENT_NOTE_LIMIT);

        let projected = state.calendar_events();
        let today_events = events_on(&projected, today).into_iter().cloned().collect();

        Self {
            pending_shipments,
            tasks_due_today,
            next_pickup,
            shipments_by_status,
            upcoming_tasks,
            recent_notes,
            today_events,
        }
    }

    pub fn column(&self, status: ShipmentStatus) -> Option<&StatusColumn<'a>> {
        self.shipments_by_status
            .iter()
            .find(|column| column.status == status)
    }
}

impl<C: Clock> AppState<C> {
    /// Dashboard read model at the clock's `now`.
    pub fn dashboard(&self) -> DashboardSummary<'_> {
        DashboardSummary::build(self, self.clock.now())
    }
}
