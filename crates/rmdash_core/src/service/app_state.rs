//! Application state aggregate.
//!
//! # Responsibility
//! - Own every record store plus navigation, selection and session state.
//! - Serve as the single mutation entry point for all views.
//!
//! # Invariants
//! - `active_note_id` is `None` or names an existing note.
//! - Selections are cleared when their record is deleted.
//! - Derived data (calendar, dashboard, board) is recomputed on read.

use crate::clock::Clock;
use crate::model::email::Email;
use crate::model::event::CustomEvent;
use crate::model::note::Note;
use crate::model::shipment::Shipment;
use crate::model::task::Task;
use crate::model::user::{RecordId, User};
use crate::repo::entity_store::EntityStore;
use crate::seed::{demo_seed, SeedData};
use crate::service::deletion::PendingDeletion;
use crate::service::mailbox::MailboxState;
use crate::service::search_session::SearchSession;
use log::info;

/// Top-level view shown in the main panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Kanban,
    Todo,
    Calendar,
    Mail,
    Notes,
}

impl ActiveView {
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Kanban,
        Self::Todo,
        Self::Calendar,
        Self::Mail,
        Self::Notes,
    ];

    /// Header title for the view.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Kanban => "Shipments",
            Self::Todo => "To-Do List",
            Self::Calendar => "Calendar",
            Self::Mail => "Mail",
            Self::Notes => "Shared Notes",
        }
    }

    fn log_name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Kanban => "kanban",
            Self::Todo => "todo",
            Self::Calendar => "calendar",
            Self::Mail => "mail",
            Self::Notes => "notes",
        }
    }
}

/// Whole in-memory application state.
pub struct AppState<C: Clock> {
    pub(super) clock: C,
    pub(super) users: Vec<User>,
    pub(super) shipments: EntityStore<Shipment>,
    pub(super) tasks: EntityStore<Task>,
    pub(super) notes: EntityStore<Note>,
    pub(super) custom_events: EntityStore<CustomEvent>,
    pub(super) mailbox: MailboxState,
    pub(super) search: SearchSession,
    pub(super) active_view: ActiveView,
    pub(super) selected_shipment_id: Option<RecordId>,
    pub(super) selected_event_id: Option<RecordId>,
    pub(super) active_note_id: Option<RecordId>,
    pub(super) pending_deletion: Option<PendingDeletion>,
}

impl<C: Clock> AppState<C> {
    /// Builds state from boot data. The first note becomes active.
    pub fn new(clock: C, seed: SeedData) -> Self {
        let notes = EntityStore::from_records(seed.notes);
        let active_note_id = notes.first().map(|note| note.id.clone());
        let state = Self {
            clock,
            users: seed.users,
            shipments: EntityStore::from_records(seed.shipments),
            tasks: EntityStore::from_records(seed.tasks),
            notes,
            custom_events: EntityStore::from_records(seed.custom_events),
            mailbox: MailboxState::new(),
            search: SearchSession::default(),
            active_view: ActiveView::Dashboard,
            selected_shipment_id: None,
            selected_event_id: None,
            active_note_id,
            pending_deletion: None,
        };
        info!(
            "event=state_init module=state status=ok shipments={} tasks={} notes={} events={}",
            state.shipments.len(),
            state.tasks.len(),
            state.notes.len(),
            state.custom_events.len()
        );
        state
    }

    /// State seeded with the demo data set around the clock's `now`.
    pub fn seeded(clock: C) -> Self {
        let seed = demo_seed(clock.now());
        Self::new(clock, seed)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn shipments(&self) -> &[Shipment] {
        self.shipments.as_slice()
    }

    pub fn shipment(&self, id: &str) -> Option<&Shipment> {
        self.shipments.get(id)
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.as_slice()
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn custom_events(&self) -> &[CustomEvent] {
        self.custom_events.as_slice()
    }

    pub fn mailbox(&self) -> &MailboxState {
        &self.mailbox
    }

    pub fn mailbox_mut(&mut self) -> &mut MailboxState {
        &mut self.mailbox
    }

    /// Cached inbox message by id.
    pub fn email(&self, id: &str) -> Option<&Email> {
        self.mailbox.message(id)
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn view_title(&self) -> &'static str {
        self.active_view.title()
    }

    /// Switches the main panel.
    pub fn navigate(&mut self, view: ActiveView) {
        if self.active_view != view {
            info!(
                "event=navigate module=state from={} to={}",
                self.active_view.log_name(),
                view.log_name()
            );
        }
        self.active_view = view;
    }

    pub fn selected_shipment_id(&self) -> Option<&str> {
        self.selected_shipment_id.as_deref()
    }

    pub fn selected_shipment(&self) -> Option<&Shipment> {
        self.selected_shipment_id
            .as_deref()
            .and_then(|id| self.shipments.get(id))
    }

    /// Opens (or with `None` closes) the shipment detail.
    ///
    /// Returns `false` and changes nothing when the id is unknown.
    pub fn select_shipment(&mut self, id: Option<&str>) -> bool {
        match id {
            Some(id) if !self.shipments.contains(id) => false,
            _ => {
                self.selected_shipment_id = id.map(str::to_string);
                true
            }
        }
    }

    pub fn active_note_id(&self) -> Option<&str> {
        self.active_note_id.as_deref()
    }

    pub fn active_note(&self) -> Option<&Note> {
        self.active_note_id
            .as_deref()
            .and_then(|id| self.notes.get(id))
    }

    /// Sets the active note. Unknown ids are rejected.
    pub fn set_active_note(&mut self, id: Option<&str>) -> bool {
        match id {
            Some(id) if !self.notes.contains(id) => false,
            _ => {
                self.active_note_id = id.map(str::to_string);
                true
            }
        }
    }

    /// First user, the default assignee for generated records.
    pub(super) fn default_assignee(&self) -> Option<&User> {
        self.users.first()
    }
}

#[cfg(test)]
mod tests {
    use super::{ActiveView, AppState};
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn state() -> AppState<FixedClock> {
        let now = NaiveDate::from_ymd_opt(2026, 7, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        AppState::seeded(FixedClock::at(now))
    }

    #[test]
    fn seeded_state_starts_on_dashboard_with_first_note_active() {
        let state = state();
        assert_eq!(state.active_view(), ActiveView::Dashboard);
        assert_eq!(state.view_title(), "Dashboard");
        assert_eq!(state.active_note_id(), Some("n1"));
    }

    #[test]
    fn unknown_selection_is_rejected() {
        let mut state = state();
        assert!(!state.select_shipment(Some("missing")));
        assert!(state.selected_shipment().is_none());
        assert!(state.select_shipment(Some("s2")));
        assert_eq!(state.selected_shipment().unwrap().order_number, "RM-00124");
        assert!(!state.set_active_note(Some("missing")));
        assert_eq!(state.active_note_id(), Some("n1"));
    }
}
