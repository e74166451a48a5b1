//! Core domain logic for the RM shipping operations dashboard.
//! This crate is the single source of truth for business invariants.

pub mod calendar;
pub mod clock;
pub mod db;
pub mod kanban;
pub mod logging;
pub mod mail;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;

pub use calendar::{events_on, project, MonthGrid};
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use kanban::{KanbanBoard, KanbanMove, KANBAN_COLUMNS};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use mail::{
    AccessToken, GmailProvider, HttpTransport, MailError, MailProvider, MailResult,
    StaticMailProvider, MAIL_PAGE_SIZE,
};
pub use model::email::{Email, MailProfile};
pub use model::event::{CalendarEvent, CustomEvent, CustomEventKind, EventType};
pub use model::note::Note;
pub use model::preference::Theme;
pub use model::shipment::{Shipment, ShipmentStatus, ShipmentValidationError};
pub use model::task::{SubTask, Task};
pub use model::user::{Priority, RecordId, User};
pub use repo::entity_store::{EntityStore, Record, SaveOutcome};
pub use repo::preference_repo::{
    PreferenceRepository, RepoError, RepoResult, SqlitePreferenceRepository,
};
pub use search::{search, SearchResult, SearchResultKind};
pub use seed::{demo_seed, SeedData};
pub use service::app_state::{ActiveView, AppState};
pub use service::dashboard::DashboardSummary;
pub use service::deletion::{DeleteTarget, PendingDeletion};
pub use service::form::{EventForm, FormError, ProductInput, ShipmentForm, TaskForm};
pub use service::mailbox::MailboxState;
pub use service::preference_service::PreferenceService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
