//! Calendar projection and layout.
//!
//! # Responsibility
//! - Derive the unified event sequence from shipments, tasks and custom
//!   events.
//! - Provide day filtering and month layout for calendar views.

pub mod month;
pub mod projector;

pub use month::MonthGrid;
pub use projector::{events_on, project};
