//! Domain model for the dashboard collections.
//!
//! # Responsibility
//! - Define the records behind shipments, tasks, notes, calendar and mail.
//! - Keep the camelCase wire shape expected by the view layer.
//!
//! # Invariants
//! - Every stored record is identified by a unique `RecordId` within its
//!   collection.
//! - Derived calendar markers are never stored; only custom events are.

pub mod email;
pub mod event;
pub mod note;
pub mod preference;
pub mod shipment;
pub mod task;
pub mod user;
