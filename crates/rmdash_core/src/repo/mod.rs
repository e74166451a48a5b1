//! Record collections and preference persistence.
//!
//! # Responsibility
//! - Own the ordered in-memory stores behind every entity collection.
//! - Isolate SQLite details of preference storage from services.
//!
//! # Invariants
//! - Store mutations are total: unknown ids are no-ops, never errors.
//! - Preference repositories only accept migrated connections.

pub mod entity_store;
pub mod preference_repo;
