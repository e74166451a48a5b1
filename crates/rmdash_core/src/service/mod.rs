//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations, forms and projections into use-case APIs.
//! - Keep UI layers decoupled from store and storage details.

pub mod app_state;
pub mod dashboard;
pub mod deletion;
pub mod event_service;
pub mod form;
pub mod mailbox;
pub mod note_service;
pub mod preference_service;
pub mod search_session;
pub mod shipment_service;
pub mod task_service;
