//! Mail integration adapter.
//!
//! # Responsibility
//! - Exchange an access token for a profile and one page of inbox
//!   summaries.
//! - Treat every backend failure as "no data" at the state layer.
//!
//! # Invariants
//! - Core never writes to the mailbox; the integration is read-only.

pub mod gmail;
pub mod provider;

pub use gmail::{GmailProvider, HttpTransport};
pub use provider::{
    AccessToken, MailError, MailProvider, MailResult, StaticMailProvider, MAIL_PAGE_SIZE,
};
