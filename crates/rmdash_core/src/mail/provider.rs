//! Mail provider contract.
//!
//! # Responsibility
//! - Define what core needs from a mail backend: a profile and one page of
//!   inbox summaries for a bearer token.
//! - Provide a canned provider for boot data and tests.
//!
//! # Invariants
//! - Providers never return more than the requested page size.
//! - An empty inbox is a valid, successful result.

use crate::model::email::{Email, MailProfile};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Fixed inbox page size.
pub const MAIL_PAGE_SIZE: usize = 15;

pub type MailResult<T> = Result<T, MailError>;

/// Mail integration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// Token missing, expired or revoked.
    Unauthorized,
    /// Network or HTTP-level failure.
    Transport(String),
    /// Response body does not match the expected shape.
    InvalidPayload(String),
}

impl Display for MailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "mail access token was rejected"),
            Self::Transport(message) => write!(f, "mail transport failed: {message}"),
            Self::InvalidPayload(message) => write!(f, "invalid mail payload: {message}"),
        }
    }
}

impl Error for MailError {}

impl MailError {
    /// Stable code for structured log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "mail_unauthorized",
            Self::Transport(_) => "mail_transport",
            Self::InvalidPayload(_) => "mail_invalid_payload",
        }
    }
}

/// Opaque OAuth bearer token. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Read-only mail backend.
pub trait MailProvider {
    /// Short id used in log lines.
    fn provider_id(&self) -> &str;
    fn fetch_profile(&self, token: &AccessToken) -> MailResult<MailProfile>;
    /// Most recent inbox messages, newest first, at most `limit`.
    fn list_inbox(&self, token: &AccessToken, limit: usize) -> MailResult<Vec<Email>>;
}

/// Provider serving a fixed profile and message list.
#[derive(Debug, Clone)]
pub struct StaticMailProvider {
    profile: MailProfile,
    messages: Vec<Email>,
    failure: Option<MailError>,
}

impl StaticMailProvider {
    pub fn new(profile: MailProfile, messages: Vec<Email>) -> Self {
        Self {
            profile,
            messages,
            failure: None,
        }
    }

    /// Provider whose every call fails with `error`.
    pub fn failing(error: MailError) -> Self {
        Self {
            profile: MailProfile {
                email: String::new(),
                name: None,
            },
            messages: Vec::new(),
            failure: Some(error),
        }
    }

    fn check(&self) -> MailResult<()> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl MailProvider for StaticMailProvider {
    fn provider_id(&self) -> &str {
        "static"
    }

    fn fetch_profile(&self, _token: &AccessToken) -> MailResult<MailProfile> {
        self.check()?;
        Ok(self.profile.clone())
    }

    fn list_inbox(&self, _token: &AccessToken, limit: usize) -> MailResult<Vec<Email>> {
        self.check()?;
        Ok(self.messages.iter().take(limit).cloned().collect())
    }
}
