//! Session mailbox cache.
//!
//! # Responsibility
//! - Hold the sign-in token, profile and last fetched inbox page.
//! - Bracket provider calls with the loading flag.
//!
//! # Invariants
//! - `is_loading` is cleared by every `finish_refresh`, whatever the outcome.
//! - A failed fetch leaves an empty message list.
//! - Results of a refresh started before sign-out are discarded.

use crate::mail::provider::{AccessToken, MailProvider, MailResult, MAIL_PAGE_SIZE};
use crate::model::email::{Email, MailProfile};
use log::{info, warn};

/// Handle for one in-flight refresh.
#[derive(Debug, Clone)]
pub struct RefreshTicket {
    token: AccessToken,
    session: u64,
}

impl RefreshTicket {
    pub fn token(&self) -> &AccessToken {
        &self.token
    }
}

#[derive(Debug, Default)]
pub struct MailboxState {
    token: Option<AccessToken>,
    profile: Option<MailProfile>,
    messages: Vec<Email>,
    is_loading: bool,
    session: u64,
}

impl MailboxState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fresh token. Cached data from a previous session is dropped.
    pub fn sign_in(&mut self, token: AccessToken) {
        self.clear_session();
        self.token = Some(token);
        info!("event=mail_sign_in module=mail status=ok");
    }

    /// Clears the session and returns the token for revocation.
    pub fn sign_out(&mut self) -> Option<AccessToken> {
        let token = self.token.take();
        self.clear_session();
        info!(
            "event=mail_sign_out module=mail status={}",
            if token.is_some() { "ok" } else { "skip" }
        );
        token
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn profile(&self) -> Option<&MailProfile> {
        self.profile.as_ref()
    }

    pub fn messages(&self) -> &[Email] {
        &self.messages
    }

    pub fn message(&self, id: &str) -> Option<&Email> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// Marks a refresh as started. `None` when signed out.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        let token = self.token.clone()?;
        self.is_loading = true;
        Some(RefreshTicket {
            token,
            session: self.session,
        })
    }

    /// Applies provider results for `ticket` and clears the loading flag.
    ///
    /// A ticket from an earlier sign-in session is dropped without touching
    /// the loading flag, which belongs to the current session.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        profile: MailResult<MailProfile>,
        messages: MailResult<Vec<Email>>,
    ) {
        if ticket.session != self.session || self.token.is_none() {
            info!("event=mail_refresh module=mail status=skip reason=stale_session");
            return;
        }
        self.is_loading = false;

        match profile {
            Ok(profile) => self.profile = Some(profile),
            Err(err) => warn!(
                "event=mail_profile module=mail status=error code={}",
                err.code()
            ),
        }

        match messages {
            Ok(mut messages) => {
                messages.truncate(MAIL_PAGE_SIZE);
                info!(
                    "event=mail_refresh module=mail status=ok count={}",
                    messages.len()
                );
                self.messages = messages;
            }
            Err(err) => {
                warn!(
                    "event=mail_refresh module=mail status=error code={}",
                    err.code()
                );
                self.messages.clear();
            }
        }
    }

    /// Runs a full refresh against `provider`. Returns `false` when signed out.
    pub fn refresh_with(&mut self, provider: &dyn MailProvider) -> bool {
        let Some(ticket) = self.begin_refresh() else {
            return false;
        };
        info!(
            "event=mail_refresh_start module=mail provider={}",
            provider.provider_id()
        );
        let profile = provider.fetch_profile(ticket.token());
        let messages = match &profile {
            Ok(_) => provider.list_inbox(ticket.token(), MAIL_PAGE_SIZE),
            Err(err) => Err(err.clone()),
        };
        self.finish_refresh(ticket, profile, messages);
        true
    }

    fn clear_session(&mut self) {
        self.profile = None;
        self.messages.clear();
        self.is_loading = false;
        self.session = self.session.wrapping_add(1);
    }
}
