//! Mail summaries produced by the mail integration.

use crate::model::user::RecordId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Read-only inbox message summary. Session cache only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub id: RecordId,
    /// Raw `From` header value.
    pub sender: String,
    pub subject: String,
    pub snippet: String,
    pub is_read: bool,
    pub timestamp: NaiveDateTime,
}

/// Signed-in account profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailProfile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}
