//! Gmail REST adapter.
//!
//! # Responsibility
//! - Map the Gmail userinfo/messages JSON shapes onto core mail models.
//! - Keep HTTP itself with the host via [`HttpTransport`].
//!
//! # Invariants
//! - Only inbox messages are requested, at most [`MAIL_PAGE_SIZE`] per page.
//! - `is_read` is the absence of the `UNREAD` label.
//! - A list response without `messages` is an empty inbox, not an error.

use crate::mail::provider::{AccessToken, MailError, MailProvider, MailResult, MAIL_PAGE_SIZE};
use crate::model::email::{Email, MailProfile};
use chrono::{DateTime, Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;

pub const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";
const MESSAGES_URL: &str = "https://www.googleapis.com/gmail/v1/users/me/messages";
const UNREAD_LABEL: &str = "UNREAD";

static TRAILING_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("valid date comment regex"));
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("valid entity regex")
});

/// Blocking HTTP GET returning a JSON body.
///
/// Implementations map 401/403 to [`MailError::Unauthorized`] and other
/// failures to [`MailError::Transport`].
pub trait HttpTransport {
    fn get_json(&self, url: &str, bearer: &str) -> MailResult<String>;
}

/// Mail provider backed by the Gmail REST API.
pub struct GmailProvider<T: HttpTransport> {
    transport: T,
}

impl<T: HttpTransport> GmailProvider<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: HttpTransport> MailProvider for GmailProvider<T> {
    fn provider_id(&self) -> &str {
        "gmail"
    }

    fn fetch_profile(&self, token: &AccessToken) -> MailResult<MailProfile> {
        let body = self.transport.get_json(USERINFO_URL, token.secret())?;
        decode_profile(&body)
    }

    fn list_inbox(&self, token: &AccessToken, limit: usize) -> MailResult<Vec<Email>> {
        let page_size = limit.min(MAIL_PAGE_SIZE);
        if page_size == 0 {
            return Ok(Vec::new());
        }

        let body = self
            .transport
            .get_json(&inbox_list_url(page_size), token.secret())?;
        decode_message_ids(&body)?
            .iter()
            .take(page_size)
            .map(|id| {
                let body = self
                    .transport
                    .get_json(&message_metadata_url(id), token.secret())?;
                decode_message(&body)
            })
            .collect()
    }
}

/// Inbox listing URL for one page.
pub fn inbox_list_url(page_size: usize) -> String {
    format!("{MESSAGES_URL}?maxResults={page_size}&q=in:inbox")
}

/// Metadata URL for one message (`Subject`, `From`, `Date` headers only).
pub fn message_metadata_url(message_id: &str) -> String {
    format!(
        "{MESSAGES_URL}/{message_id}?format=metadata&metadataHeaders=Subject&metadataHeaders=From&metadataHeaders=Date"
    )
}

#[derive(Debug, Deserialize)]
struct UserInfoPayload {
    email: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageListPayload {
    #[serde(default)]
    messages: Vec<MessageRef>,
}

#[derive(Debug, Deserialize)]
struct MessageRef {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessagePayload {
    id: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    label_ids: Vec<String>,
    internal_date: Option<String>,
    #[serde(default)]
    payload: MessagePart,
}

#[derive(Debug, Default, Deserialize)]
struct MessagePart {
    #[serde(default)]
    headers: Vec<MessageHeader>,
}

#[derive(Debug, Deserialize)]
struct MessageHeader {
    name: String,
    value: String,
}

impl MessagePayload {
    fn header(&self, name: &str) -> Option<&str> {
        self.payload
            .headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
            .map(|header| header.value.as_str())
    }
}

/// Decodes a userinfo response.
pub fn decode_profile(body: &str) -> MailResult<MailProfile> {
    let payload: UserInfoPayload = parse_json(body, "userinfo")?;
    let email = payload
        .email
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| MailError::InvalidPayload("userinfo has no email".to_string()))?;
    Ok(MailProfile {
        email,
        name: payload.name,
    })
}

/// Decodes a message list response into message ids.
pub fn decode_message_ids(body: &str) -> MailResult<Vec<String>> {
    let payload: MessageListPayload = parse_json(body, "message list")?;
    Ok(payload
        .messages
        .into_iter()
        .map(|message| message.id)
        .collect())
}

/// Decodes one metadata-format message.
pub fn decode_message(body: &str) -> MailResult<Email> {
    let payload: MessagePayload = parse_json(body, "message")?;

    let timestamp = payload
        .header("Date")
        .and_then(parse_date_header)
        .or_else(|| payload.internal_date.as_deref().and_then(parse_epoch_millis))
        .ok_or_else(|| {
            MailError::InvalidPayload(format!("message `{}` has no usable date", payload.id))
        })?;

    Ok(Email {
        sender: payload.header("From").unwrap_or_default().to_string(),
        subject: payload.header("Subject").unwrap_or_default().to_string(),
        snippet: decode_entities(&payload.snippet),
        is_read: !payload.label_ids.iter().any(|label| label == UNREAD_LABEL),
        timestamp,
        id: payload.id,
    })
}

fn parse_json<'a, P: Deserialize<'a>>(body: &'a str, what: &str) -> MailResult<P> {
    serde_json::from_str(body)
        .map_err(|err| MailError::InvalidPayload(format!("cannot decode {what}: {err}")))
}

/// Parses an RFC 2822 `Date` header into local wall-clock time.
///
/// Trailing zone comments such as `(UTC)` are ignored.
pub fn parse_date_header(value: &str) -> Option<NaiveDateTime> {
    let cleaned = TRAILING_COMMENT_RE.replace(value.trim(), "");
    DateTime::parse_from_rfc2822(cleaned.trim())
        .ok()
        .map(|parsed| parsed.with_timezone(&Local).naive_local())
}

fn parse_epoch_millis(value: &str) -> Option<NaiveDateTime> {
    let millis = value.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp_millis(millis).map(|utc| utc.with_timezone(&Local).naive_local())
}

/// Decodes the HTML entities Gmail leaves in snippets in a single pass.
///
/// Numeric references and the common named ones are decoded; anything
/// else is kept verbatim.
fn decode_entities(value: &str) -> String {
    ENTITY_RE
        .replace_all(value, |caps: &Captures<'_>| {
            let decoded = match &caps[1] {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                other => numeric_entity(other),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}
