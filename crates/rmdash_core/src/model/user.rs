//! User reference data.
//!
//! # Invariants
//! - Users are created at boot and never mutated by core.

use serde::{Deserialize, Serialize};

/// Identifier type shared by every record collection.
///
/// Boot data uses short ids (`s1`, `t1`); records created at runtime get a
/// UUID v4 string from [`new_record_id`].
pub type RecordId = String;

/// Generates a fresh, collision-free record identifier.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}

/// Person records can be assigned to or authored by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub avatar_url: String,
}

impl User {
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

/// Shared three-level priority used by shipments and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}
