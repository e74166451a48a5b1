//! Shipment domain model.
//!
//! # Responsibility
//! - Define the shipment record tracked on the kanban board.
//! - Validate product-line invariants before a shipment enters the store.
//!
//! # Invariants
//! - At least one product line, each with `quantity >= 1`.
//! - `status` is always one of the three kanban stages.

use crate::model::user::{Priority, RecordId, User};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Kanban stage of a shipment.
///
/// Declaration order is the board order; see [`crate::kanban`] for
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShipmentStatus {
    /// Waiting to be processed.
    ToDo,
    /// Scheduled or being prepared.
    InProgress,
    /// Ready for customer pickup.
    Ready,
}

impl ShipmentStatus {
    /// Column heading shown on the board.
    pub fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Ready => "Ready",
        }
    }

    /// Whether the shipment still counts as pending work.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::ToDo | Self::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Document,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: RecordId,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
}

/// Free-text remark left on a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: RecordId,
    pub author: User,
    pub text: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: RecordId,
    pub order_number: String,
    pub tracking_number: String,
    pub customer: Customer,
    pub products: Vec<Product>,
    pub assigned_to: User,
    pub due_date: NaiveDateTime,
    pub priority: Priority,
    pub status: ShipmentStatus,
    pub attachments: Vec<Attachment>,
    pub comments: Vec<Comment>,
}

/// Product-line invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipmentValidationError {
    NoProducts,
    InvalidQuantity { product_id: RecordId, quantity: u32 },
}

impl Display for ShipmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoProducts => write!(f, "shipment must list at least one product"),
            Self::InvalidQuantity {
                product_id,
                quantity,
            } => write!(
                f,
                "product `{product_id}` has quantity {quantity}; expected at least 1"
            ),
        }
    }
}

impl Error for ShipmentValidationError {}

impl Shipment {
    /// Checks product-line invariants.
    pub fn validate(&self) -> Result<(), ShipmentValidationError> {
        if self.products.is_empty() {
            return Err(ShipmentValidationError::NoProducts);
        }
        if let Some(product) = self.products.iter().find(|product| product.quantity == 0) {
            return Err(ShipmentValidationError::InvalidQuantity {
                product_id: product.id.clone(),
                quantity: product.quantity,
            });
        }
        Ok(())
    }

    /// Total units across all product lines.
    pub fn total_units(&self) -> u32 {
        self.products
            .iter()
            .map(|product| product.quantity)
            .sum::<u32>()
    }
}
