//! Form boundary: raw editor input to validated records.
//!
//! # Responsibility
//! - Resolve user ids, parse `YYYY-MM-DD` dates and split tag lists.
//! - Assign fresh ids to new records and keep non-form fields on edits.
//!
//! # Invariants
//! - A rejected submission never yields a partial record.
//! - Date-only inputs land at local midnight.

use crate::clock::start_of_day;
use crate::model::event::{CustomEvent, CustomEventKind, EventType};
use crate::model::shipment::{Customer, Product, Shipment, ShipmentStatus};
use crate::model::task::Task;
use crate::model::user::{new_record_id, Priority, RecordId, User};
use chrono::{NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Category given to tasks created from the task form.
pub const DEFAULT_TASK_CATEGORY: &str = "General";

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Rejected form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Selected user id does not name a known user.
    UnknownUser(RecordId),
    /// Date field is not a valid `YYYY-MM-DD` value.
    InvalidDate { field: &'static str, value: String },
    /// Required text field is blank.
    MissingField(&'static str),
    NoProducts,
    /// Product quantity below one.
    InvalidQuantity { product: String, quantity: u32 },
    /// Event ends before it starts.
    InvalidEventWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Event type is derived and cannot be created by hand.
    UnsupportedEventType(EventType),
    /// No user exists to own the record.
    NoAssignableUser,
    /// Record being edited was removed before the form was submitted.
    RecordGone(RecordId),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownUser(id) => write!(f, "unknown user `{id}`"),
            Self::InvalidDate { field, value } => {
                write!(f, "invalid {field} `{value}`; expected YYYY-MM-DD")
            }
            Self::MissingField(field) => write!(f, "{field} must not be empty"),
            Self::NoProducts => write!(f, "shipment must list at least one product"),
            Self::InvalidQuantity { product, quantity } => write!(
                f,
                "product `{product}` has quantity {quantity}; expected at least 1"
            ),
            Self::InvalidEventWindow { start, end } => {
                write!(f, "event ends ({end}) before it starts ({start})")
            }
            Self::UnsupportedEventType(kind) => {
                write!(f, "event type `{kind:?}` cannot be created manually")
            }
            Self::NoAssignableUser => write!(f, "no user available to assign"),
            Self::RecordGone(id) => write!(f, "record `{id}` no longer exists"),
        }
    }
}

impl Error for FormError {}

/// One product row in the shipment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    /// Existing product id; `None` for rows added in this edit.
    pub id: Option<RecordId>,
    pub name: String,
    pub quantity: u32,
}

/// Shipment editor input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentForm {
    pub order_number: String,
    pub tracking_number: String,
    pub customer_name: String,
    pub customer_address: String,
    pub products: Vec<ProductInput>,
    pub assigned_to_id: RecordId,
    pub due_date: String,
    pub priority: Priority,
    pub status: ShipmentStatus,
}

impl ShipmentForm {
    /// Prefills the editor from an existing shipment.
    pub fn from_shipment(shipment: &Shipment) -> Self {
        Self {
            order_number: shipment.order_number.clone(),
            tracking_number: shipment.tracking_number.clone(),
            customer_name: shipment.customer.name.clone(),
            customer_address: shipment.customer.address.clone(),
            products: shipment
                .products
                .iter()
                .map(|product| ProductInput {
                    id: Some(product.id.clone()),
                    name: product.name.clone(),
                    quantity: product.quantity,
                })
                .collect(),
            assigned_to_id: shipment.assigned_to.id.clone(),
            due_date: format_date_input(shipment.due_date),
            priority: shipment.priority,
            status: shipment.status,
        }
    }

    /// Builds the shipment to save.
    ///
    /// With `existing`, the id, attachments and comments are carried over.
    pub fn submit(self, users: &[User], existing: Option<&Shipment>) -> Result<Shipment, FormError> {
        let order_number = required(self.order_number, "order number")?;
        let assigned_to = resolve_user(users, &self.assigned_to_id)?;
        let due_date = parse_date_input(&self.due_date, "due date")?;

        if self.products.is_empty() {
            return Err(FormError::NoProducts);
        }
        let products = self
            .products
            .into_iter()
            .map(|input| {
                let name = required(input.name, "product name")?;
                if input.quantity == 0 {
                    return Err(FormError::InvalidQuantity {
                        product: name,
                        quantity: input.quantity,
                    });
                }
                Ok(Product {
                    id: input.id.unwrap_or_else(new_record_id),
                    name,
                    quantity: input.quantity,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (id, attachments, comments) = match existing {
            Some(shipment) => (
                shipment.id.clone(),
                shipment.attachments.clone(),
                shipment.comments.clone(),
            ),
            None => (new_record_id(), Vec::new(), Vec::new()),
        };

        Ok(Shipment {
            id,
            order_number,
            tracking_number: self.tracking_number.trim().to_string(),
            customer: Customer {
                name: self.customer_name.trim().to_string(),
                address: self.customer_address.trim().to_string(),
            },
            products,
            assigned_to,
            due_date,
            priority: self.priority,
            status: self.status,
            attachments,
            comments,
        })
    }
}

/// Task editor input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub assigned_to_id: RecordId,
    pub due_date: String,
    pub priority: Priority,
    /// Comma-separated tag list.
    pub tags: String,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            assigned_to_id: task.assigned_to.id.clone(),
            due_date: format_date_input(task.due_date),
            priority: task.priority,
            tags: task.tags.join(", "),
        }
    }

    /// Builds the task to save.
    ///
    /// With `existing`, the id, category, subtasks and completion flag are
    /// carried over; otherwise the task starts open in the default category.
    pub fn submit(self, users: &[User], existing: Option<&Task>) -> Result<Task, FormError> {
        let title = required(self.title, "title")?;
        let assigned_to = resolve_user(users, &self.assigned_to_id)?;
        let due_date = parse_date_input(&self.due_date, "due date")?;
        let tags = split_tags(&self.tags);

        let (id, category, sub_tasks, completed) = match existing {
            Some(task) => (
                task.id.clone(),
                task.category.clone(),
                task.sub_tasks.clone(),
                task.completed,
            ),
            None => (
                new_record_id(),
                DEFAULT_TASK_CATEGORY.to_string(),
                Vec::new(),
                false,
            ),
        };

        Ok(Task {
            id,
            title,
            assigned_to,
            due_date,
            priority: self.priority,
            tags,
            category,
            sub_tasks,
            completed,
        })
    }
}

/// Custom event editor input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub start: String,
    pub end: String,
    pub kind: EventType,
}

impl EventForm {
    /// Blank meeting on `day`, as opened from a calendar cell.
    pub fn for_day(day: NaiveDate) -> Self {
        let value = day.format(DATE_INPUT_FORMAT).to_string();
        Self {
            title: String::new(),
            start: value.clone(),
            end: value,
            kind: EventType::Meeting,
        }
    }

    pub fn from_event(event: &CustomEvent) -> Self {
        Self {
            title: event.title.clone(),
            start: format_date_input(event.start),
            end: format_date_input(event.end),
            kind: event.kind.into(),
        }
    }

    /// Builds the custom event to save.
    ///
    /// With `existing`, the id and resource id are carried over.
    pub fn submit(self, existing: Option<&CustomEvent>) -> Result<CustomEvent, FormError> {
        let title = required(self.title, "title")?;
        let kind = CustomEventKind::try_from(self.kind).map_err(FormError::UnsupportedEventType)?;
        let start = parse_date_input(&self.start, "start date")?;
        let end = parse_date_input(&self.end, "end date")?;
        if end < start {
            return Err(FormError::InvalidEventWindow { start, end });
        }

        let (id, resource_id) = match existing {
            Some(event) => (event.id.clone(), event.resource_id.clone()),
            None => (new_record_id(), new_record_id()),
        };

        Ok(CustomEvent {
            id,
            title,
            start,
            end,
            kind,
            resource_id,
        })
    }
}

/// Parses a `YYYY-MM-DD` input into local midnight.
pub fn parse_date_input(value: &str, field: &'static str) -> Result<NaiveDateTime, FormError> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT)
        .map(start_of_day)
        .map_err(|_| FormError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

/// Formats a date-time as a `YYYY-MM-DD` input value.
pub fn format_date_input(value: NaiveDateTime) -> String {
    value.format(DATE_INPUT_FORMAT).to_string()
}

/// Splits a comma-separated tag list, trimming and dropping empties.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn resolve_user(users: &[User], user_id: &str) -> Result<User, FormError> {
    users
        .iter()
        .find(|user| user.id == user_id)
        .cloned()
        .ok_or_else(|| FormError::UnknownUser(user_id.to_string()))
}

fn required(value: String, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
