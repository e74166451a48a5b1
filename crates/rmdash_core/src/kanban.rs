//! Kanban stage machine and board projection.
//!
//! # Responsibility
//! - Define the fixed stage ordering `ToDo -> InProgress -> Ready`.
//! - Resolve drag-drop and advance/retreat gestures into a target stage.
//! - Group shipments into board columns.
//!
//! # Invariants
//! - Any stage is reachable from any other by a direct move.
//! - Advance/retreat move exactly one stage and are unavailable at the ends.
//! - Moves never depend on shipment contents.

use crate::model::shipment::{Shipment, ShipmentStatus};

/// Board columns, left to right.
pub const KANBAN_COLUMNS: [ShipmentStatus; 3] = [
    ShipmentStatus::ToDo,
    ShipmentStatus::InProgress,
    ShipmentStatus::Ready,
];

/// User gesture that changes a shipment's stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanbanMove {
    /// Card dropped on a column; may skip stages.
    DropOn(ShipmentStatus),
    /// One stage forward.
    Advance,
    /// One stage back.
    Retreat,
}

/// Stage after `status`, or `None` at `Ready`.
pub fn next_stage(status: ShipmentStatus) -> Option<ShipmentStatus> {
    let index = stage_index(status);
    KANBAN_COLUMNS.get(index + 1).copied()
}

/// Stage before `status`, or `None` at `ToDo`.
pub fn previous_stage(status: ShipmentStatus) -> Option<ShipmentStatus> {
    let index = stage_index(status);
    index.checked_sub(1).map(|prev| KANBAN_COLUMNS[prev])
}

/// Target stage for `gesture` from `current`.
///
/// Returns `None` when the gesture is unavailable (advance at `Ready`,
/// retreat at `ToDo`).
pub fn resolve_move(current: ShipmentStatus, gesture: KanbanMove) -> Option<ShipmentStatus> {
    match gesture {
        KanbanMove::DropOn(target) => Some(target),
        KanbanMove::Advance => next_stage(current),
        KanbanMove::Retreat => previous_stage(current),
    }
}

fn stage_index(status: ShipmentStatus) -> usize {
    match status {
        ShipmentStatus::ToDo => 0,
        ShipmentStatus::InProgress => 1,
        ShipmentStatus::Ready => 2,
    }
}

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanColumn<'a> {
    pub status: ShipmentStatus,
    pub shipments: Vec<&'a Shipment>,
}

/// Shipments grouped by stage in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanBoard<'a> {
    pub columns: Vec<KanbanColumn<'a>>,
}

impl<'a> KanbanBoard<'a> {
    /// Groups `shipments` into the three columns, keeping store order.
    ///
    /// A non-blank `filter` keeps shipments whose order number or customer
    /// name contains it, ignoring case.
    pub fn build(shipments: &'a [Shipment], filter: Option<&str>) -> Self {
        let needle = filter
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let visible = shipments
            .iter()
            .filter(|shipment| match needle.as_deref() {
                Some(term) => {
                    shipment.order_number.to_lowercase().contains(term)
                        || shipment.customer.name.to_lowercase().contains(term)
                }
                None => true,
            })
            .collect::<Vec<_>>();

        let columns = KANBAN_COLUMNS
            .iter()
            .map(|status| KanbanColumn {
                status: *status,
                shipments: visible
                    .iter()
                    .copied()
                    .filter(|shipment| shipment.status == *status)
                    .collect(),
            })
            .collect();

        Self { columns }
    }

    pub fn column(&self, status: ShipmentStatus) -> Option<&KanbanColumn<'a>> {
        self.columns.iter().find(|column| column.status == status)
    }
}
