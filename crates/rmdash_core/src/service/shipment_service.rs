//! Shipment use-cases: save, edit form, kanban moves.
//!
//! # Invariants
//! - Saved shipments always pass [`Shipment::validate`].
//! - Status changes never touch any other field.

use crate::clock::Clock;
use crate::kanban::{resolve_move, KanbanBoard, KanbanMove};
use crate::model::shipment::{Shipment, ShipmentStatus, ShipmentValidationError};
use crate::model::user::RecordId;
use crate::repo::entity_store::SaveOutcome;
use crate::service::app_state::AppState;
use crate::service::form::{FormError, ShipmentForm};
use log::{info, warn};

impl<C: Clock> AppState<C> {
    /// Validates and upserts a shipment.
    pub fn save_shipment(
        &mut self,
        shipment: Shipment,
    ) -> Result<SaveOutcome, ShipmentValidationError> {
        if let Err(err) = shipment.validate() {
            warn!("event=shipment_save module=shipment status=error reason=validation");
            return Err(err);
        }
        let outcome = self.shipments.save(shipment);
        info!("event=shipment_save module=shipment status=ok outcome={outcome:?}");
        Ok(outcome)
    }

    /// Submits the shipment editor. `editing` names the shipment being
    /// edited; `None` creates a new one. Editing a shipment that no longer
    /// exists fails with [`FormError::RecordGone`] and changes nothing.
    pub fn submit_shipment_form(
        &mut self,
        form: ShipmentForm,
        editing: Option<&str>,
    ) -> Result<RecordId, FormError> {
        let existing = match editing {
            Some(id) => Some(self.shipments.get(id).ok_or_else(|| {
                warn!("event=shipment_form module=shipment status=skip reason=record_gone");
                FormError::RecordGone(id.to_string())
            })?),
            None => None,
        };
        let shipment = form.submit(&self.users, existing)?;
        let id = shipment.id.clone();
        self.save_shipment(shipment).map_err(|err| match err {
            ShipmentValidationError::NoProducts => FormError::NoProducts,
            ShipmentValidationError::InvalidQuantity {
                product_id,
                quantity,
            } => FormError::InvalidQuantity {
                product: product_id,
                quantity,
            },
        })?;
        Ok(id)
    }

    /// Sets a shipment's stage directly. Idempotent.
    pub fn set_shipment_status(&mut self, id: &str, status: ShipmentStatus) -> bool {
        let touched = self
            .shipments
            .update(id, |shipment| shipment.status = status);
        info!(
            "event=shipment_status module=kanban status={} target={}",
            if touched { "ok" } else { "skip" },
            status.label()
        );
        touched
    }

    /// Applies a board gesture. Returns the new stage, or `None` when the
    /// shipment is missing or the gesture is unavailable at its stage.
    pub fn move_shipment(&mut self, id: &str, gesture: KanbanMove) -> Option<ShipmentStatus> {
        let current = self.shipments.get(id)?.status;
        let target = resolve_move(current, gesture)?;
        self.set_shipment_status(id, target);
        Some(target)
    }

    /// Board projection with an optional order/customer filter.
    pub fn kanban_board(&self, filter: Option<&str>) -> KanbanBoard<'_> {
        KanbanBoard::build(self.shipments.as_slice(), filter)
    }
}
