//! Calendar use-cases: custom events, projection reads, event routing.

use crate::calendar::projector::project;
use crate::clock::Clock;
use crate::model::event::{is_derived_event_id, CalendarEvent, CustomEvent, EventType};
use crate::model::user::RecordId;
use crate::repo::entity_store::SaveOutcome;
use crate::service::app_state::{ActiveView, AppState};
use crate::service::form::{EventForm, FormError};
use log::{info, warn};

impl<C: Clock> AppState<C> {
    pub fn save_custom_event(&mut self, event: CustomEvent) -> SaveOutcome {
        let outcome = self.custom_events.save(event);
        info!("event=custom_event_save module=calendar status=ok outcome={outcome:?}");
        outcome
    }

    /// Submits the event editor. `editing` names the custom event being
    /// edited; derived event ids never match and create a new event. A
    /// custom event removed in the meantime fails with
    /// [`FormError::RecordGone`].
    pub fn submit_event_form(
        &mut self,
        form: EventForm,
        editing: Option<&str>,
    ) -> Result<RecordId, FormError> {
        let existing = match editing.filter(|id| !is_derived_event_id(id)) {
            Some(id) => Some(self.custom_events.get(id).ok_or_else(|| {
                warn!("event=custom_event_form module=calendar status=skip reason=record_gone");
                FormError::RecordGone(id.to_string())
            })?),
            None => None,
        };
        let event = form.submit(existing)?;
        let id = event.id.clone();
        self.save_custom_event(event);
        Ok(id)
    }

    /// Fresh projection of shipments, open tasks and custom events.
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        project(
            self.shipments.as_slice(),
            self.tasks.as_slice(),
            self.custom_events.as_slice(),
        )
    }

    pub fn select_event(&mut self, id: Option<&str>) {
        self.selected_event_id = id.map(str::to_string);
    }

    /// Selected event as currently projected; `None` once its source is gone.
    pub fn selected_event(&self) -> Option<CalendarEvent> {
        let id = self.selected_event_id.as_deref()?;
        self.calendar_events().into_iter().find(|event| event.id == id)
    }

    /// Opens the record behind a derived event.
    ///
    /// Shipment events open the shipment detail; task events switch to the
    /// to-do view. Custom events have no record to open. The event
    /// selection is cleared whenever a record is opened.
    pub fn view_event_resource(&mut self, event_id: &str) -> bool {
        let Some(event) = self
            .calendar_events()
            .into_iter()
            .find(|event| event.id == event_id)
        else {
            return false;
        };

        let opened = match event.kind {
            EventType::Shipment => self.select_shipment(Some(event.resource_id.as_str())),
            EventType::Task => {
                self.navigate(ActiveView::Todo);
                true
            }
            EventType::Pickup | EventType::Meeting => false,
        };
        if opened {
            self.selected_event_id = None;
        }
        opened
    }
}
