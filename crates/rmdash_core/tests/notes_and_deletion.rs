use chrono::{Duration, NaiveDate, NaiveDateTime};
use rmdash_core::{demo_seed, ActiveView, AppState, DeleteTarget, FixedClock};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, 15)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn seeded() -> AppState<FixedClock> {
    AppState::seeded(FixedClock::at(now()))
}

fn delete(state: &mut AppState<FixedClock>, target: DeleteTarget) -> bool {
    state.request_delete(target);
    state.confirm_delete()
}

#[test]
fn cancel_keeps_record_and_clears_pending() {
    let mut state = seeded();

    let pending = state.request_delete(DeleteTarget::Note("n1".to_string()));
    assert_eq!(pending.prompt, "Are you sure you want to delete this note?");
    assert_eq!(
        state.cancel_delete(),
        Some(DeleteTarget::Note("n1".to_string()))
    );

    assert!(state.pending_deletion().is_none());
    assert!(state.note("n1").is_some());
    assert!(!state.confirm_delete());
}

#[test]
fn new_request_replaces_pending_one() {
    let mut state = seeded();
    state.request_delete(DeleteTarget::Task("t1".to_string()));
    state.request_delete(DeleteTarget::Task("t2".to_string()));

    assert!(state.confirm_delete());
    assert!(state.task("t1").is_some());
    assert!(state.task("t2").is_none());
}

#[test]
fn deleting_active_note_repoints_to_first_remaining() {
    let mut state = seeded();
    assert_eq!(state.active_note_id(), Some("n1"));

    assert!(delete(&mut state, DeleteTarget::Note("n1".to_string())));
    assert_eq!(state.active_note_id(), Some("n2"));

    assert!(delete(&mut state, DeleteTarget::Note("n3".to_string())));
    assert_eq!(state.active_note_id(), Some("n2"));

    assert!(delete(&mut state, DeleteTarget::Note("n2".to_string())));
    assert_eq!(state.active_note_id(), None);
    assert!(state.active_note().is_none());
}

#[test]
fn deleting_twice_is_idempotent() {
    let mut state = seeded();

    assert!(delete(&mut state, DeleteTarget::Shipment("s5".to_string())));
    assert_eq!(state.shipments().len(), 5);
    assert!(!delete(&mut state, DeleteTarget::Shipment("s5".to_string())));
    assert_eq!(state.shipments().len(), 5);
}

#[test]
fn deleting_selected_shipment_clears_selection_and_marker() {
    let mut state = seeded();
    assert!(state.select_shipment(Some("s1")));

    assert!(delete(&mut state, DeleteTarget::Shipment("s1".to_string())));

    assert!(state.selected_shipment_id().is_none());
    assert!(!state
        .calendar_events()
        .iter()
        .any(|event| event.resource_id == "s1"));
}

#[test]
fn deleting_pickup_clears_next_pickup() {
    let mut state = seeded();
    state.select_event(Some("event-p1"));
    assert_eq!(
        state.dashboard().next_pickup.map(|event| event.id),
        Some("event-p1".to_string())
    );

    assert!(delete(
        &mut state,
        DeleteTarget::CustomEvent("event-p1".to_string())
    ));

    assert!(state.dashboard().next_pickup.is_none());
    assert!(state.selected_event().is_none());
}

#[test]
fn note_edits_stamp_last_modified() {
    let earlier = now() - Duration::hours(2);
    let mut state = AppState::new(FixedClock::at(now()), demo_seed(earlier));
    assert_eq!(state.note("n2").unwrap().last_modified, earlier);

    assert!(state.update_note_title("n2", "Turni agosto"));
    assert_eq!(state.note("n2").unwrap().last_modified, now());
    assert_eq!(state.note("n3").unwrap().last_modified, earlier);

    assert!(state.update_note_content("n3", "Codici aggiornati in cassaforte."));
    assert_eq!(state.note("n3").unwrap().last_modified, now());
    assert_eq!(
        state.dashboard().recent_notes[0].id,
        "n2",
        "ties keep store order"
    );
    assert!(!state.update_note_title("missing", "x"));
}

#[test]
fn notebooks_and_recent_notes() {
    let mut state = seeded();
    assert_eq!(
        state.notebooks(),
        vec!["Procedure Corrieri", "Note Riunioni", "Informazioni Riservate"]
    );
    assert_eq!(state.notes_in("Note Riunioni").len(), 1);
    assert!(state.notes_in("Altro").is_empty());

    assert!(state.open_note("n3"));
    assert_eq!(state.active_view(), ActiveView::Notes);
    assert_eq!(state.active_note().unwrap().title, "Codici allarme magazzino");
    assert!(!state.open_note("missing"));

    assert_eq!(state.dashboard().recent_notes.len(), 3);
}
