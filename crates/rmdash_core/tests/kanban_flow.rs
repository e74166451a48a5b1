use chrono::NaiveDate;
use rmdash_core::{AppState, FixedClock, KanbanMove, ShipmentStatus};

fn seeded() -> AppState<FixedClock> {
    let now = NaiveDate::from_ymd_opt(2026, 7, 15)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    AppState::seeded(FixedClock::at(now))
}

fn event_ids(state: &AppState<FixedClock>) -> Vec<String> {
    let mut ids = state
        .calendar_events()
        .into_iter()
        .map(|event| event.id)
        .collect::<Vec<_>>();
    ids.sort();
    ids
}

#[test]
fn dragging_todo_to_ready_updates_dashboard_but_not_calendar_ids() {
    let mut state = seeded();
    let ids_before = event_ids(&state);
    assert_eq!(state.dashboard().pending_shipments, 3);

    let moved = state.move_shipment("s1", KanbanMove::DropOn(ShipmentStatus::Ready));

    assert_eq!(moved, Some(ShipmentStatus::Ready));
    assert_eq!(state.dashboard().pending_shipments, 2);
    assert_eq!(event_ids(&state), ids_before);
    let ready = state.dashboard();
    let column = ready.column(ShipmentStatus::Ready).unwrap();
    assert!(column.shipments.iter().any(|shipment| shipment.id == "s1"));
}

#[test]
fn setting_same_status_twice_is_idempotent() {
    let mut state = seeded();

    assert!(state.set_shipment_status("s2", ShipmentStatus::Ready));
    let once = state.shipment("s2").cloned();
    assert!(state.set_shipment_status("s2", ShipmentStatus::Ready));
    assert_eq!(state.shipment("s2").cloned(), once);
}

#[test]
fn advance_and_retreat_move_one_stage() {
    let mut state = seeded();

    assert_eq!(
        state.move_shipment("s1", KanbanMove::Advance),
        Some(ShipmentStatus::InProgress)
    );
    assert_eq!(
        state.move_shipment("s1", KanbanMove::Advance),
        Some(ShipmentStatus::Ready)
    );
    assert_eq!(state.move_shipment("s1", KanbanMove::Advance), None);
    assert_eq!(
        state.move_shipment("s1", KanbanMove::Retreat),
        Some(ShipmentStatus::InProgress)
    );
}

#[test]
fn retreat_is_unavailable_at_todo() {
    let mut state = seeded();
    assert_eq!(state.move_shipment("s4", KanbanMove::Retreat), None);
    assert_eq!(state.shipment("s4").unwrap().status, ShipmentStatus::ToDo);
}

#[test]
fn drop_may_skip_stages_backwards() {
    let mut state = seeded();
    assert_eq!(
        state.move_shipment("s6", KanbanMove::DropOn(ShipmentStatus::ToDo)),
        Some(ShipmentStatus::ToDo)
    );
    assert_eq!(state.dashboard().pending_shipments, 4);
}

#[test]
fn board_groups_and_filters_shipments() {
    let state = seeded();

    let board = state.kanban_board(None);
    let counts = board
        .columns
        .iter()
        .map(|column| (column.status, column.shipments.len()))
        .collect::<Vec<_>>();
    assert_eq!(
        counts,
        vec![
            (ShipmentStatus::ToDo, 2),
            (ShipmentStatus::InProgress, 1),
            (ShipmentStatus::Ready, 3),
        ]
    );

    let filtered = state.kanban_board(Some("  milano "));
    let ids = filtered
        .columns
        .iter()
        .flat_map(|column| column.shipments.iter().map(|shipment| shipment.id.as_str()))
        .collect::<Vec<_>>();
    assert!(ids.is_empty(), "address is not part of the filter");

    let filtered = state.kanban_board(Some("ospedale"));
    let ready = filtered.column(ShipmentStatus::Ready).unwrap();
    assert_eq!(ready.shipments.len(), 1);
    assert_eq!(ready.shipments[0].id, "s6");

    let by_order = state.kanban_board(Some("rm-00124"));
    assert_eq!(
        by_order
            .column(ShipmentStatus::InProgress)
            .unwrap()
            .shipments
            .len(),
        1
    );
}

#[test]
fn dashboard_columns_are_sorted_by_due_date() {
    let state = seeded();
    let summary = state.dashboard();

    let ready = summary
        .column(ShipmentStatus::Ready)
        .unwrap()
        .shipments
        .iter()
        .map(|shipment| shipment.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ready, vec!["s6", "s5", "s3"]);

    let todo = summary
        .column(ShipmentStatus::ToDo)
        .unwrap()
        .shipments
        .iter()
        .map(|shipment| shipment.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(todo, vec!["s4", "s1"]);
}
