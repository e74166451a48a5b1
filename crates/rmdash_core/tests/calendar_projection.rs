use chrono::{NaiveDate, NaiveDateTime};
use rmdash_core::model::event::{shipment_event_id, task_event_id};
use rmdash_core::{events_on, project, AppState, EventType, FixedClock, MonthGrid};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, 15)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn seeded() -> AppState<FixedClock> {
    AppState::seeded(FixedClock::at(now()))
}

#[test]
fn every_shipment_projects_exactly_one_due_marker() {
    let state = seeded();
    let events = state.calendar_events();

    for shipment in state.shipments() {
        let markers = events
            .iter()
            .filter(|event| event.id == shipment_event_id(&shipment.id))
            .collect::<Vec<_>>();
        assert_eq!(markers.len(), 1, "shipment {}", shipment.id);
        let marker = markers[0];
        assert_eq!(marker.kind, EventType::Shipment);
        assert_eq!(marker.title, format!("Due {}", shipment.order_number));
        assert_eq!(marker.start, shipment.due_date);
        assert_eq!(marker.end, shipment.due_date);
        assert_eq!(marker.resource_id, shipment.id);
    }
}

#[test]
fn seeded_projection_skips_completed_task() {
    let state = seeded();
    let events = state.calendar_events();

    assert_eq!(events.len(), 6 + 2 + 1);
    assert!(events.iter().any(|event| event.id == task_event_id("t1")));
    assert!(!events.iter().any(|event| event.id == task_event_id("t3")));
    assert!(events.iter().any(|event| event.id == "event-p1"));
}

#[test]
fn toggling_task_adds_and_removes_its_marker() {
    let mut state = seeded();
    let has_marker = |state: &AppState<FixedClock>, id: &str| {
        state
            .calendar_events()
            .iter()
            .any(|event| event.id == task_event_id(id))
    };

    assert!(state.toggle_task("t3"));
    assert!(has_marker(&state, "t3"));

    assert!(state.toggle_task("t1"));
    assert!(!has_marker(&state, "t1"));
    assert!(state.toggle_task("t1"));
    assert!(has_marker(&state, "t1"));
}

#[test]
fn projection_is_empty_for_empty_sources() {
    assert!(project(&[], &[], &[]).is_empty());
}

#[test]
fn events_on_day_are_sorted_by_start() {
    let state = seeded();
    let events = state.calendar_events();

    let today = events_on(&events, now().date())
        .into_iter()
        .map(|event| event.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(today, vec!["event-t-t1", "event-p1"]);

    let tomorrow = NaiveDate::from_ymd_opt(2026, 7, 16).unwrap();
    let ids = events_on(&events, tomorrow)
        .into_iter()
        .map(|event| event.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["event-t-t2"]);
}

#[test]
fn month_grid_is_monday_first() {
    // July 2026 starts on a Wednesday.
    let grid = MonthGrid::for_month(2026, 7).unwrap();
    assert_eq!(grid.leading_blanks, 2);
    assert_eq!(grid.days_in_month, 31);

    let cells = grid.cells();
    assert_eq!(cells.len(), 33);
    assert_eq!(cells[0], None);
    assert_eq!(cells[2], NaiveDate::from_ymd_opt(2026, 7, 1));

    let previous = grid.shifted(-7).unwrap();
    assert_eq!((previous.year(), previous.month()), (2025, 12));
    assert!(MonthGrid::for_month(2026, 13).is_none());
}

#[test]
fn derived_event_resource_routes_ui() {
    let mut state = seeded();

    state.select_event(Some("event-s-s2"));
    assert!(state.view_event_resource("event-s-s2"));
    assert_eq!(state.selected_shipment_id(), Some("s2"));
    assert!(state.selected_event().is_none());

    assert!(state.view_event_resource("event-t-t2"));
    assert_eq!(state.active_view(), rmdash_core::ActiveView::Todo);

    assert!(!state.view_event_resource("event-p1"));
    assert!(!state.view_event_resource("event-s-missing"));
}
