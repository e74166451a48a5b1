use chrono::{NaiveDate, NaiveDateTime};
use rmdash_core::{demo_seed, AppState, CustomEvent, CustomEventKind, FixedClock};

fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, 15)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn seeded_summary_counts() {
    let state = AppState::seeded(FixedClock::at(at(8)));
    let summary = state.dashboard();

    assert_eq!(summary.pending_shipments, 3);
    assert_eq!(summary.tasks_due_today, 1);
    assert_eq!(
        summary.next_pickup.as_ref().map(|event| event.title.as_str()),
        Some("Ritiro Corriere TNT")
    );
    assert_eq!(
        summary
            .upcoming_tasks
            .iter()
            .map(|task| task.id.as_str())
            .collect::<Vec<_>>(),
        vec!["t1", "t2"]
    );
    assert_eq!(
        summary
            .today_events
            .iter()
            .map(|event| event.id.as_str())
            .collect::<Vec<_>>(),
        vec!["event-t-t1", "event-p1"]
    );
}

#[test]
fn completing_todays_task_drops_it_from_counts() {
    let mut state = AppState::seeded(FixedClock::at(at(8)));
    assert!(state.toggle_task("t1"));

    let summary = state.dashboard();
    assert_eq!(summary.tasks_due_today, 0);
    assert!(summary.upcoming_tasks.iter().all(|task| task.id != "t1"));
}

#[test]
fn next_pickup_ignores_past_slots_and_prefers_earliest() {
    let mut state = AppState::new(FixedClock::at(at(18)), demo_seed(at(8)));
    assert!(state.dashboard().next_pickup.is_none());

    let tomorrow = NaiveDate::from_ymd_opt(2026, 7, 16).unwrap();
    let slot = |id: &str, hour: u32| CustomEvent {
        id: id.to_string(),
        title: format!("Ritiro {id}"),
        start: tomorrow.and_hms_opt(hour, 0, 0).unwrap(),
        end: tomorrow.and_hms_opt(hour + 1, 0, 0).unwrap(),
        kind: CustomEventKind::Pickup,
        resource_id: "brt".to_string(),
    };
    state.save_custom_event(slot("late", 15));
    state.save_custom_event(slot("early", 9));
    let mut meeting = slot("meeting", 7);
    meeting.kind = CustomEventKind::Meeting;
    state.save_custom_event(meeting);

    let next = state.dashboard().next_pickup.map(|event| event.id);
    assert_eq!(next.as_deref(), Some("early"));
}

#[test]
fn upcoming_tasks_are_capped_at_five() {
    let mut state = AppState::seeded(FixedClock::at(at(8)));
    let template = state.task("t2").cloned().unwrap();
    for n in 0..6 {
        let mut task = template.clone();
        task.id = format!("extra-{n}");
        state.save_task(task);
    }

    assert_eq!(state.dashboard().upcoming_tasks.len(), 5);
    assert_eq!(state.dashboard().upcoming_tasks[0].id, "t1");
}
