use chrono::{NaiveDate, NaiveDateTime};
use rmdash_core::clock::start_of_day;
use rmdash_core::{
    AppState, DeleteTarget, EventForm, EventType, FixedClock, FormError, Priority, ProductInput,
    ShipmentForm, ShipmentStatus, TaskForm,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, 15)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn seeded() -> AppState<FixedClock> {
    AppState::seeded(FixedClock::at(now()))
}

fn shipment_form() -> ShipmentForm {
    ShipmentForm {
        order_number: "RM-00130".to_string(),
        tracking_number: "1Z999AA10123456790".to_string(),
        customer_name: "Farmacia Centrale".to_string(),
        customer_address: "Via Garibaldi 3, Bergamo".to_string(),
        products: vec![ProductInput {
            id: None,
            name: "Termometri".to_string(),
            quantity: 12,
        }],
        assigned_to_id: "u2".to_string(),
        due_date: "2026-07-20".to_string(),
        priority: Priority::High,
        status: ShipmentStatus::ToDo,
    }
}

#[test]
fn new_shipment_is_prepended_with_fresh_ids() {
    let mut state = seeded();

    let id = state.submit_shipment_form(shipment_form(), None).unwrap();

    assert_eq!(state.shipments().len(), 7);
    let shipment = &state.shipments()[0];
    assert_eq!(shipment.id, id);
    assert!(!["s1", "s2", "s3", "s4", "s5", "s6"].contains(&id.as_str()));
    assert_eq!(shipment.assigned_to.name, "Luigi Verdi");
    assert_eq!(
        shipment.due_date,
        start_of_day(NaiveDate::from_ymd_opt(2026, 7, 20).unwrap())
    );
    assert!(!shipment.products[0].id.is_empty());
    assert!(shipment.attachments.is_empty());
    assert!(shipment.comments.is_empty());
}

#[test]
fn editing_shipment_keeps_id_position_attachments_and_comments() {
    let mut state = seeded();
    let original = state.shipment("s1").cloned().unwrap();

    let mut form = ShipmentForm::from_shipment(&original);
    assert_eq!(form.due_date, original.due_date.format("%Y-%m-%d").to_string());
    form.customer_name = "Tech Solutions S.p.A.".to_string();
    form.products.push(ProductInput {
        id: None,
        name: "Docking station".to_string(),
        quantity: 2,
    });

    let id = state.submit_shipment_form(form, Some("s1")).unwrap();

    assert_eq!(id, "s1");
    assert_eq!(state.shipments().len(), 6);
    let edited = &state.shipments()[0];
    assert_eq!(edited.id, "s1");
    assert_eq!(edited.customer.name, "Tech Solutions S.p.A.");
    assert_eq!(edited.products.len(), 3);
    assert_eq!(edited.products[0].id, "p1");
    assert_eq!(edited.attachments, original.attachments);
    assert_eq!(edited.comments, original.comments);
}

#[test]
fn shipment_form_rejections_leave_state_untouched() {
    let mut state = seeded();
    let before = state.shipments().to_vec();

    let mut unknown_user = shipment_form();
    unknown_user.assigned_to_id = "u9".to_string();
    assert_eq!(
        state.submit_shipment_form(unknown_user, None),
        Err(FormError::UnknownUser("u9".to_string()))
    );

    let mut no_products = shipment_form();
    no_products.products.clear();
    assert_eq!(
        state.submit_shipment_form(no_products, None),
        Err(FormError::NoProducts)
    );

    let mut zero = shipment_form();
    zero.products[0].quantity = 0;
    assert_eq!(
        state.submit_shipment_form(zero, None),
        Err(FormError::InvalidQuantity {
            product: "Termometri".to_string(),
            quantity: 0,
        })
    );

    let mut bad_date = shipment_form();
    bad_date.due_date = "2026-02-30".to_string();
    assert!(matches!(
        state.submit_shipment_form(bad_date, None),
        Err(FormError::InvalidDate { field: "due date", .. })
    ));

    let mut blank_order = shipment_form();
    blank_order.order_number = "  ".to_string();
    assert_eq!(
        state.submit_shipment_form(blank_order, None),
        Err(FormError::MissingField("order number"))
    );

    assert_eq!(state.shipments(), before.as_slice());
}

#[test]
fn new_task_gets_default_category_and_split_tags() {
    let mut state = seeded();
    let form = TaskForm {
        title: "Ordinare nastro adesivo".to_string(),
        assigned_to_id: "u3".to_string(),
        due_date: "2026-07-18".to_string(),
        priority: Priority::Low,
        tags: "#acquisti, , #magazzino ".to_string(),
    };

    let id = state.submit_task_form(form, None).unwrap();

    let task = state.task(&id).unwrap();
    assert_eq!(state.tasks()[0].id, id);
    assert_eq!(task.category, "General");
    assert_eq!(task.tags, vec!["#acquisti".to_string(), "#magazzino".to_string()]);
    assert!(task.sub_tasks.is_empty());
    assert!(!task.completed);
}

#[test]
fn editing_task_keeps_sub_tasks_completion_and_category() {
    let mut state = seeded();
    assert!(state.toggle_task("t1"));
    let original = state.task("t1").cloned().unwrap();

    let mut form = TaskForm::from_task(&original);
    assert_eq!(form.tags, "#inventario, #magazzino");
    form.title = "Inventario scaffale B-04".to_string();

    state.submit_task_form(form, Some("t1")).unwrap();

    let edited = state.task("t1").unwrap();
    assert_eq!(edited.title, "Inventario scaffale B-04");
    assert_eq!(edited.sub_tasks, original.sub_tasks);
    assert_eq!(edited.category, "Operazioni Magazzino");
    assert!(edited.completed);
}

#[test]
fn event_form_creates_custom_event_visible_in_calendar() {
    let mut state = seeded();
    let day = NaiveDate::from_ymd_opt(2026, 7, 21).unwrap();
    let mut form = EventForm::for_day(day);
    assert_eq!(form.kind, EventType::Meeting);
    form.title = "Riunione fornitori".to_string();

    let id = state.submit_event_form(form, None).unwrap();

    let events = state.calendar_events();
    let event = events.iter().find(|event| event.id == id).unwrap();
    assert_eq!(event.kind, EventType::Meeting);
    assert_eq!(event.start, start_of_day(day));
    assert_eq!(event.end, start_of_day(day));
}

#[test]
fn event_form_rejects_reversed_window_and_derived_types() {
    let mut state = seeded();
    let before = state.custom_events().len();

    let reversed = EventForm {
        title: "Ritiro DHL".to_string(),
        start: "2026-07-22".to_string(),
        end: "2026-07-21".to_string(),
        kind: EventType::Pickup,
    };
    assert!(matches!(
        state.submit_event_form(reversed, None),
        Err(FormError::InvalidEventWindow { .. })
    ));

    let derived = EventForm {
        title: "Scadenza".to_string(),
        start: "2026-07-22".to_string(),
        end: "2026-07-22".to_string(),
        kind: EventType::Shipment,
    };
    assert_eq!(
        state.submit_event_form(derived, None),
        Err(FormError::UnsupportedEventType(EventType::Shipment))
    );

    assert_eq!(state.custom_events().len(), before);
}

#[test]
fn editing_custom_event_keeps_id_and_resource() {
    let mut state = seeded();
    let original = state.custom_events()[0].clone();
    let mut form = EventForm::from_event(&original);
    form.title = "Ritiro Corriere TNT (spostato)".to_string();
    form.end = "2026-07-16".to_string();

    let id = state.submit_event_form(form, Some("event-p1")).unwrap();

    assert_eq!(id, "event-p1");
    assert_eq!(state.custom_events().len(), 1);
    let edited = &state.custom_events()[0];
    assert_eq!(edited.resource_id, "tnt");
    assert_eq!(edited.title, "Ritiro Corriere TNT (spostato)");
    assert_eq!(edited.start, start_of_day(now().date()));
}

#[test]
fn derived_event_id_as_edit_target_creates_new_event() {
    let mut state = seeded();
    let day = NaiveDate::from_ymd_opt(2026, 7, 21).unwrap();
    let mut form = EventForm::for_day(day);
    form.title = "Ritiro aggiuntivo".to_string();
    form.kind = EventType::Pickup;

    let id = state.submit_event_form(form, Some("event-s-s1")).unwrap();

    assert_ne!(id, "event-s-s1");
    assert_eq!(state.custom_events().len(), 2);
    assert_eq!(state.custom_events()[0].id, id);
}

fn delete(state: &mut AppState<FixedClock>, target: DeleteTarget) {
    state.request_delete(target);
    assert!(state.confirm_delete());
}

#[test]
fn editing_deleted_records_changes_nothing() {
    let mut state = seeded();

    let shipment_form = ShipmentForm::from_shipment(state.shipment("s2").unwrap());
    delete(&mut state, DeleteTarget::Shipment("s2".to_string()));
    let shipments = state.shipments().to_vec();
    assert_eq!(
        state.submit_shipment_form(shipment_form, Some("s2")),
        Err(FormError::RecordGone("s2".to_string()))
    );
    assert_eq!(state.shipments(), shipments.as_slice());

    let task_form = TaskForm::from_task(state.task("t2").unwrap());
    delete(&mut state, DeleteTarget::Task("t2".to_string()));
    let tasks = state.tasks().to_vec();
    assert_eq!(
        state.submit_task_form(task_form, Some("t2")),
        Err(FormError::RecordGone("t2".to_string()))
    );
    assert_eq!(state.tasks(), tasks.as_slice());

    let event_form = EventForm::from_event(&state.custom_events()[0]);
    delete(&mut state, DeleteTarget::CustomEvent("event-p1".to_string()));
    assert_eq!(
        state.submit_event_form(event_form, Some("event-p1")),
        Err(FormError::RecordGone("event-p1".to_string()))
    );
    assert!(state.custom_events().is_empty());
}
