use cardbox_core::{
    ContactService, ContactServiceError, ContactStore, Person, SortOrder, UndoableAction,
    ViewFilter,
};

fn person(name: &str, appt: &str) -> Person {
    Person::new(
        name,
        "91234567",
        "contact@example.com",
        "21 Lower Kent Ridge Rd",
        appt,
    )
}

#[test]
fn add_records_command_and_duplicate_add_changes_nothing() {
    let mut service = ContactService::empty();
    let a = person("Alex Yeoh", "12-2024");

    service.add(a.clone()).unwrap();
    assert_eq!(service.store().command_count(), 1);
    assert_eq!(service.store().last_command(), Some("add"));

    let err = service.add(a).unwrap_err();
    assert_eq!(err, ContactServiceError::DuplicatePerson);
    assert_eq!(service.store().len(), 1);
    assert_eq!(service.store().command_count(), 1);
    assert_eq!(service.store().history_len(), 1);
}

#[test]
fn delete_requires_existence_and_counts_deletes_over_full_history() {
    let mut service = ContactService::empty();
    let a = person("Alex Yeoh", "12-2024");
    let b = person("Bernice Yu", "01-2025");

    let err = service.delete(&a).unwrap_err();
    assert_eq!(err, ContactServiceError::PersonNotFound);
    assert_eq!(service.delete_count(), 0);

    service.add(a.clone()).unwrap();
    service.add(b.clone()).unwrap();
    service.delete(&a).unwrap();
    service.edit(&b, b.with_appointment_date("02-2025")).unwrap();
    service.delete(&b.with_appointment_date("02-2025")).unwrap();

    // Full-history scan: undone or not, every delete command counts.
    assert_eq!(service.delete_count(), 2);
}

#[test]
fn edit_records_the_pair_for_undo() {
    let mut service = ContactService::empty();
    let a = person("Alex Yeoh", "12-2024");
    service.add(a.clone()).unwrap();

    let edited = a.with_appointment_date("06-2025");
    service.edit(&a, edited.clone()).unwrap();
    assert_eq!(service.store().persons()[0], edited);

    let undone = service.undo().unwrap();
    assert!(matches!(undone, UndoableAction::Edited(_)));
    assert_eq!(service.store().persons()[0], a);
    assert_eq!(service.store().last_command(), Some("add"));
}

#[test]
fn blank_calendar_filter_is_a_usage_error_and_mutates_nothing() {
    let mut service = ContactService::empty();
    service.add(person("Alex Yeoh", "12-2024")).unwrap();

    let err = service.filter_by_calendar("   ").unwrap_err();
    assert!(matches!(err, ContactServiceError::Usage(_)));
    assert_eq!(service.store().filter(), &ViewFilter::All);
    assert_eq!(service.view().len(), 1);
}

#[test]
fn calendar_filter_narrows_the_view() {
    let mut service = ContactService::empty();
    service.add(person("Alex Yeoh", "12-2024 urgent")).unwrap();
    service.add(person("Bernice Yu", "01-2025")).unwrap();

    service.filter_by_calendar("urgent").unwrap();
    let view = service.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Alex Yeoh");

    service.show_all();
    assert_eq!(service.view().len(), 2);
}

#[test]
fn undo_walks_back_through_mixed_command_kinds() {
    let mut service = ContactService::empty();
    let a = person("Alex Yeoh", "12-2024");
    let b = person("Bernice Yu", "01-2025");

    service.add(a.clone()).unwrap();
    service.add(b.clone()).unwrap();
    let edited = b.with_appointment_date("02-2025");
    service.edit(&b, edited.clone()).unwrap();
    service.delete(&a).unwrap();

    assert!(matches!(
        service.undo().unwrap(),
        UndoableAction::Deleted(_)
    ));
    assert!(service.store().has_person(&a));

    assert!(matches!(service.undo().unwrap(), UndoableAction::Edited(_)));
    assert!(service.store().has_person(&b));

    assert!(matches!(service.undo().unwrap(), UndoableAction::Added(_)));
    assert!(!service.store().has_person(&b));

    assert!(matches!(service.undo().unwrap(), UndoableAction::Added(_)));
    assert!(service.store().is_empty());

    let err = service.undo().unwrap_err();
    assert_eq!(err, ContactServiceError::NothingToUndo);
    assert_eq!(service.store().command_count(), 0);
}

#[test]
fn command_names_stay_paired_with_undoable_actions() {
    let mut service = ContactService::empty();
    let a = person("Alex Yeoh", "12-2024");
    let b = person("Bernice Yu", "01-2025");

    service.add(a.clone()).unwrap();
    service.add(b.clone()).unwrap();
    service.edit(&b, b.with_appointment_date("02-2025")).unwrap();
    service.delete(&a).unwrap();
    assert_eq!(service.store().command_count(), service.store().history_len());

    while service.store().history_len() > 0 {
        service.undo().unwrap();
        assert_eq!(service.store().command_count(), service.store().history_len());
    }
    assert_eq!(service.store().command_count(), 0);
}

#[test]
fn sort_command_keeps_active_filter() {
    let mut service = ContactService::empty();
    service.add(person("Bernice Yu", "12-2024")).unwrap();
    service.add(person("Alex Yeoh", "12-2024")).unwrap();
    service.filter_by_calendar("12-2024").unwrap();

    service.sort_by(SortOrder::Name);
    let names: Vec<String> = service.view().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Alex Yeoh", "Bernice Yu"]);
    assert_ne!(service.store().filter(), &ViewFilter::All);
}

#[test]
fn service_wraps_a_preloaded_store() {
    let store = ContactStore::new(
        vec![person("Alex Yeoh", "12-2024")],
        SortOrder::AppointmentDate,
    )
    .unwrap();
    let service = ContactService::new(store);
    assert_eq!(service.view().len(), 1);
}
