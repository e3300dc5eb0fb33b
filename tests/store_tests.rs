use chrono::{NaiveDate, NaiveTime};
use mopp_schedule::{
    Employee, InMemoryRepository, PortalStore, Repository, Shift, ShiftStatus, StoreError, mock,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn demo() -> PortalStore {
    mock::demo_store().unwrap()
}

#[test]
fn repository_lists_records_by_ascending_id() {
    let mut repo = InMemoryRepository::new();
    repo.create(Employee::new(3, "C", "Cleaner")).unwrap();
    repo.create(Employee::new(1, "A", "Cleaner")).unwrap();
    repo.create(Employee::new(2, "B", "Cleaner")).unwrap();

    let ids: Vec<u32> = repo.list().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(repo.next_id(), 4);
    assert_eq!(repo.get(2).unwrap().name, "B");
    assert!(repo.get(9).is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut repo = InMemoryRepository::new();
    repo.create(Employee::new(1, "A", "Cleaner")).unwrap();
    let err = repo.create(Employee::new(1, "Again", "Cleaner")).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { kind: "employee", id: 1 }));
    assert_eq!(repo.len(), 1);
}

#[test]
fn updating_a_missing_record_is_not_found() {
    let mut repo: InMemoryRepository<Employee> = InMemoryRepository::new();
    let err = repo.update(Employee::new(7, "Ghost", "Cleaner")).unwrap_err();
    assert_eq!(err.to_string(), "employee 7 not found");
}

#[test]
fn invalid_shifts_never_reach_the_store() {
    let mut store = PortalStore::new();

    let zero_length = Shift::new(1, "Nothing", Some(d(2024, 1, 15)), t(9, 0), t(9, 0));
    let err = store.create_shift(zero_length).unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));

    let untitled = Shift::new(2, "  ", Some(d(2024, 1, 15)), t(9, 0), t(10, 0));
    assert!(store.create_shift(untitled).is_err());

    let doubled = Shift::new(3, "Twice", Some(d(2024, 1, 15)), t(9, 0), t(10, 0))
        .with_employees([1, 1]);
    assert!(store.create_shift(doubled).is_err());

    assert!(store.shifts.is_empty());
}

#[test]
fn shifts_must_reference_known_employees() {
    let mut store = demo();
    let shift = Shift::new(20, "Extra", Some(d(2024, 1, 19)), t(9, 0), t(11, 0))
        .with_employees([1, 42]);
    let err = store.create_shift(shift).unwrap_err();
    assert!(err.to_string().contains("unknown employee 42"));

    // A store without employees accepts any reference.
    let mut bare = PortalStore::new();
    let shift = Shift::new(20, "Extra", Some(d(2024, 1, 19)), t(9, 0), t(11, 0))
        .with_employees([42]);
    assert!(bare.create_shift(shift).is_ok());
}

#[test]
fn status_changes_follow_the_lifecycle() {
    let mut store = demo();

    // Shift 6 is pending.
    let updated = store.set_shift_status(6, ShiftStatus::Scheduled).unwrap();
    assert_eq!(updated.status, ShiftStatus::Scheduled);
    store.set_shift_status(6, ShiftStatus::InProgress).unwrap();
    store.set_shift_status(6, ShiftStatus::Completed).unwrap();
    assert_eq!(store.shifts.get(6).unwrap().status, ShiftStatus::Completed);

    let err = store.set_shift_status(6, ShiftStatus::Scheduled).unwrap_err();
    assert_eq!(err.to_string(), "shift 6 cannot move from completed to scheduled");
}

#[test]
fn skipping_a_lifecycle_step_is_rejected() {
    let mut store = demo();
    let err = store.set_shift_status(6, ShiftStatus::Completed).unwrap_err();
    assert!(matches!(err, StoreError::Transition(_)));
    assert_eq!(store.shifts.get(6).unwrap().status, ShiftStatus::Pending);

    // Setting the current status again is a no-op.
    assert!(store.set_shift_status(6, ShiftStatus::Pending).is_ok());

    let err = store.set_shift_status(99, ShiftStatus::Cancelled).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "shift", id: 99 }));
}

#[test]
fn replacing_shifts_rolls_back_on_unknown_employee() {
    let mut store = demo();
    let bad = vec![
        Shift::new(1, "Fine", Some(d(2024, 2, 1)), t(8, 0), t(10, 0)).with_employees([1]),
        Shift::new(2, "Broken", Some(d(2024, 2, 1)), t(8, 0), t(10, 0)).with_employees([77]),
    ];
    assert!(store.replace_shifts(bad).is_err());
    assert_eq!(store.shifts.len(), mock::demo_shifts().len());

    let good = vec![Shift::new(1, "Fine", Some(d(2024, 2, 1)), t(8, 0), t(10, 0))];
    store.replace_shifts(good).unwrap();
    assert_eq!(store.shifts.len(), 1);
}

#[test]
fn assigned_employees_resolves_records() {
    let store = demo();
    let shift = store.shifts.get(4).unwrap();
    let names: Vec<String> = store
        .assigned_employees(&shift)
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Lars Hansen", "Ingrid Olsen"]);
}

#[test]
fn dataset_round_trips_through_the_store() {
    let store = demo();
    let dataset = store.to_dataset();
    assert_eq!(dataset.shifts, mock::demo_shifts());
    assert_eq!(dataset.employees.len(), 6);
    let rebuilt = PortalStore::from_dataset(dataset).unwrap();
    assert_eq!(rebuilt.contracts.list(), store.contracts.list());
}
