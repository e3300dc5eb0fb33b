use chrono::{NaiveDate, NaiveTime};
use mopp_schedule::store::{read_dataset_json, read_shifts_csv};
use mopp_schedule::{
    Repository, ShiftPriority, ShiftStatus, StoreError, load_dataset_from_json,
    load_shifts_from_csv, mock,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn json_fixture_round_trip() {
    let dataset = mock::demo_dataset();
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer_pretty(&mut file, &dataset).unwrap();

    let store = load_dataset_from_json(file.path()).unwrap();
    assert_eq!(store.shifts.list(), dataset.shifts);
    assert_eq!(store.invoices.list(), dataset.invoices);
    assert_eq!(store.products.len(), 4);
}

#[test]
fn json_times_use_hour_minute_strings() {
    let json = serde_json::to_value(&mock::demo_shifts()[4]).unwrap();
    assert_eq!(json["start_time"], "22:00");
    assert_eq!(json["end_time"], "02:00");
    assert_eq!(json["status"], "scheduled");
    assert_eq!(json["priority"], "urgent");
}

#[test]
fn json_fixture_fills_defaults() {
    let raw = r#"{
        "shifts": [
            {"id": 1, "title": "Stairwell", "date": "2024-03-04", "start_time": "06:00", "end_time": "08:15"}
        ]
    }"#;
    let store = read_dataset_json(raw.as_bytes()).unwrap();
    let shift = store.shifts.get(1).unwrap();
    assert_eq!(shift.status, ShiftStatus::Scheduled);
    assert_eq!(shift.priority, ShiftPriority::Normal);
    assert_eq!(shift.end_time, NaiveTime::from_hms_opt(8, 15, 0).unwrap());
    assert!(store.employees.is_empty());
}

#[test]
fn json_fixture_with_bad_status_is_rejected() {
    let raw = r#"{"shifts": [{"id": 1, "title": "X", "start_time": "06:00", "end_time": "07:00", "status": "done"}]}"#;
    let err = read_dataset_json(raw.as_bytes()).unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
}

#[test]
fn missing_fixture_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dataset_from_json(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[test]
fn csv_import_parses_all_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "id,title,date,start_time,end_time,location,assigned_employees,status,priority,contract_id,notes"
    )
    .unwrap();
    writeln!(
        file,
        "1,Office round,2024-02-05,08:00,12:00,\"Karl Johans gate 1, Oslo\",1;2,in_progress,High,1,Bring keys"
    )
    .unwrap();
    writeln!(file, "2,Backlog,,09:00,10:30,,,pending,,,").unwrap();

    let shifts = load_shifts_from_csv(file.path()).unwrap();
    assert_eq!(shifts.len(), 2);

    let first = &shifts[0];
    assert_eq!(first.date, Some(d(2024, 2, 5)));
    assert_eq!(first.location, "Karl Johans gate 1, Oslo");
    assert_eq!(first.assigned_employees, vec![1, 2]);
    assert_eq!(first.status, ShiftStatus::InProgress);
    assert_eq!(first.priority, ShiftPriority::High);
    assert_eq!(first.contract_id, Some(1));
    assert_eq!(first.notes.as_deref(), Some("Bring keys"));

    let second = &shifts[1];
    assert_eq!(second.date, None);
    assert!(second.assigned_employees.is_empty());
    assert_eq!(second.priority, ShiftPriority::Normal);
    assert_eq!(second.notes, None);
}

#[test]
fn csv_import_rejects_bad_rows() {
    let header = "id,title,date,start_time,end_time\n";

    let bad_time = format!("{header}1,X,2024-02-05,8am,12:00\n");
    assert!(read_shifts_csv(bad_time.as_bytes()).is_err());

    let bad_date = format!("{header}1,X,05.02.2024,08:00,12:00\n");
    let err = read_shifts_csv(bad_date.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("invalid date"));

    let empty = read_shifts_csv(header.as_bytes()).unwrap_err();
    assert_eq!(empty.to_string(), "invalid data: CSV file contained no shifts");
}

#[test]
fn csv_import_replaces_store_shifts() {
    let mut store = mock::demo_store().unwrap();
    let csv = "id,title,date,start_time,end_time,assigned_employees\n10,Lobby,2024-02-06,07:00,09:00,4\n";
    let shifts = read_shifts_csv(csv.as_bytes()).unwrap();
    store.replace_shifts(shifts).unwrap();
    assert_eq!(store.shifts.len(), 1);
    assert_eq!(store.shifts.get(10).unwrap().assigned_employees, vec![4]);
}
