use mopp_schedule::report::workload_frame;
use mopp_schedule::{mock, workload_by_employee};

#[test]
fn workload_frame_has_one_row_per_assignment() {
    let df = workload_frame(&mock::demo_shifts(), &mock::demo_employees()).unwrap();
    // Cancelled shift 7 and undated shift 8 are left out.
    assert_eq!(df.height(), 8);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(
        names,
        vec!["employee_id", "employee_name", "shift_id", "date", "hours"]
    );
}

#[test]
fn workload_groups_hours_by_employee() {
    let rows = workload_by_employee(&mock::demo_shifts(), &mock::demo_employees()).unwrap();
    let summary: Vec<(u32, &str, u64, f64)> = rows
        .iter()
        .map(|r| (r.employee_id, r.employee_name.as_str(), r.shift_count, r.total_hours))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "Lars Hansen", 2, 8.0),
            (2, "Ingrid Olsen", 2, 8.0),
            (3, "Ahmed Nilsen", 2, 12.0),
            (4, "Sofie Berg", 1, 3.5),
            (6, "Erik Larsen", 1, 3.5),
        ]
    );
}

#[test]
fn workload_of_an_empty_schedule_is_empty() {
    let rows = workload_by_employee(&[], &mock::demo_employees()).unwrap();
    assert!(rows.is_empty());
}
