use crate::employee::Employee;
use crate::shift::{Shift, ShiftStatus};
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadRow {
    pub employee_id: u32,
    pub employee_name: String,
    pub shift_count: u64,
    pub total_hours: f64,
}

/// One row per (shift, assigned employee); cancelled and undated shifts are left out.
pub fn workload_frame(shifts: &[Shift], employees: &[Employee]) -> PolarsResult<DataFrame> {
    let mut employee_ids: Vec<u32> = Vec::new();
    let mut employee_names: Vec<String> = Vec::new();
    let mut shift_ids: Vec<u32> = Vec::new();
    let mut dates: Vec<String> = Vec::new();
    let mut hours: Vec<f64> = Vec::new();

    for shift in shifts {
        if shift.status == ShiftStatus::Cancelled {
            continue;
        }
        let Some(date) = shift.date else {
            continue;
        };
        for employee_id in &shift.assigned_employees {
            let name = employees
                .iter()
                .find(|e| e.id == *employee_id)
                .map(|e| e.name.clone())
                .unwrap_or_else(|| format!("#{employee_id}"));
            employee_ids.push(*employee_id);
            employee_names.push(name);
            shift_ids.push(shift.id);
            dates.push(date.format("%Y-%m-%d").to_string());
            hours.push(shift.duration_hours());
        }
    }

    DataFrame::new(vec![
        Series::new(PlSmallStr::from_static("employee_id"), employee_ids).into_column(),
        Series::new(PlSmallStr::from_static("employee_name"), employee_names).into_column(),
        Series::new(PlSmallStr::from_static("shift_id"), shift_ids).into_column(),
        Series::new(PlSmallStr::from_static("date"), dates).into_column(),
        Series::new(PlSmallStr::from_static("hours"), hours).into_column(),
    ])
}

/// Shift count and planned hours per employee, ordered by employee id.
pub fn workload_by_employee(
    shifts: &[Shift],
    employees: &[Employee],
) -> PolarsResult<Vec<WorkloadRow>> {
    let grouped = workload_frame(shifts, employees)?
        .lazy()
        .group_by([col("employee_id"), col("employee_name")])
        .agg([
            col("shift_id").count().alias("shift_count"),
            col("hours").sum().alias("total_hours"),
        ])
        .sort(["employee_id"], SortMultipleOptions::default())
        .collect()?;

    let ids = grouped.column("employee_id")?.u32()?;
    let names = grouped.column("employee_name")?.str()?;
    let counts = grouped
        .column("shift_count")?
        .cast(&DataType::UInt64)?;
    let counts = counts.u64()?;
    let totals = grouped.column("total_hours")?.f64()?;

    let mut rows = Vec::with_capacity(grouped.height());
    for idx in 0..grouped.height() {
        rows.push(WorkloadRow {
            employee_id: ids.get(idx).unwrap_or_default(),
            employee_name: names.get(idx).unwrap_or_default().to_string(),
            shift_count: counts.get(idx).unwrap_or_default(),
            total_hours: totals.get(idx).unwrap_or_default(),
        });
    }
    Ok(rows)
}
