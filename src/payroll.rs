use crate::employee::Employee;
use crate::invoice::round_currency;
use crate::shift::{Shift, ShiftStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollLine {
    pub employee_id: u32,
    pub employee_name: String,
    pub shift_count: usize,
    pub minutes: i64,
    pub hourly_rate: f64,
    pub gross_pay: f64,
}

impl PayrollLine {
    pub fn hours(&self) -> f64 {
        self.minutes as f64 / 60.0
    }
}

/// Pays completed shifts dated within `start..=end`, one line per assigned
/// employee, ordered by employee id. Unknown employees are paid at rate zero.
pub fn run_payroll(
    shifts: &[Shift],
    employees: &[Employee],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<PayrollLine> {
    let mut worked: BTreeMap<u32, (usize, i64)> = BTreeMap::new();
    for shift in shifts {
        if shift.status != ShiftStatus::Completed {
            continue;
        }
        let Some(date) = shift.date else {
            continue;
        };
        if date < start || date > end {
            continue;
        }
        for employee_id in &shift.assigned_employees {
            let entry = worked.entry(*employee_id).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += shift.duration_minutes();
        }
    }

    worked
        .into_iter()
        .map(|(employee_id, (shift_count, minutes))| {
            let employee = employees.iter().find(|e| e.id == employee_id);
            let hourly_rate = employee.and_then(|e| e.hourly_rate).unwrap_or(0.0);
            PayrollLine {
                employee_id,
                employee_name: employee
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| format!("#{employee_id}")),
                shift_count,
                minutes,
                hourly_rate,
                gross_pay: round_currency(minutes as f64 / 60.0 * hourly_rate),
            }
        })
        .collect()
}

pub fn payroll_total(lines: &[PayrollLine]) -> f64 {
    round_currency(lines.iter().map(|line| line.gross_pay).sum())
}
