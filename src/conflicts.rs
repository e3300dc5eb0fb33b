use crate::shift::{Shift, ShiftStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Two scheduled shifts that book the same employee at overlapping times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftConflict {
    pub employee_id: u32,
    pub first_shift: u32,
    pub second_shift: u32,
}

/// Finds double bookings among scheduled shifts using their real intervals;
/// overnight shifts end on the following day. Ordered by employee, then shift ids.
pub fn find_conflicts<'a, I>(shifts: I) -> Vec<ShiftConflict>
where
    I: IntoIterator<Item = &'a Shift>,
{
    let mut by_employee: BTreeMap<u32, Vec<&Shift>> = BTreeMap::new();
    for shift in shifts {
        if shift.status != ShiftStatus::Scheduled || shift.date.is_none() {
            continue;
        }
        for employee_id in &shift.assigned_employees {
            by_employee.entry(*employee_id).or_default().push(shift);
        }
    }

    let mut conflicts = Vec::new();
    for (employee_id, mut booked) in by_employee {
        booked.sort_by_key(|shift| shift.id);
        for (idx, first) in booked.iter().enumerate() {
            let Some((first_start, first_end)) = first.interval() else {
                continue;
            };
            for second in &booked[idx + 1..] {
                let Some((second_start, second_end)) = second.interval() else {
                    continue;
                };
                if first_start < second_end && second_start < first_end {
                    conflicts.push(ShiftConflict {
                        employee_id,
                        first_shift: first.id,
                        second_shift: second.id,
                    });
                }
            }
        }
    }

    if !conflicts.is_empty() {
        tracing::warn!(count = conflicts.len(), "employee double bookings detected");
    }
    conflicts
}
