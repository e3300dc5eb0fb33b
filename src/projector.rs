//! Places shifts onto the hourly cells of a calendar grid.
//!
//! A shift occupies hour `H` of its date when `start_hour <= H < end_hour`.
//! Minutes are ignored, so a shift ending at 12:30 does not occupy hour 12.
//! Overnight shifts (end hour below start hour) match no hour under this rule
//! and are left off the grid; the projector logs each one it skips.

use crate::grid::GridDay;
use crate::shift::Shift;
use chrono::NaiveDate;
use serde::Serialize;

pub const HOURS_PER_DAY: u32 = 24;

/// True when `shift` covers hour `hour` of `day`. Overnight shifts (end hour
/// below start hour) occupy no cells.
pub fn occupies(shift: &Shift, day: NaiveDate, hour: u32) -> bool {
    shift.date == Some(day) && shift.start_hour() <= hour && hour < shift.end_hour()
}

pub fn shifts_in_slot<'a, I>(shifts: I, day: NaiveDate, hour: u32) -> Vec<&'a Shift>
where
    I: IntoIterator<Item = &'a Shift>,
{
    shifts
        .into_iter()
        .filter(|shift| occupies(shift, day, hour))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotCell {
    pub date: NaiveDate,
    pub hour: u32,
    pub shift_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarGrid {
    pub days: Vec<GridDay>,
    /// Day-major, 24 cells per day.
    pub cells: Vec<SlotCell>,
}

impl CalendarGrid {
    pub fn cell(&self, date: NaiveDate, hour: u32) -> Option<&SlotCell> {
        if hour >= HOURS_PER_DAY {
            return None;
        }
        let day_idx = self.days.iter().position(|day| day.date == date)?;
        self.cells
            .get(day_idx * HOURS_PER_DAY as usize + hour as usize)
    }

    /// Every (date, hour) cell holding `shift_id`, in grid order.
    pub fn cells_for_shift(&self, shift_id: u32) -> Vec<(NaiveDate, u32)> {
        self.cells
            .iter()
            .filter(|cell| cell.shift_ids.contains(&shift_id))
            .map(|cell| (cell.date, cell.hour))
            .collect()
    }

    pub fn occupied_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.shift_ids.is_empty())
            .count()
    }
}

pub fn project<'a, I>(shifts: I, days: Vec<GridDay>) -> CalendarGrid
where
    I: IntoIterator<Item = &'a Shift>,
{
    let visible: Vec<&Shift> = shifts
        .into_iter()
        .filter(|shift| {
            shift
                .date
                .is_some_and(|date| days.iter().any(|day| day.date == date))
        })
        .collect();

    for shift in visible.iter().filter(|shift| shift.is_overnight()) {
        tracing::warn!(
            shift_id = shift.id,
            start = %shift.start_time.format("%H:%M"),
            end = %shift.end_time.format("%H:%M"),
            "overnight shift has no hourly cells on the grid"
        );
    }

    let mut cells = Vec::with_capacity(days.len() * HOURS_PER_DAY as usize);
    for day in &days {
        for hour in 0..HOURS_PER_DAY {
            let shift_ids = visible
                .iter()
                .filter(|shift| occupies(shift, day.date, hour))
                .map(|shift| shift.id)
                .collect();
            cells.push(SlotCell {
                date: day.date,
                hour,
                shift_ids,
            });
        }
    }

    CalendarGrid { days, cells }
}
