use crate::labels::labelled_enum;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

labelled_enum! {
    /// Lifecycle of a shift.
    pub enum ShiftStatus {
        Pending => "pending",
        Scheduled => "scheduled",
        InProgress => "in-progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

labelled_enum! {
    pub enum ShiftPriority {
        Low => "low",
        Normal => "normal",
        High => "high",
        Urgent => "urgent",
    }
}

impl Default for ShiftStatus {
    fn default() -> Self {
        ShiftStatus::Scheduled
    }
}

impl Default for ShiftPriority {
    fn default() -> Self {
        ShiftPriority::Normal
    }
}

impl ShiftStatus {
    /// Completed and cancelled shifts never change status again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ShiftStatus::Completed | ShiftStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: ShiftStatus) -> bool {
        use ShiftStatus::*;
        matches!(
            (self, next),
            (Pending, Scheduled)
                | (Pending, Cancelled)
                | (Scheduled, InProgress)
                | (Scheduled, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionError {
    pub shift_id: u32,
    pub from: ShiftStatus,
    pub to: ShiftStatus,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shift {} cannot move from {} to {}",
            self.shift_id, self.from, self.to
        )
    }
}

impl std::error::Error for TransitionError {}

/// Parses `HH:MM` (or `HH:MM:SS`) into a time of day.
pub fn parse_clock_time(input: &str) -> Result<NaiveTime, String> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|err| format!("invalid time '{trimmed}': {err}"))
}

pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// A scheduled block of cleaning work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: u32,
    pub title: String,
    /// Shifts without a date never appear on the calendar grid.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Earlier than `start_time` when the shift runs past midnight.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub assigned_employees: Vec<u32>,
    #[serde(default)]
    pub status: ShiftStatus,
    #[serde(default)]
    pub priority: ShiftPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Shift {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        date: Option<NaiveDate>,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            start_time,
            end_time,
            location: String::new(),
            assigned_employees: Vec::new(),
            status: ShiftStatus::default(),
            priority: ShiftPriority::default(),
            contract_id: None,
            notes: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_employees(mut self, employees: impl IntoIterator<Item = u32>) -> Self {
        self.assigned_employees = employees.into_iter().collect();
        self
    }

    pub fn with_status(mut self, status: ShiftStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: ShiftPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn end_hour(&self) -> u32 {
        self.end_time.hour()
    }

    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }

    pub fn is_assigned_to(&self, employee_id: u32) -> bool {
        self.assigned_employees.contains(&employee_id)
    }

    /// Worked minutes, wrapping past midnight for overnight shifts.
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.end_time - self.start_time).num_minutes();
        if minutes < 0 { minutes + 24 * 60 } else { minutes }
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() as f64 / 60.0
    }

    /// Real start and end instants; overnight shifts end on the following day.
    pub fn interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let date = self.date?;
        let start = date.and_time(self.start_time);
        Some((start, start + Duration::minutes(self.duration_minutes())))
    }

    pub fn transition_to(&mut self, next: ShiftStatus) -> Result<(), TransitionError> {
        if self.status == next {
            return Ok(());
        }
        if !self.status.can_transition_to(next) {
            return Err(TransitionError {
                shift_id: self.id,
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
