//! Calendar grid: which days a day/week/month view shows for an anchor date.

use crate::calendar::WorkCalendar;
use crate::labels::labelled_enum;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::Serialize;

labelled_enum! {
    pub enum ViewMode {
        Day => "day",
        Week => "week",
        Month => "month",
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Week
    }
}

/// Monday on or before `date`, clamped to `NaiveDate::MIN`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MIN)
}

/// `start` and every following day up to and including `NaiveDate::MAX`.
fn days_from(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |day| day.succ_opt())
}

/// The seven days of the ISO week containing `anchor`, Monday first. Weeks
/// cut by the ends of the date range are shortened, never empty.
pub fn week_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    days_from(week_start(anchor)).take(7).collect()
}

/// Whole weeks covering the month of `anchor`: from the Monday on/before the
/// first through the Sunday on/after the last day.
pub fn month_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = anchor.with_day(1).unwrap_or(anchor);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    let end = last
        .checked_add_days(Days::new(u64::from(6 - last.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MAX);
    days_from(week_start(first))
        .take_while(|day| *day <= end)
        .collect()
}

pub fn visible_days(anchor: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![anchor],
        ViewMode::Week => week_days(anchor),
        ViewMode::Month => month_days(anchor),
    }
}

/// Moves the anchor one view-length forward or back. Month steps clamp to the
/// last day of a shorter month; a step past the date range keeps the anchor.
pub fn step(anchor: NaiveDate, mode: ViewMode, forward: bool) -> NaiveDate {
    match (mode, forward) {
        (ViewMode::Day, true) => anchor.succ_opt().unwrap_or(anchor),
        (ViewMode::Day, false) => anchor.pred_opt().unwrap_or(anchor),
        (ViewMode::Week, true) => anchor.checked_add_days(Days::new(7)).unwrap_or(anchor),
        (ViewMode::Week, false) => anchor.checked_sub_days(Days::new(7)).unwrap_or(anchor),
        (ViewMode::Month, true) => anchor.checked_add_months(Months::new(1)).unwrap_or(anchor),
        (ViewMode::Month, false) => anchor.checked_sub_months(Months::new(1)).unwrap_or(anchor),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridDay {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub is_weekend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
    /// False for the leading/trailing days a month view borrows from neighbouring months.
    pub in_anchor_month: bool,
}

pub fn build_grid_days(anchor: NaiveDate, mode: ViewMode, calendar: &WorkCalendar) -> Vec<GridDay> {
    let days = visible_days(anchor, mode);
    let holidays = match (days.first(), days.last()) {
        (Some(first), Some(last)) => calendar.holidays_between(*first, *last),
        _ => Default::default(),
    };
    days.into_iter()
        .map(|date| GridDay {
            date,
            weekday: date.weekday(),
            is_weekend: calendar.is_weekend(date),
            holiday: holidays.get(&date).cloned(),
            in_anchor_month: date.year() == anchor.year() && date.month() == anchor.month(),
        })
        .collect()
}
