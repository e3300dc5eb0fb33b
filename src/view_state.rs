//! Schedule screen state as an immutable value driven by a pure reducer.

use crate::calendar::WorkCalendar;
use crate::filter::ListFilter;
use crate::grid::{self, ViewMode};
use crate::projector::{self, CalendarGrid};
use crate::shift::{Shift, ShiftStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleViewState {
    pub anchor: NaiveDate,
    pub mode: ViewMode,
    pub search: String,
    pub status_filter: Option<ShiftStatus>,
    pub selected_shift: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleAction {
    Next,
    Previous,
    GoTo(NaiveDate),
    SetMode(ViewMode),
    Search(String),
    FilterStatus(Option<ShiftStatus>),
    Select(Option<u32>),
}

impl ScheduleViewState {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            mode: ViewMode::default(),
            search: String::new(),
            status_filter: None,
            selected_shift: None,
        }
    }

    pub fn filter(&self) -> ListFilter<ShiftStatus> {
        ListFilter::new(self.search.clone(), self.status_filter)
    }

    pub fn visible_days(&self) -> Vec<NaiveDate> {
        grid::visible_days(self.anchor, self.mode)
    }

    /// Filters `shifts` by the current search/status and projects them onto the visible days.
    pub fn render(&self, shifts: &[Shift], calendar: &WorkCalendar) -> CalendarGrid {
        let filter = self.filter();
        let days = grid::build_grid_days(self.anchor, self.mode, calendar);
        projector::project(filter.apply(shifts), days)
    }
}

pub fn reduce(state: &ScheduleViewState, action: ScheduleAction) -> ScheduleViewState {
    let mut next = state.clone();
    match action {
        ScheduleAction::Next => next.anchor = grid::step(state.anchor, state.mode, true),
        ScheduleAction::Previous => next.anchor = grid::step(state.anchor, state.mode, false),
        ScheduleAction::GoTo(date) => next.anchor = date,
        ScheduleAction::SetMode(mode) => next.mode = mode,
        ScheduleAction::Search(term) => next.search = term,
        ScheduleAction::FilterStatus(status) => next.status_filter = status,
        ScheduleAction::Select(shift_id) => next.selected_shift = shift_id,
    }
    next
}
