use chrono::NaiveDate;
use mopp_schedule::{
    ScheduleAction, ScheduleViewState, ShiftStatus, ViewMode, WorkCalendar, mock, reduce,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn reducer_returns_a_new_state_and_leaves_the_old_one_alone() {
    let start = ScheduleViewState::new(d(2024, 1, 17));
    let next = reduce(&start, ScheduleAction::Next);
    assert_eq!(start.anchor, d(2024, 1, 17));
    assert_eq!(next.anchor, d(2024, 1, 24));
    assert_eq!(next.mode, ViewMode::Week);
}

#[test]
fn navigation_follows_the_view_mode() {
    let state = ScheduleViewState::new(d(2024, 1, 31));
    let state = reduce(&state, ScheduleAction::SetMode(ViewMode::Month));
    let state = reduce(&state, ScheduleAction::Next);
    assert_eq!(state.anchor, d(2024, 2, 29));

    let state = reduce(&state, ScheduleAction::SetMode(ViewMode::Day));
    let state = reduce(&state, ScheduleAction::Previous);
    assert_eq!(state.anchor, d(2024, 2, 28));

    let state = reduce(&state, ScheduleAction::GoTo(d(2024, 5, 17)));
    assert_eq!(state.visible_days(), vec![d(2024, 5, 17)]);
}

#[test]
fn search_and_status_filter_shape_the_rendered_grid() {
    let shifts = mock::demo_shifts();
    let calendar = WorkCalendar::default();
    let state = ScheduleViewState::new(d(2024, 1, 15));

    let all = state.render(&shifts, &calendar);
    assert!(!all.cells_for_shift(3).is_empty());

    let state = reduce(&state, ScheduleAction::Search("oslo".into()));
    let oslo = state.render(&shifts, &calendar);
    assert!(oslo.cells_for_shift(3).is_empty());
    assert!(!oslo.cells_for_shift(1).is_empty());

    let state = reduce(
        &state,
        ScheduleAction::FilterStatus(Some(ShiftStatus::Scheduled)),
    );
    let scheduled = state.render(&shifts, &calendar);
    assert!(scheduled.cells_for_shift(1).is_empty());
    assert_eq!(scheduled.cells_for_shift(4).len(), 4);

    let cleared = reduce(&state, ScheduleAction::FilterStatus(None));
    assert_eq!(cleared.status_filter, None);
    assert_eq!(cleared.search, "oslo");
}

#[test]
fn selection_is_part_of_the_state() {
    let state = ScheduleViewState::new(d(2024, 1, 15));
    let selected = reduce(&state, ScheduleAction::Select(Some(4)));
    assert_eq!(selected.selected_shift, Some(4));
    let cleared = reduce(&selected, ScheduleAction::Select(None));
    assert_eq!(cleared.selected_shift, None);
    assert_eq!(cleared.anchor, state.anchor);
}
