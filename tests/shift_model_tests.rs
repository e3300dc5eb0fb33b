use chrono::{NaiveDate, NaiveTime};
use mopp_schedule::shift::parse_clock_time;
use mopp_schedule::{Shift, ShiftPriority, ShiftStatus};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn durations_wrap_past_midnight() {
    let day = Shift::new(1, "Day", Some(d(2024, 1, 15)), t(13, 0), t(16, 30));
    assert_eq!(day.duration_minutes(), 210);
    assert!((day.duration_hours() - 3.5).abs() < f64::EPSILON);
    assert!(!day.is_overnight());

    let night = Shift::new(2, "Night", Some(d(2024, 1, 17)), t(22, 0), t(2, 0));
    assert!(night.is_overnight());
    assert_eq!(night.duration_minutes(), 240);
    let (start, end) = night.interval().unwrap();
    assert_eq!(start, d(2024, 1, 17).and_hms_opt(22, 0, 0).unwrap());
    assert_eq!(end, d(2024, 1, 18).and_hms_opt(2, 0, 0).unwrap());

    let undated = Shift::new(3, "Backlog", None, t(9, 0), t(10, 0));
    assert!(undated.interval().is_none());
}

#[test]
fn transition_table() {
    use ShiftStatus::*;
    assert!(Pending.can_transition_to(Scheduled));
    assert!(Pending.can_transition_to(Cancelled));
    assert!(Scheduled.can_transition_to(InProgress));
    assert!(InProgress.can_transition_to(Completed));
    assert!(!Pending.can_transition_to(InProgress));
    assert!(!Scheduled.can_transition_to(Completed));
    assert!(!InProgress.can_transition_to(Scheduled));
    for next in ShiftStatus::ALL {
        assert!(!Completed.can_transition_to(*next));
        assert!(!Cancelled.can_transition_to(*next));
    }
    assert!(Completed.is_terminal() && Cancelled.is_terminal());
    assert!(!InProgress.is_terminal());
}

#[test]
fn transition_to_reports_the_rejected_move() {
    let mut shift = Shift::new(9, "X", None, t(9, 0), t(10, 0)).with_status(ShiftStatus::Cancelled);
    let err = shift.transition_to(ShiftStatus::Scheduled).unwrap_err();
    assert_eq!(err.shift_id, 9);
    assert_eq!(err.from, ShiftStatus::Cancelled);
    assert_eq!(err.to, ShiftStatus::Scheduled);
    assert_eq!(shift.status, ShiftStatus::Cancelled);
}

#[test]
fn status_labels_accept_underscores_and_case() {
    assert_eq!("in_progress".parse::<ShiftStatus>().unwrap(), ShiftStatus::InProgress);
    assert_eq!("In-Progress".parse::<ShiftStatus>().unwrap(), ShiftStatus::InProgress);
    assert_eq!(ShiftStatus::InProgress.to_string(), "in-progress");
    assert_eq!("URGENT".parse::<ShiftPriority>().unwrap(), ShiftPriority::Urgent);
    assert_eq!(ShiftStatus::default(), ShiftStatus::Scheduled);
}

#[test]
fn clock_times_parse_with_or_without_seconds() {
    assert_eq!(parse_clock_time("07:30").unwrap(), t(7, 30));
    assert_eq!(parse_clock_time(" 07:30:00 ").unwrap(), t(7, 30));
    assert!(parse_clock_time("25:00").is_err());
}
