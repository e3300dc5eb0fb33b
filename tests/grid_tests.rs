use chrono::{Datelike, NaiveDate, Weekday};
use mopp_schedule::grid::{self, ViewMode};
use mopp_schedule::{WorkCalendar, build_grid_days, visible_days};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn week_view_is_seven_consecutive_days_from_monday() {
    let days = visible_days(d(2024, 1, 17), ViewMode::Week);
    assert_eq!(days.len(), 7);
    assert_eq!(days[0], d(2024, 1, 15));
    assert_eq!(days[0].weekday(), Weekday::Mon);
    assert_eq!(days[6], d(2024, 1, 21));
    assert!(days.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));
}

#[test]
fn week_view_anchored_on_sunday_starts_on_previous_monday() {
    let days = visible_days(d(2024, 1, 21), ViewMode::Week);
    assert_eq!(days[0], d(2024, 1, 15));
}

#[test]
fn day_view_is_the_anchor_only() {
    assert_eq!(visible_days(d(2024, 2, 29), ViewMode::Day), vec![d(2024, 2, 29)]);
}

#[test]
fn month_view_covers_whole_weeks() {
    let january = visible_days(d(2024, 1, 17), ViewMode::Month);
    assert_eq!(january.first(), Some(&d(2024, 1, 1)));
    assert_eq!(january.last(), Some(&d(2024, 2, 4)));
    assert_eq!(january.len() % 7, 0);

    let february = visible_days(d(2024, 2, 10), ViewMode::Month);
    assert_eq!(february.first(), Some(&d(2024, 1, 29)));
    assert_eq!(february.last(), Some(&d(2024, 3, 3)));
    assert_eq!(february.len(), 35);
}

#[test]
fn stepping_moves_one_view_length() {
    assert_eq!(grid::step(d(2024, 1, 15), ViewMode::Day, true), d(2024, 1, 16));
    assert_eq!(grid::step(d(2024, 1, 1), ViewMode::Day, false), d(2023, 12, 31));
    assert_eq!(grid::step(d(2024, 1, 15), ViewMode::Week, true), d(2024, 1, 22));
    assert_eq!(grid::step(d(2024, 1, 15), ViewMode::Week, false), d(2024, 1, 8));
}

#[test]
fn month_step_clamps_to_shorter_month() {
    assert_eq!(grid::step(d(2024, 1, 31), ViewMode::Month, true), d(2024, 2, 29));
    assert_eq!(grid::step(d(2023, 1, 31), ViewMode::Month, true), d(2023, 2, 28));
    assert_eq!(grid::step(d(2024, 3, 31), ViewMode::Month, false), d(2024, 2, 29));
}

#[test]
fn grid_days_carry_weekend_holiday_and_month_flags() {
    let cal = WorkCalendar::default();
    let days = build_grid_days(d(2024, 5, 15), ViewMode::Month, &cal);

    let national_day = days.iter().find(|day| day.date == d(2024, 5, 17)).unwrap();
    assert_eq!(national_day.holiday.as_deref(), Some("Grunnlovsdag"));
    assert!(!national_day.is_weekend);

    let saturday = days.iter().find(|day| day.date == d(2024, 5, 18)).unwrap();
    assert!(saturday.is_weekend);
    assert_eq!(saturday.weekday, Weekday::Sat);

    // May 2024 starts on a Wednesday, so the view borrows April 29-30.
    assert!(!days[0].in_anchor_month);
    assert_eq!(days[0].date, d(2024, 4, 29));
    assert!(days.iter().filter(|day| day.in_anchor_month).count() == 31);
}

#[test]
fn view_mode_parses_labels() {
    assert_eq!("MONTH".parse::<ViewMode>().unwrap(), ViewMode::Month);
    assert_eq!(ViewMode::default(), ViewMode::Week);
    let err = "year".parse::<ViewMode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown ViewMode 'year'");
}

#[test]
fn week_view_holds_across_year_ends_and_leap_days() {
    // Covers Feb 29 2020, ISO week 53 of 2020 and two year ends.
    for anchor in d(2019, 12, 20).iter_days().take_while(|day| *day <= d(2021, 3, 10)) {
        let days = visible_days(anchor, ViewMode::Week);
        assert_eq!(days.len(), 7, "week of {anchor}");
        assert_eq!(days[0].weekday(), Weekday::Mon, "week of {anchor}");
        assert!(days[0] <= anchor && anchor <= days[6], "week of {anchor}");
        assert!(days.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));
        assert!(days.iter().all(|day| day.iso_week() == anchor.iso_week()));
    }
}

#[test]
fn month_view_is_whole_weeks_covering_every_day_of_the_month() {
    let mut anchor = d(2019, 12, 1);
    while anchor <= d(2021, 3, 1) {
        let days = visible_days(anchor, ViewMode::Month);
        assert_eq!(days.len() % 7, 0, "month of {anchor}");
        assert_eq!(days[0].weekday(), Weekday::Mon, "month of {anchor}");
        assert_eq!(days[days.len() - 1].weekday(), Weekday::Sun, "month of {anchor}");
        assert!(days.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));
        let in_month = days
            .iter()
            .filter(|day| day.year() == anchor.year() && day.month() == anchor.month())
            .count();
        let month_len = grid::step(anchor, ViewMode::Month, true)
            .signed_duration_since(anchor)
            .num_days();
        assert_eq!(in_month as i64, month_len, "month of {anchor}");
        anchor = grid::step(anchor, ViewMode::Month, true);
    }
}

#[test]
fn views_at_the_ends_of_the_date_range_do_not_panic() {
    for mode in [ViewMode::Day, ViewMode::Week, ViewMode::Month] {
        let last = visible_days(NaiveDate::MAX, mode);
        assert_eq!(last.last(), Some(&NaiveDate::MAX), "{mode} at MAX");
        let first = visible_days(NaiveDate::MIN, mode);
        assert_eq!(first.first(), Some(&NaiveDate::MIN), "{mode} at MIN");
    }

    let week = visible_days(NaiveDate::MAX, ViewMode::Week);
    assert!(!week.is_empty() && week.len() <= 7);
    assert!(week.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));

    let grid_days = build_grid_days(NaiveDate::MAX, ViewMode::Month, &WorkCalendar::default());
    assert_eq!(grid_days.last().map(|day| day.date), Some(NaiveDate::MAX));
}

#[test]
fn steps_past_the_date_range_keep_the_anchor() {
    for mode in [ViewMode::Day, ViewMode::Week, ViewMode::Month] {
        assert_eq!(grid::step(NaiveDate::MAX, mode, true), NaiveDate::MAX);
        assert_eq!(grid::step(NaiveDate::MIN, mode, false), NaiveDate::MIN);
    }
    assert_eq!(grid::step(d(2024, 1, 3), ViewMode::Week, false), d(2023, 12, 27));
}

#[test]
fn grid_holidays_match_single_day_lookups() {
    let mut calendar = WorkCalendar::default();
    calendar.add_holiday(d(2024, 12, 27), "Company closure");
    calendar.add_holiday(d(2025, 1, 1), "Closed for inventory");
    for day in build_grid_days(d(2024, 12, 31), ViewMode::Month, &calendar) {
        assert_eq!(day.holiday, calendar.holiday_name(day.date), "{}", day.date);
    }
    let january = build_grid_days(d(2025, 1, 1), ViewMode::Week, &calendar);
    assert_eq!(january[2].holiday.as_deref(), Some("Closed for inventory"));
}
