use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Working-day calendar: weekly days off plus Norwegian public holidays and
/// any company-specific closures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkCalendar {
    extra_holidays: BTreeMap<NaiveDate, String>,
    non_working_days: HashSet<Weekday>,
    public_holidays: bool,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self {
            extra_holidays: BTreeMap::new(),
            non_working_days: HashSet::from([Weekday::Sat, Weekday::Sun]),
            public_holidays: true,
        }
    }
}

impl WorkCalendar {
    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Calendar with no public holidays; only weekly days off and added closures apply.
    pub fn without_public_holidays() -> Self {
        Self {
            public_holidays: false,
            ..Self::default()
        }
    }

    /// Easter Sunday (anonymous Gregorian algorithm).
    pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
        let a = year.rem_euclid(19);
        let b = year.div_euclid(100);
        let c = year.rem_euclid(100);
        let d = b / 4;
        let e = b % 4;
        let f = (b + 8) / 25;
        let g = (b - f + 1) / 3;
        let h = (19 * a + b - d - g + 15).rem_euclid(30);
        let i = c / 4;
        let k = c % 4;
        let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
        let m = (a + 11 * h + 22 * l) / 451;
        let month = (h + l - 7 * m + 114) / 31;
        let day = (h + l - 7 * m + 114) % 31 + 1;
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    }

    /// Norwegian public holidays (helligdager) for a year, in date order.
    pub fn public_holidays(year: i32) -> Vec<(NaiveDate, &'static str)> {
        let mut holidays: Vec<(NaiveDate, &'static str)> = [
            (NaiveDate::from_ymd_opt(year, 1, 1), "Nyttårsdag"),
            (NaiveDate::from_ymd_opt(year, 5, 1), "Arbeidernes dag"),
            (NaiveDate::from_ymd_opt(year, 5, 17), "Grunnlovsdag"),
            (NaiveDate::from_ymd_opt(year, 12, 25), "Første juledag"),
            (NaiveDate::from_ymd_opt(year, 12, 26), "Andre juledag"),
        ]
        .into_iter()
        .filter_map(|(date, name)| date.map(|d| (d, name)))
        .collect();

        if let Some(easter) = Self::easter_sunday(year) {
            let movable = [
                (-3, "Skjærtorsdag"),
                (-2, "Langfredag"),
                (0, "Første påskedag"),
                (1, "Andre påskedag"),
                (39, "Kristi himmelfartsdag"),
                (49, "Første pinsedag"),
                (50, "Andre pinsedag"),
            ];
            holidays.extend(
                movable
                    .into_iter()
                    .filter_map(|(offset, name)| {
                        easter.checked_add_signed(Duration::days(offset)).map(|d| (d, name))
                    }),
            );
        }

        holidays.sort_by_key(|(date, _)| *date);
        holidays
    }

    /// Add a company closure day.
    pub fn add_holiday(&mut self, date: NaiveDate, name: impl Into<String>) {
        self.extra_holidays.insert(date, name.into());
    }

    /// Weekdays not listed become days off.
    pub fn set_working_days(&mut self, days: &[Weekday]) {
        self.non_working_days.clear();
        for day in Self::ALL_WEEKDAYS {
            if !days.contains(&day) {
                self.non_working_days.insert(day);
            }
        }
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.non_working_days.contains(&date.weekday())
    }

    pub fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        if let Some(name) = self.extra_holidays.get(&date) {
            return Some(name.clone());
        }
        if !self.public_holidays {
            return None;
        }
        Self::public_holidays(date.year())
            .into_iter()
            .find(|(day, _)| *day == date)
            .map(|(_, name)| name.to_string())
    }

    /// Named days off from `start` through `end`. Public holidays are computed
    /// once per year touched; company closures win on a shared date.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, String> {
        let mut holidays = BTreeMap::new();
        if start > end {
            return holidays;
        }
        if self.public_holidays {
            for year in start.year()..=end.year() {
                holidays.extend(
                    Self::public_holidays(year)
                        .into_iter()
                        .filter(|(day, _)| (start..=end).contains(day))
                        .map(|(day, name)| (day, name.to_string())),
                );
            }
        }
        holidays.extend(
            self.extra_holidays
                .range(start..=end)
                .map(|(day, name)| (*day, name.clone())),
        );
        holidays
    }

    /// Not a weekly day off and not a holiday.
    pub fn is_available(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && self.holiday_name(date).is_none()
    }

    /// Working days from `start` through `end`, both inclusive.
    pub fn count_available_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let holidays = self.holidays_between(start, end);
        std::iter::successors(Some(start), |day| day.succ_opt())
            .take_while(|day| *day <= end)
            .filter(|day| !self.is_weekend(*day) && !holidays.contains_key(day))
            .count() as i64
    }
}
