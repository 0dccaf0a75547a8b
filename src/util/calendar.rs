//! Month grid math for the date picker.
//!
//! DESIGN
//! ======
//! The grid is always 6 rows of 7 days starting on Sunday, padded with the
//! trailing days of the previous month and the leading days of the next, so
//! the picker never changes height between months.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::macros::format_description;
use time::{Date, Duration};

pub const GRID_DAYS: usize = 42;
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: Date,
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// The month currently shown by the picker, anchored on its first day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    first: Date,
}

impl MonthView {
    #[must_use]
    pub fn containing(date: Date) -> Self {
        Self { first: first_of_month(date) }
    }

    #[must_use]
    pub fn first_day(self) -> Date {
        self.first
    }

    #[must_use]
    pub fn next(self) -> Self {
        // Day 1 plus 31 days always lands in the following month.
        Self::containing(self.first.saturating_add(Duration::days(31)))
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::containing(self.first.saturating_sub(Duration::days(1)))
    }

    #[must_use]
    pub fn title(self) -> String {
        format!("{} {}", self.first.month(), self.first.year())
    }

    #[must_use]
    pub fn grid(self, today: Date, selected: Option<Date>) -> Vec<CalendarDay> {
        let lead = i64::from(self.first.weekday().number_days_from_sunday());
        let start = self.first.saturating_sub(Duration::days(lead));
        (0_i64..)
            .take(GRID_DAYS)
            .map(|offset| {
                let date = start.saturating_add(Duration::days(offset));
                CalendarDay {
                    date,
                    in_month: date.month() == self.first.month() && date.year() == self.first.year(),
                    is_today: date == today,
                    is_selected: selected == Some(date),
                }
            })
            .collect()
    }
}

fn first_of_month(date: Date) -> Date {
    date.saturating_sub(Duration::days(i64::from(date.day()) - 1))
}

/// `YYYY-MM-DD`, the value format of the picker's hidden input.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}
