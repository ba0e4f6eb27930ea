use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::{mock_time_slots, TimeSlot};

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub selectable: bool,
}

/// A month of the booking calendar, rendered as a Sunday-to-Saturday grid
/// padded with the neighbouring months' days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month header, e.g. "March 2026".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    pub fn next_month(&self) -> MonthView {
        if self.month == 12 {
            MonthView {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthView {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev_month(&self) -> MonthView {
        if self.month == 1 {
            MonthView {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthView {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("MonthView holds a valid year/month")
    }

    fn last_day(&self) -> NaiveDate {
        self.next_month().first_day() - Duration::days(1)
    }

    /// The padded grid for this month. `today` decides selectability, so the
    /// caller supplies the clock.
    pub fn days(&self, today: NaiveDate) -> Vec<CalendarDay> {
        let first = self.first_day();
        let last = self.last_day();
        let grid_start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
        let grid_end = last + Duration::days(6 - last.weekday().num_days_from_sunday() as i64);

        let mut days = Vec::new();
        let mut date = grid_start;
        while date <= grid_end {
            let in_month = date.month() == self.month && date.year() == self.year;
            days.push(CalendarDay {
                date,
                in_month,
                is_today: date == today,
                selectable: in_month && is_selectable(date, today),
            });
            date += Duration::days(1);
        }
        days
    }
}

/// Dates strictly before the current calendar day are disabled. The
/// comparison is by day, not timestamp, so today stays selectable no matter
/// the time of day.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// The bookable subset of the static slot table.
pub fn available_slots() -> Vec<&'static TimeSlot> {
    mock_time_slots().iter().filter(|s| s.available).collect()
}
