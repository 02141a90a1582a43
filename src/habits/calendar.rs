use crate::habits::models::HabitData;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A (year, month) pair with the month 0-indexed, matching the persisted
/// date keys' calendar and the query-string representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month0: u32,
}

impl MonthRef {
    /// Normalizes an out-of-range month into the following years.
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year: year + (month0 / 12) as i32,
            month0: month0 % 12,
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    pub fn label(self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month0 % 12) as usize], self.year)
    }
}

#[derive(Debug, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: String,
    pub completed_count: usize,
    pub total_habits: usize,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month0: u32,
    pub label: String,
    /// Blank cells before day 1, i.e. the weekday of day 1 with Sunday = 0.
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

/// Builds the calendar grid for one month. Read-only over the model: days
/// without a record read as zero completions and no record is created.
/// `selected` is `None` when the caller has no selection to highlight.
pub fn month_grid(
    data: &HabitData,
    month: MonthRef,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> MonthGrid {
    let Some(first) = month.first_day() else {
        // Years outside chrono's range render as an empty month.
        return MonthGrid {
            year: month.year,
            month0: month.month0,
            label: month.label(),
            leading_blanks: 0,
            cells: Vec::new(),
        };
    };

    // Last day of this month is the day before the first of the next.
    let days_in_month = match month.next().first_day() {
        Some(next_first) => (next_first - Duration::days(1)).day(),
        None => 0,
    };

    let mut cells = Vec::with_capacity(days_in_month as usize);
    for day in 1..=days_in_month {
        let date = first + Duration::days(i64::from(day) - 1);
        let key = date_key(date);
        let (completed_count, total_habits) = data.completion_summary(&key);
        cells.push(DayCell {
            day,
            date: key,
            completed_count,
            total_habits,
            is_today: date == today,
            is_selected: selected == Some(date),
        });
    }

    MonthGrid {
        year: month.year,
        month0: month.month0,
        label: month.label(),
        leading_blanks: first.weekday().num_days_from_sunday(),
        cells,
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}
