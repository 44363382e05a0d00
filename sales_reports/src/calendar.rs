//! Calendar windows and buckets for sales aggregation
//!
//! Week windows are Monday-aligned seven day ranges derived from an
//! explicit reference date; month buckets are calendar months labeled by
//! their last day. Nothing here reads the system clock.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Date format used in week labels and titles.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A Monday-through-Sunday date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    /// First day of the window, always a Monday
    pub start: NaiveDate,
    /// Last day of the window, always a Sunday
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The window containing `date`.
    ///
    /// If `date` is itself a Monday the window starts on it.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// The window immediately preceding this one.
    pub fn previous(&self) -> Self {
        Self {
            start: self.start - Duration::days(7),
            end: self.start - Duration::days(1),
        }
    }

    /// Row-membership predicate for a table's date column.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Human-readable date range, e.g. `13/05/2024 - 19/05/2024`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// The current and previous week windows around a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekPair {
    pub current: WeekWindow,
    pub previous: WeekWindow,
}

impl WeekPair {
    /// Derive both windows from `today`.
    pub fn for_date(today: NaiveDate) -> Self {
        let current = WeekWindow::containing(today);
        Self {
            current,
            previous: current.previous(),
        }
    }
}

/// A calendar month bucket, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
}

impl MonthBucket {
    /// The bucket containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The bucket for the following month.
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Last calendar day of the month.
    pub fn end_date(&self) -> NaiveDate {
        let next = self.succ();
        NaiveDate::from_ymd_opt(next.year, next.month, 1).unwrap() - Duration::days(1)
    }

    /// Bucket label: the month-end date as `%Y-%m-%d`.
    pub fn label(&self) -> String {
        self.end_date().format("%Y-%m-%d").to_string()
    }
}

/// All month buckets from `first` through `last`, inclusive.
pub fn month_range(first: MonthBucket, last: MonthBucket) -> Vec<MonthBucket> {
    let mut buckets = Vec::new();
    let mut bucket = first;
    while bucket <= last {
        buckets.push(bucket);
        bucket = bucket.succ();
    }
    buckets
}
