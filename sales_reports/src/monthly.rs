//! Monthly aggregation builders
//!
//! Month buckets follow the calendar month and are labeled by their last
//! day. Builders that span a date range emit every month in it, so a
//! month with no sales shows up as zero instead of disappearing.

use crate::calendar::{month_range, MonthBucket};
use crate::pivot::{pivot_sales, Bucket, Dimension, PivotTable};
use chrono::{Datelike, NaiveDate};
use sales_data::SalesRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Month row labels, January through December.
pub const MONTH_NAMES: [&str; 12] = [
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

/// One month row of the year-by-year comparison: the month name plus one
/// total per year column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthByYearRow {
    pub month: String,
    /// Year label (e.g. "2024") -> total sales that month
    #[serde(flatten)]
    pub totals: BTreeMap<String, f64>,
}

/// Total sales per calendar month, one year column per year present.
///
/// Always emits twelve rows, January through December in calendar order
/// regardless of input order, with missing cells zero-filled. Years
/// beyond `today`'s year are dropped.
pub fn sales_per_month_by_year(records: &[SalesRecord], today: NaiveDate) -> Vec<MonthByYearRow> {
    let mut years: BTreeSet<i32> = BTreeSet::new();
    let mut cells: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for record in records {
        let year = record.date.year();
        if year > today.year() {
            continue;
        }

        years.insert(year);
        *cells.entry((year, record.date.month())).or_insert(0.0) += record.sold_or_zero();
    }

    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let month = index as u32 + 1;
            let totals = years
                .iter()
                .map(|&year| {
                    let total = cells.get(&(year, month)).copied().unwrap_or(0.0);
                    (year.to_string(), total)
                })
                .collect();

            MonthByYearRow {
                month: name.to_string(),
                totals,
            }
        })
        .collect()
}

/// Per-product sales summed by month.
///
/// Only rows with a positive realized sale participate; gap months show
/// as all-zero rows.
pub fn monthly_product_breakdown(records: &[SalesRecord]) -> PivotTable {
    let positive: Vec<SalesRecord> = records
        .iter()
        .filter(|r| r.sold_or_zero() > 0.0)
        .cloned()
        .collect();

    pivot_sales(&positive, Bucket::Month, Dimension::Product).fill_month_gaps()
}

/// Total sales for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotal {
    /// Month-end date as `%Y-%m-%d`
    pub month: String,
    pub total: f64,
}

/// Total sales per month, discarding months that end after `today`.
///
/// The current month is still open and therefore excluded; forecast-only
/// future months never appear.
pub fn monthly_totals(records: &[SalesRecord], today: NaiveDate) -> Vec<MonthTotal> {
    let mut totals: BTreeMap<MonthBucket, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(MonthBucket::of(record.date)).or_insert(0.0) += record.sold_or_zero();
    }

    let (first, last) = match (totals.keys().next(), totals.keys().last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Vec::new(),
    };

    month_range(first, last)
        .into_iter()
        .filter(|bucket| bucket.end_date() <= today)
        .map(|bucket| MonthTotal {
            month: bucket.label(),
            total: totals.get(&bucket).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Running total of monthly sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativeMonth {
    /// Month-end date as `%Y-%m-%d`
    pub month: String,
    pub cumulative_total: f64,
}

/// Cumulative monthly sales from the earliest month with a positive sale.
///
/// Only positive realized sales feed the running sum, so the series is
/// monotonically non-decreasing; a gap month repeats the previous total.
pub fn cumulative_monthly_sales(records: &[SalesRecord]) -> Vec<CumulativeMonth> {
    let mut totals: BTreeMap<MonthBucket, f64> = BTreeMap::new();
    for record in records.iter().filter(|r| r.sold_or_zero() > 0.0) {
        *totals.entry(MonthBucket::of(record.date)).or_insert(0.0) += record.sold_or_zero();
    }

    let (first, last) = match (totals.keys().next(), totals.keys().last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Vec::new(),
    };

    let mut running = 0.0;
    month_range(first, last)
        .into_iter()
        .map(|bucket| {
            running += totals.get(&bucket).copied().unwrap_or(0.0);
            CumulativeMonth {
                month: bucket.label(),
                cumulative_total: running,
            }
        })
        .collect()
}
