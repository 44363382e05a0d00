//! Parameterized long-to-wide pivot core
//!
//! One reshaper covers the whole family of bucket-by-time,
//! group-by-category sums: pick a [`Bucket`] granularity and a
//! [`Dimension`], get back a [`PivotTable`] with sorted dynamic columns
//! and zero-filled cells. The concrete report builders are thin
//! configurations of this.

use crate::calendar::{MonthBucket, WeekWindow};
use crate::error::{ReportError, Result};
use chrono::NaiveDate;
use sales_data::SalesRecord;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Column name used when pivoting without a grouping dimension.
pub const TOTAL_COLUMN: &str = "total";

/// Time granularity of pivot rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// One row per calendar day
    Day,
    /// One row per Monday-aligned week
    Week,
    /// One row per calendar month
    Month,
}

impl Bucket {
    /// Canonical bucket date for a row: the day itself, the Monday of
    /// its week, or the last day of its month.
    pub fn key(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Bucket::Day => date,
            Bucket::Week => WeekWindow::containing(date).start,
            Bucket::Month => MonthBucket::of(date).end_date(),
        }
    }
}

/// Category dimension spread across pivot columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// One column per product
    Product,
    /// One column per region
    Region,
    /// A single aggregate column
    None,
}

/// One wide-format row: a bucket date plus one summed measure per
/// category column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotRow {
    pub bucket: NaiveDate,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl PivotRow {
    fn zeroed(bucket: NaiveDate, columns: &[String]) -> Self {
        Self {
            bucket,
            values: columns.iter().map(|c| (c.clone(), 0.0)).collect(),
        }
    }
}

/// A bucket-by-category table of summed sales, rows ascending by bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotTable {
    /// Category column names, sorted
    pub columns: Vec<String>,
    pub rows: Vec<PivotRow>,
}

/// Pivot a sales table: bucket rows by `bucket`, spread `dimension`
/// across columns, and sum `amount_sold` into the cells.
///
/// Missing bucket/category combinations are filled with zero. Absent
/// sold amounts count as zero; apply a backfill pass first if predicted
/// values should stand in for them.
pub fn pivot_sales(records: &[SalesRecord], bucket: Bucket, dimension: Dimension) -> PivotTable {
    let mut cells: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();
    let mut columns: BTreeSet<String> = BTreeSet::new();

    for record in records {
        let key = bucket.key(record.date);
        let column = match dimension {
            Dimension::Product => record.product.as_str(),
            Dimension::Region => record.region.as_str(),
            Dimension::None => TOTAL_COLUMN,
        };

        columns.insert(column.to_string());
        *cells
            .entry(key)
            .or_default()
            .entry(column.to_string())
            .or_insert(0.0) += record.sold_or_zero();
    }

    let columns: Vec<String> = columns.into_iter().collect();
    let rows = cells
        .into_iter()
        .map(|(bucket, mut values)| {
            for column in &columns {
                values.entry(column.clone()).or_insert(0.0);
            }
            PivotRow { bucket, values }
        })
        .collect();

    PivotTable { columns, rows }
}

impl PivotTable {
    /// Insert all-zero rows for month-end buckets missing between the
    /// first and last row.
    ///
    /// Only meaningful for month-bucketed tables, where a gap month is a
    /// real calendar month with no sales.
    pub fn fill_month_gaps(mut self) -> Self {
        let (first, last) = match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => (
                MonthBucket::of(first.bucket),
                MonthBucket::of(last.bucket),
            ),
            _ => return self,
        };

        let present: BTreeSet<NaiveDate> = self.rows.iter().map(|r| r.bucket).collect();
        for month in crate::calendar::month_range(first, last) {
            let end = month.end_date();
            if !present.contains(&end) {
                self.rows.push(PivotRow::zeroed(end, &self.columns));
            }
        }

        self.rows.sort_by_key(|row| row.bucket);
        self
    }

    /// Sum of every cell in the table.
    pub fn total(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.values.values())
            .sum()
    }

    /// Flatten the table into one JSON record per row, with the bucket
    /// date under `bucket_key` and one numeric entry per column.
    ///
    /// This is the shape handed to a rendering sink: stable string keys,
    /// primitive values.
    pub fn to_records(&self, bucket_key: &str) -> Result<Vec<Map<String, Value>>> {
        let mut records = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let mut record = Map::new();
            record.insert(
                bucket_key.to_string(),
                Value::String(row.bucket.to_string()),
            );

            for (column, value) in &row.values {
                let number = Number::from_f64(*value).ok_or_else(|| {
                    ReportError::Data(format!(
                        "non-finite total {} in column '{}'",
                        value, column
                    ))
                })?;
                record.insert(column.clone(), Value::Number(number));
            }

            records.push(record);
        }

        Ok(records)
    }
}
