//! Sales-and-prediction timeline report

use crate::backfill::backfill_zero_sales;
use crate::pivot::{pivot_sales, Bucket, Dimension, PivotTable};
use chrono::NaiveDate;
use sales_data::SalesRecord;
use serde::Serialize;

/// Daily per-product sales with the trailing forecast segment measured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionTimeline {
    /// One row per date, one column per product, dates ascending
    pub table: PivotTable,
    /// Number of trailing rows dated after the most recent observed date
    pub num_predicted_dates: usize,
}

/// Build the predicted-versus-actual line source.
///
/// Every zero or missing sold amount is replaced by its prediction (the
/// global rule, unlike the indicators' future-only rule), then the table
/// pivots to one row per date and one column per product.
/// `num_predicted_dates` counts the rows strictly after the most recent
/// date that is on or before `today`; it is zero when no such date
/// exists.
pub fn prediction_timeline(records: &[SalesRecord], today: NaiveDate) -> PredictionTimeline {
    let filled = backfill_zero_sales(records);
    let table = pivot_sales(&filled, Bucket::Day, Dimension::Product);

    let num_predicted_dates = table
        .rows
        .iter()
        .rposition(|row| row.bucket <= today)
        .map(|index| table.rows.len() - index - 1)
        .unwrap_or(0);

    PredictionTimeline {
        table,
        num_predicted_dates,
    }
}
