//! Backfill passes substituting predictions for missing sales
//!
//! Two distinct rules exist and both are kept: the future-only rule used
//! by the weekly indicators, and the global rule used by the prediction
//! timeline. Both passes are value-returning and idempotent; the caller's
//! table is never mutated.

use chrono::NaiveDate;
use sales_data::SalesRecord;

/// Replace a missing or zero sold amount with the predicted amount on
/// rows dated strictly after `today`.
///
/// Past rows are untouched even when their sold amount is zero. Must run
/// before any sum that mixes past and future rows, so forecast-only rows
/// do not depress the totals.
pub fn backfill_future_sales(records: &[SalesRecord], today: NaiveDate) -> Vec<SalesRecord> {
    records
        .iter()
        .cloned()
        .map(|mut record| {
            if record.date > today && !record.has_sales() {
                record.amount_sold = Some(record.amount_predicted);
            }
            record
        })
        .collect()
}

/// Replace a missing or zero sold amount with the predicted amount on
/// every row, regardless of date.
pub fn backfill_zero_sales(records: &[SalesRecord]) -> Vec<SalesRecord> {
    records
        .iter()
        .cloned()
        .map(|mut record| {
            if !record.has_sales() {
                record.amount_sold = Some(record.amount_predicted);
            }
            record
        })
        .collect()
}
