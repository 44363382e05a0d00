//! Weekly comparison and per-product indicator reports

use crate::backfill::backfill_future_sales;
use crate::calendar::{WeekPair, DATE_FORMAT};
use chrono::NaiveDate;
use sales_data::SalesRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Metric label carried by every weekly product indicator.
pub const WEEKLY_SALES_METRIC: &str = "Weekly sales";

/// One labeled week total, bar-chart style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTotal {
    pub label: String,
    pub total: f64,
}

/// Totals for the previous and current week plus a report title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyComparison {
    /// Previous week first, current week second
    pub rows: Vec<WeekTotal>,
    /// Title embedding the current window's end date
    pub title: String,
}

/// Compare total sales across the previous and current week.
///
/// Rows without a realized sale are dropped, then `amount_sold` is
/// summed inside each Monday-aligned window. Empty windows sum to zero.
pub fn weekly_comparison(records: &[SalesRecord], today: NaiveDate) -> WeeklyComparison {
    let weeks = WeekPair::for_date(today);

    let mut current_total = 0.0;
    let mut previous_total = 0.0;
    for record in records.iter().filter(|r| r.has_sales()) {
        if weeks.current.contains(record.date) {
            current_total += record.sold_or_zero();
        } else if weeks.previous.contains(record.date) {
            previous_total += record.sold_or_zero();
        }
    }

    WeeklyComparison {
        rows: vec![
            WeekTotal {
                label: format!("Previous week {}", weeks.previous.label()),
                total: previous_total,
            },
            WeekTotal {
                label: format!("Current week {}", weeks.current.label()),
                total: current_total,
            },
        ],
        title: format!(
            "Total sales through {}",
            weeks.current.end.format(DATE_FORMAT)
        ),
    }
}

/// Outcome of a sold-versus-predicted comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    /// Sales met or beat the prediction
    Success,
    /// Sales fell short of the prediction
    Error,
}

/// Per-product indicator for the current week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductIndicator {
    pub product: String,
    pub metric_label: String,
    /// Sold minus predicted over the current week
    pub value: f64,
    pub status: IndicatorStatus,
}

/// Build one indicator per product sold or predicted in the current week.
///
/// Future rows inside the window get the future-only backfill first, so
/// their predictions count as sales. Both measures accumulate together,
/// so a product missing one of them reads zero for it. Output is sorted
/// by product name.
pub fn product_indicators(records: &[SalesRecord], today: NaiveDate) -> Vec<ProductIndicator> {
    let records = backfill_future_sales(records, today);
    let week = WeekPair::for_date(today).current;

    // product -> (sold, predicted)
    let mut totals: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for record in records.iter().filter(|r| week.contains(r.date)) {
        let entry = totals.entry(record.product.clone()).or_insert((0.0, 0.0));
        entry.0 += record.sold_or_zero();
        entry.1 += record.amount_predicted;
    }

    totals
        .into_iter()
        .map(|(product, (sold, predicted))| ProductIndicator {
            product,
            metric_label: WEEKLY_SALES_METRIC.to_string(),
            value: sold - predicted,
            status: if sold >= predicted {
                IndicatorStatus::Success
            } else {
                IndicatorStatus::Error
            },
        })
        .collect()
}
