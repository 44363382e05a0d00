//! Regional share and per-region timeline reports

use crate::pivot::{pivot_sales, Bucket, Dimension, PivotTable};
use sales_data::SalesRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// A region's share of total sales, pie-chart style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionShare {
    pub region: String,
    /// Share of the grand total, rounded to three decimals
    pub percentage: f64,
}

/// Percentage of total sales per region, sorted by region name.
///
/// All rows participate unfiltered; absent sold amounts count as zero.
/// When the grand total is zero every region reads 0% instead of
/// dividing by zero.
pub fn sales_percentage_by_region(records: &[SalesRecord]) -> Vec<RegionShare> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    let mut grand_total = 0.0;

    for record in records {
        let sold = record.sold_or_zero();
        *totals.entry(record.region.clone()).or_insert(0.0) += sold;
        grand_total += sold;
    }

    totals
        .into_iter()
        .map(|(region, total)| RegionShare {
            region,
            percentage: if grand_total > 0.0 {
                round3(total / grand_total * 100.0)
            } else {
                0.0
            },
        })
        .collect()
}

/// One month-by-product pivot per region, keyed by region name.
///
/// Feeds the per-region tabs of the dashboard; gap months inside a
/// region's range appear as all-zero rows.
pub fn regional_timelines(records: &[SalesRecord]) -> BTreeMap<String, PivotTable> {
    let mut by_region: BTreeMap<String, Vec<SalesRecord>> = BTreeMap::new();
    for record in records {
        by_region
            .entry(record.region.clone())
            .or_default()
            .push(record.clone());
    }

    by_region
        .into_iter()
        .map(|(region, rows)| {
            let table = pivot_sales(&rows, Bucket::Month, Dimension::Product).fill_month_gaps();
            (region, table)
        })
        .collect()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
