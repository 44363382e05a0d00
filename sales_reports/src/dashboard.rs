//! One-call assembly of every dashboard payload

use crate::error::Result;
use crate::monthly::{
    cumulative_monthly_sales, monthly_product_breakdown, monthly_totals, sales_per_month_by_year,
    CumulativeMonth, MonthByYearRow, MonthTotal,
};
use crate::pivot::PivotTable;
use crate::regional::{regional_timelines, sales_percentage_by_region, RegionShare};
use crate::timeline::{prediction_timeline, PredictionTimeline};
use crate::weekly::{product_indicators, weekly_comparison, ProductIndicator, WeeklyComparison};
use chrono::NaiveDate;
use sales_data::{validate_records, SalesRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Every tabular view the dashboard renders, computed from one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFeed {
    pub weekly: WeeklyComparison,
    pub indicators: Vec<ProductIndicator>,
    pub region_shares: Vec<RegionShare>,
    pub timeline: PredictionTimeline,
    pub month_by_year: Vec<MonthByYearRow>,
    pub product_breakdown: PivotTable,
    pub monthly_totals: Vec<MonthTotal>,
    pub cumulative: Vec<CumulativeMonth>,
    pub regional_timelines: BTreeMap<String, PivotTable>,
}

/// Validate a sales table and run every report against it.
///
/// The builders each receive the caller's table; none of them observes
/// another's backfill, mirroring a driver that hands every task its own
/// copy.
pub fn build_dashboard(records: &[SalesRecord], today: NaiveDate) -> Result<DashboardFeed> {
    validate_records(records, today)?;

    Ok(DashboardFeed {
        weekly: weekly_comparison(records, today),
        indicators: product_indicators(records, today),
        region_shares: sales_percentage_by_region(records),
        timeline: prediction_timeline(records, today),
        month_by_year: sales_per_month_by_year(records, today),
        product_breakdown: monthly_product_breakdown(records),
        monthly_totals: monthly_totals(records, today),
        cumulative: cumulative_monthly_sales(records),
        regional_timelines: regional_timelines(records),
    })
}
