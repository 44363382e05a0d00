//! # Sales Reports
//!
//! A Rust library for aggregating a flat sales table into the tabular
//! views a dashboard renders: weekly comparisons, per-product
//! indicators, regional percentages, prediction timelines, monthly
//! pivots, and cumulative series.
//!
//! ## Features
//!
//! - Monday-aligned week windows derived from an explicit reference date
//! - Two distinct backfill passes substituting predictions for missing
//!   sales (future-only and global)
//! - A parameterized pivot core (day/week/month buckets crossed with
//!   product/region columns) behind the concrete builders
//! - Pure, value-returning transformations; the caller's table is never
//!   mutated
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use sales_data::SalesRecord;
//! use sales_reports::{sales_percentage_by_region, weekly_comparison};
//!
//! // 2024-05-15 is a Wednesday; its week runs 13/05 through 19/05.
//! let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
//! let records = vec![
//!     SalesRecord::new(today, "Product A", "Region 1", Some(100.0), 80.0),
//!     SalesRecord::new(today - chrono::Duration::days(7), "Product A", "Region 1", Some(50.0), 80.0),
//! ];
//!
//! let weekly = weekly_comparison(&records, today);
//! assert_eq!(weekly.rows[0].total, 50.0);
//! assert_eq!(weekly.rows[1].total, 100.0);
//!
//! let shares = sales_percentage_by_region(&records);
//! assert_eq!(shares[0].percentage, 100.0);
//! ```

pub mod backfill;
pub mod calendar;
pub mod dashboard;
pub mod error;
pub mod monthly;
pub mod pivot;
pub mod regional;
pub mod timeline;
pub mod weekly;

// Re-export commonly used types
pub use crate::backfill::{backfill_future_sales, backfill_zero_sales};
pub use crate::calendar::{MonthBucket, WeekPair, WeekWindow};
pub use crate::dashboard::{build_dashboard, DashboardFeed};
pub use crate::error::{ReportError, Result};
pub use crate::monthly::{
    cumulative_monthly_sales, monthly_product_breakdown, monthly_totals, sales_per_month_by_year,
};
pub use crate::pivot::{pivot_sales, Bucket, Dimension, PivotTable};
pub use crate::regional::{regional_timelines, sales_percentage_by_region};
pub use crate::timeline::prediction_timeline;
pub use crate::weekly::{product_indicators, weekly_comparison};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
