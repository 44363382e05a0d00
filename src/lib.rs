//! # Salesdash
//!
//! Workspace facade for the sales dashboard analytics crates.
//!
//! - [`sales_data`] holds the `SalesRecord` row type, schema validation,
//!   CSV load/store, and the synthetic fixture generator.
//! - [`sales_reports`] holds the aggregation engine: weekly comparisons,
//!   per-product indicators, regional percentages, prediction timelines,
//!   monthly pivots, and cumulative series.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use salesdash_workspace::sales_data::utils::generate_sales_data_seeded;
//! use salesdash_workspace::sales_reports::build_dashboard;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
//! let records = generate_sales_data_seeded(30, today, 7);
//! let feed = build_dashboard(&records, today).unwrap();
//! assert_eq!(feed.weekly.rows.len(), 2);
//! ```

pub use sales_data;
pub use sales_reports;

pub use sales_reports::build_dashboard;
