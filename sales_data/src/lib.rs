//! # Sales Data
//!
//! `sales_data` provides the flat sales-ledger row type consumed by the
//! reporting engine, along with schema validation, CSV load/store, and a
//! synthetic fixture generator.
//!
//! A table is just a `Vec<SalesRecord>`; there is no storage layer. Rows
//! carry a realized sales amount that may be absent on future-dated rows
//! (forecast-only rows), plus the predicted amount used to backfill it.
//!
//! ## Usage Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sales_data::utils::generate_sales_data_seeded;
//! use sales_data::validate_records;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
//! let records = generate_sales_data_seeded(30, today, 42);
//!
//! // Every generated row satisfies the schema for the same reference date.
//! validate_records(&records, today).unwrap();
//! assert!(records.iter().any(|r| r.amount_sold.is_none()));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Fixture generation and CSV helpers
pub mod utils;

/// Errors that can occur when loading or validating sales tables
#[derive(Error, Debug)]
pub enum SalesError {
    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Data load error: {0}")]
    DataLoad(String),
}

/// A single sales ledger row.
///
/// `amount_sold` is `None` on forecast-only rows (dates after the
/// reference date where no sale has been realized yet); downstream
/// backfill passes substitute `amount_predicted` for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Calendar date of the sale
    pub date: NaiveDate,
    /// Product label
    pub product: String,
    /// Region label
    pub region: String,
    /// Realized sales amount, absent on future rows
    pub amount_sold: Option<f64>,
    /// Predicted sales amount
    pub amount_predicted: f64,
}

impl SalesRecord {
    /// Build a record from its parts.
    pub fn new(
        date: NaiveDate,
        product: impl Into<String>,
        region: impl Into<String>,
        amount_sold: Option<f64>,
        amount_predicted: f64,
    ) -> Self {
        Self {
            date,
            product: product.into(),
            region: region.into(),
            amount_sold,
            amount_predicted,
        }
    }

    /// Realized sales amount, treating an absent value as zero.
    pub fn sold_or_zero(&self) -> f64 {
        self.amount_sold.unwrap_or(0.0)
    }

    /// Whether the row carries a nonzero realized sale.
    pub fn has_sales(&self) -> bool {
        self.sold_or_zero() != 0.0
    }

    /// Check the row against the schema.
    ///
    /// Amounts must be finite and non-negative, labels non-empty, and a
    /// missing `amount_sold` is only allowed on rows dated strictly after
    /// `reference_date`.
    pub fn validate(&self, reference_date: NaiveDate) -> Result<(), SalesError> {
        if self.product.is_empty() {
            return Err(SalesError::SchemaViolation(format!(
                "record dated {} has an empty product label",
                self.date
            )));
        }

        if self.region.is_empty() {
            return Err(SalesError::SchemaViolation(format!(
                "record dated {} has an empty region label",
                self.date
            )));
        }

        if !self.amount_predicted.is_finite() || self.amount_predicted < 0.0 {
            return Err(SalesError::SchemaViolation(format!(
                "record dated {} has invalid predicted amount {}",
                self.date, self.amount_predicted
            )));
        }

        match self.amount_sold {
            Some(sold) if !sold.is_finite() || sold < 0.0 => {
                Err(SalesError::SchemaViolation(format!(
                    "record dated {} has invalid sold amount {}",
                    self.date, sold
                )))
            }
            None if self.date <= reference_date => Err(SalesError::SchemaViolation(format!(
                "record dated {} is missing its sold amount but is not a future row",
                self.date
            ))),
            _ => Ok(()),
        }
    }
}

/// Validate every row of a table against the schema.
///
/// The reporting engine assumes validated input; callers should run this
/// once per table before handing it to any builder.
pub fn validate_records(
    records: &[SalesRecord],
    reference_date: NaiveDate,
) -> Result<(), SalesError> {
    for (index, record) in records.iter().enumerate() {
        record.validate(reference_date).map_err(|err| {
            SalesError::SchemaViolation(format!("row {}: {}", index, err))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sold_or_zero() {
        let record = SalesRecord::new(date(2024, 5, 1), "Product A", "Region 1", None, 80.0);
        assert_eq!(record.sold_or_zero(), 0.0);
        assert!(!record.has_sales());

        let record = SalesRecord::new(date(2024, 5, 1), "Product A", "Region 1", Some(120.0), 80.0);
        assert_eq!(record.sold_or_zero(), 120.0);
        assert!(record.has_sales());
    }

    #[test]
    fn test_validate_accepts_future_missing_sales() {
        let today = date(2024, 5, 15);
        let record = SalesRecord::new(date(2024, 6, 1), "Product A", "Region 1", None, 80.0);
        assert!(record.validate(today).is_ok());
    }

    #[test]
    fn test_validate_rejects_past_missing_sales() {
        let today = date(2024, 5, 15);
        let record = SalesRecord::new(date(2024, 5, 1), "Product A", "Region 1", None, 80.0);
        assert!(record.validate(today).is_err());
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let today = date(2024, 5, 15);

        let record =
            SalesRecord::new(date(2024, 5, 1), "Product A", "Region 1", Some(-1.0), 80.0);
        assert!(record.validate(today).is_err());

        let record = SalesRecord::new(date(2024, 5, 1), "Product A", "Region 1", Some(1.0), -80.0);
        assert!(record.validate(today).is_err());
    }

    #[test]
    fn test_validate_records_names_the_row() {
        let today = date(2024, 5, 15);
        let records = vec![
            SalesRecord::new(date(2024, 5, 1), "Product A", "Region 1", Some(100.0), 80.0),
            SalesRecord::new(date(2024, 5, 2), "", "Region 1", Some(100.0), 80.0),
        ];

        let err = validate_records(&records, today).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
