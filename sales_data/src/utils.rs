//! Utility functions for sales tables
//!
//! Contains the synthetic fixture generator used by the demo driver and
//! the tests, plus CSV load/store helpers for persisting a table.

use crate::{SalesError, SalesRecord};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use std::path::Path;

/// Product labels used by the fixture generator.
pub const FIXTURE_PRODUCTS: [&str; 4] = ["Product A", "Product B", "Product C", "Product D"];

/// Region labels used by the fixture generator.
pub const FIXTURE_REGIONS: [&str; 4] = ["Region 1", "Region 2", "Region 3", "Region 4"];

/// Number of 30-day forecast rows appended after the daily range.
const FUTURE_MONTHS: usize = 6;

/// Generate a synthetic sales table.
///
/// Produces one to five rows per product for each of the `num_days` days
/// leading up to (and excluding) `reference_date`, then appends six
/// monthly forecast-only rows per product and region, stepped 30 days
/// apart, whose `amount_sold` is absent.
///
/// # Arguments
/// * `num_days` - Number of daily history days to generate
/// * `reference_date` - The "today" the table is anchored on
///
/// # Returns
/// * Vector of `SalesRecord` rows, dates ascending
pub fn generate_sales_data(num_days: usize, reference_date: NaiveDate) -> Vec<SalesRecord> {
    generate_with_rng(num_days, reference_date, &mut thread_rng())
}

/// Deterministic variant of [`generate_sales_data`] for tests.
pub fn generate_sales_data_seeded(
    num_days: usize,
    reference_date: NaiveDate,
    seed: u64,
) -> Vec<SalesRecord> {
    generate_with_rng(num_days, reference_date, &mut StdRng::seed_from_u64(seed))
}

fn generate_with_rng<R: Rng>(
    num_days: usize,
    reference_date: NaiveDate,
    rng: &mut R,
) -> Vec<SalesRecord> {
    let mut records = Vec::new();
    let start_date = reference_date - Duration::days(num_days as i64);

    // Daily history: one to five sales lines per product and day.
    for day in 0..num_days {
        let date = start_date + Duration::days(day as i64);

        for product in FIXTURE_PRODUCTS {
            let num_lines = rng.gen_range(1..=5);

            for _ in 0..num_lines {
                let region = FIXTURE_REGIONS[rng.gen_range(0..FIXTURE_REGIONS.len())];
                records.push(SalesRecord::new(
                    date,
                    product,
                    region,
                    Some(rng.gen_range(100..=1000) as f64),
                    rng.gen_range(50..=900) as f64,
                ));
            }
        }
    }

    // Forecast tail: six monthly steps of predictions with no realized
    // sales yet, one row per product and region.
    let mut future_date = reference_date - Duration::days(1);
    for _ in 0..FUTURE_MONTHS {
        future_date += Duration::days(30);

        for product in FIXTURE_PRODUCTS {
            for region in FIXTURE_REGIONS {
                records.push(SalesRecord::new(
                    future_date,
                    product,
                    region,
                    None,
                    rng.gen_range(50..=900) as f64,
                ));
            }
        }
    }

    records
}

/// Normalize a table by replacing absent sold amounts with zero.
///
/// Value-returning; the input table is untouched. Useful before passes
/// that treat "no sale" and "zero sale" identically.
pub fn fill_missing_sales(records: &[SalesRecord]) -> Vec<SalesRecord> {
    records
        .iter()
        .cloned()
        .map(|mut record| {
            record.amount_sold = Some(record.sold_or_zero());
            record
        })
        .collect()
}

/// Load a sales table from a CSV file.
///
/// The expected CSV format is:
/// date,product,region,amount_sold,amount_predicted
/// 2024-05-01,Product A,Region 1,420,380
///
/// An empty `amount_sold` field marks a forecast-only row.
pub fn load_sales_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SalesRecord>, SalesError> {
    let mut reader = csv::Reader::from_path(&path)
        .map_err(|e| SalesError::DataLoad(format!("failed to open CSV: {}", e)))?;

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<SalesRecord>().enumerate() {
        let record =
            row.map_err(|e| SalesError::DataLoad(format!("invalid row {}: {}", i + 1, e)))?;
        records.push(record);
    }

    Ok(records)
}

/// Write a sales table to a CSV file.
pub fn write_sales_csv<P: AsRef<Path>>(
    path: P,
    records: &[SalesRecord],
) -> Result<(), SalesError> {
    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| SalesError::DataLoad(format!("failed to create CSV: {}", e)))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| SalesError::DataLoad(format!("failed to write row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| SalesError::DataLoad(format!("failed to flush CSV: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_records;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generated_fixture_shape() {
        let today = date(2024, 5, 15);
        let records = generate_sales_data_seeded(10, today, 1);

        // Daily rows: 10 days x 4 products x 1..=5 lines each.
        let daily: Vec<_> = records.iter().filter(|r| r.date < today).collect();
        assert!(daily.len() >= 10 * 4);
        assert!(daily.len() <= 10 * 4 * 5);
        assert!(daily.iter().all(|r| r.amount_sold.is_some()));

        // Forecast tail: 6 months x 4 products x 4 regions, all missing sales.
        let future: Vec<_> = records.iter().filter(|r| r.date > today).collect();
        assert_eq!(future.len(), 6 * 4 * 4);
        assert!(future.iter().all(|r| r.amount_sold.is_none()));

        validate_records(&records, today).unwrap();
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let today = date(2024, 5, 15);
        let a = generate_sales_data_seeded(20, today, 99);
        let b = generate_sales_data_seeded(20, today, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_missing_sales() {
        let records = vec![
            SalesRecord::new(date(2024, 6, 1), "Product A", "Region 1", None, 80.0),
            SalesRecord::new(date(2024, 5, 1), "Product A", "Region 1", Some(100.0), 80.0),
        ];

        let filled = fill_missing_sales(&records);
        assert_eq!(filled[0].amount_sold, Some(0.0));
        assert_eq!(filled[1].amount_sold, Some(100.0));
        // The input table is untouched.
        assert_eq!(records[0].amount_sold, None);
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");

        let records = vec![
            SalesRecord::new(date(2024, 5, 1), "Product A", "Region 1", Some(420.0), 380.0),
            SalesRecord::new(date(2024, 7, 1), "Product B", "Region 2", None, 250.0),
        ];

        write_sales_csv(&path, &records).unwrap();
        let loaded = load_sales_csv(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_rejects_malformed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(
            &path,
            "date,product,region,amount_sold,amount_predicted\nnot-a-date,Product A,Region 1,10,20\n",
        )
        .unwrap();

        let err = load_sales_csv(&path).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
