use chrono::{Datelike, NaiveDate};
use pretty_assertions::assert_eq;
use sales_data::utils::generate_sales_data_seeded;
use sales_data::SalesRecord;
use sales_reports::monthly::MONTH_NAMES;
use sales_reports::{
    cumulative_monthly_sales, monthly_product_breakdown, monthly_totals, sales_per_month_by_year,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(date: NaiveDate, product: &str, sold: f64) -> SalesRecord {
    SalesRecord::new(date, product, "Region 1", Some(sold), 10.0)
}

#[test]
fn month_rows_are_calendar_ordered_regardless_of_input_order() {
    let today = date(2024, 5, 15);
    let records = vec![
        record(date(2024, 11, 2), "Product A", 30.0),
        record(date(2024, 2, 2), "Product A", 10.0),
        record(date(2023, 7, 2), "Product A", 20.0),
    ];

    let rows = sales_per_month_by_year(&records, today);
    assert_eq!(rows.len(), 12);

    let names: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
    assert_eq!(names, MONTH_NAMES.to_vec());

    // Every row carries both year columns, zero-filled.
    assert_eq!(rows[1].totals["2024"], 10.0);
    assert_eq!(rows[1].totals["2023"], 0.0);
    assert_eq!(rows[6].totals["2023"], 20.0);
    assert_eq!(rows[10].totals["2024"], 30.0);
}

#[test]
fn years_beyond_the_current_year_are_dropped() {
    let today = date(2024, 5, 15);
    let records = vec![
        record(date(2024, 3, 1), "Product A", 10.0),
        record(date(2025, 3, 1), "Product A", 999.0),
    ];

    let rows = sales_per_month_by_year(&records, today);
    assert!(rows.iter().all(|r| !r.totals.contains_key("2025")));
    assert_eq!(rows[2].totals["2024"], 10.0);
}

#[test]
fn pivot_cells_sum_to_the_direct_total() {
    let today = date(2024, 5, 15);
    let records = generate_sales_data_seeded(400, today, 3);

    let rows = sales_per_month_by_year(&records, today);
    let pivot_total: f64 = rows.iter().flat_map(|r| r.totals.values()).sum();

    let direct_total: f64 = records
        .iter()
        .filter(|r| r.date.year() <= today.year())
        .map(|r| r.sold_or_zero())
        .sum();

    assert!((pivot_total - direct_total).abs() < 1e-6);
}

#[test]
fn product_breakdown_keeps_only_positive_sales() {
    let records = vec![
        record(date(2024, 1, 5), "Product A", 100.0),
        record(date(2024, 1, 6), "Product B", 0.0),
        SalesRecord::new(date(2024, 2, 5), "Product B", "Region 1", None, 10.0),
        record(date(2024, 3, 5), "Product B", 60.0),
    ];

    let table = monthly_product_breakdown(&records);
    // Product B only enters through its positive March row, but the
    // column is zero-filled across all three months.
    assert_eq!(table.columns, vec!["Product A", "Product B"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0].bucket, date(2024, 1, 31));
    assert_eq!(table.rows[0].values["Product B"], 0.0);
    assert_eq!(table.rows[2].values["Product B"], 60.0);
    assert_eq!(table.total(), 160.0);
}

#[test]
fn monthly_totals_drop_months_ending_after_today() {
    let today = date(2024, 5, 15);
    let records = vec![
        record(date(2024, 3, 10), "Product A", 100.0),
        record(date(2024, 4, 10), "Product A", 50.0),
        // The current month ends after today and is still open.
        record(date(2024, 5, 10), "Product A", 30.0),
        // Future forecast-only month.
        SalesRecord::new(date(2024, 7, 10), "Product A", "Region 1", None, 10.0),
    ];

    let totals = monthly_totals(&records, today);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].month, "2024-03-31");
    assert_eq!(totals[0].total, 100.0);
    assert_eq!(totals[1].month, "2024-04-30");
    assert_eq!(totals[1].total, 50.0);
}

#[test]
fn cumulative_series_is_monotone() {
    let today = date(2024, 5, 15);
    let records = generate_sales_data_seeded(200, today, 17);

    let series = cumulative_monthly_sales(&records);
    assert!(!series.is_empty());
    for pair in series.windows(2) {
        assert!(pair[1].cumulative_total >= pair[0].cumulative_total);
    }
}

#[test]
fn cumulative_series_carries_totals_across_gap_months() {
    let records = vec![
        record(date(2024, 1, 5), "Product A", 100.0),
        record(date(2024, 3, 5), "Product A", 50.0),
    ];

    let series = cumulative_monthly_sales(&records);
    assert_eq!(series.len(), 3);
    assert_eq!(series[0].cumulative_total, 100.0);
    // February has no sales; the running total holds.
    assert_eq!(series[1].month, "2024-02-29");
    assert_eq!(series[1].cumulative_total, 100.0);
    assert_eq!(series[2].cumulative_total, 150.0);
}

#[test]
fn empty_table_yields_empty_series() {
    let today = date(2024, 5, 15);
    assert!(monthly_totals(&[], today).is_empty());
    assert!(cumulative_monthly_sales(&[]).is_empty());
    assert!(monthly_product_breakdown(&[]).rows.is_empty());
}
