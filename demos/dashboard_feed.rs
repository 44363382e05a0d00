// Generates a synthetic sales table and prints every dashboard payload
// as the flat JSON records a rendering sink would receive.
use chrono::Local;
use sales_data::utils::{generate_sales_data, write_sales_csv};
use sales_reports::build_dashboard;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();

    // Synthetic table: ~3 years of daily history plus six forecast months
    let records = generate_sales_data(1000, today);
    write_sales_csv("sales.csv", &records)?;
    println!("Generated {} sales rows (written to sales.csv)\n", records.len());

    let feed = build_dashboard(&records, today)?;

    println!("=== Weekly comparison ===");
    println!("{}", feed.weekly.title);
    println!("{}\n", serde_json::to_string_pretty(&feed.weekly.rows)?);

    println!("=== Weekly product indicators ===");
    println!("{}\n", serde_json::to_string_pretty(&feed.indicators)?);

    println!("=== Sales share by region ===");
    println!("{}\n", serde_json::to_string_pretty(&feed.region_shares)?);

    println!("=== Sales and prediction timeline ===");
    println!(
        "{} trailing forecast dates",
        feed.timeline.num_predicted_dates
    );
    println!(
        "{}\n",
        serde_json::to_string_pretty(&feed.timeline.table.to_records("date")?)?
    );

    println!("=== Monthly sales by year ===");
    println!("{}\n", serde_json::to_string_pretty(&feed.month_by_year)?);

    println!("=== Monthly product breakdown ===");
    println!(
        "{}\n",
        serde_json::to_string_pretty(&feed.product_breakdown.to_records("month")?)?
    );

    println!("=== Monthly totals ===");
    println!("{}\n", serde_json::to_string_pretty(&feed.monthly_totals)?);

    println!("=== Cumulative monthly sales ===");
    println!("{}\n", serde_json::to_string_pretty(&feed.cumulative)?);

    println!("=== Per-region timelines ===");
    for (region, table) in &feed.regional_timelines {
        println!("-- {} --", region);
        println!("{}", serde_json::to_string_pretty(&table.to_records("month")?)?);
    }

    Ok(())
}
