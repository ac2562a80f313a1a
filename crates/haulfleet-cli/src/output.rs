//! Output formatting module

use haulfleet_app::app::FleetReport;
use haulfleet_domain::model::{
    Fleet, LostTimeCategory, ProductivityEstimate, TruckField, TruckMetrics, TruckRecord,
};
use haulfleet_types::{OutputFormat, Result};
use serde::Serialize;

/// Width of a 100% bar in the DF chart
const CHART_WIDTH: usize = 40;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn format_field(record: &TruckRecord, field: TruckField) -> String {
    let value = record.get(field);
    if field.is_count() {
        format!("{}", value as u64)
    } else {
        format!("{:.2}", value)
    }
}

pub fn output_fleet(output_format: OutputFormat, fleet: &Fleet) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(fleet.trucks());
    }

    if fleet.is_empty() {
        println!("Fleet is empty");
        return Ok(());
    }

    // One row per field, one column per truck
    let mut header = format!("{:<18}", "Field");
    for truck in fleet.trucks() {
        header.push_str(&format!(" {:>9}", truck.truck));
    }
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));

    for field in TruckField::ALL {
        let mut row = format!("{:<18}", field.name());
        for truck in fleet.trucks() {
            row.push_str(&format!(" {:>9}", format_field(truck, field)));
        }
        println!("{}", row);
    }
    Ok(())
}

pub fn output_truck(output_format: OutputFormat, record: &TruckRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(record);
    }

    println!("\n{}", record.truck);
    println!("{}", "=".repeat(record.truck.len()));
    for field in TruckField::ALL {
        println!("{:<18} {:>9}", field.name(), format_field(record, field));
    }
    Ok(())
}

fn print_breakdown(metrics: &TruckMetrics) {
    println!("\nLost time - {}", metrics.truck);
    println!("{:<22} {:>10}", "Category", "Hours");
    println!("{}", "-".repeat(33));
    for category in LostTimeCategory::ALL {
        println!(
            "{:<22} {:>10.2}",
            category.label(),
            metrics.lost_time_breakdown.get(category)
        );
    }
    println!("{}", "-".repeat(33));
    println!("{:<22} {:>10.2}", "Total", metrics.lost_hours);
}

pub fn output_report(output_format: OutputFormat, report: &FleetReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    println!("\nFleet Evaluation");
    println!("================");
    println!(
        "{:<10} {:>10} {:>8} {:>10} {:>10} {:>10} {:>8}",
        "Truck", "Stopped h", "DF %", "Avail h", "Lost h", "Worked h", "Util %"
    );
    println!("{}", "-".repeat(72));

    for m in &report.trucks {
        println!(
            "{:<10} {:>10.2} {:>8.2} {:>10.2} {:>10.2} {:>10.2} {:>8.2}",
            m.truck,
            m.stopped_hours,
            m.df,
            m.available_hours,
            m.lost_hours,
            m.worked_hours,
            m.utilization_pct
        );
    }

    if let Some(ref summary) = report.summary {
        println!("{}", "-".repeat(72));
        println!(
            "Fleet ({} trucks): mean DF {:.2}%, mean utilization {:.2}%",
            summary.truck_count, summary.mean_df, summary.mean_utilization_pct
        );
        println!(
            "Total available {:.2} h, total lost {:.2} h",
            summary.total_available_hours, summary.total_lost_hours
        );
    }

    if report.trucks.len() == 1 {
        print_breakdown(&report.trucks[0]);
    }

    println!("\nGenerated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    Ok(())
}

/// Render one bar per truck, scaled so 100% fills [`CHART_WIDTH`]
pub fn render_df_chart(series: &[(&str, f64)]) -> String {
    let label_width = series.iter().map(|(t, _)| t.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (truck, df) in series {
        let filled = ((df.clamp(0.0, 100.0) / 100.0) * CHART_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "{:<width$} |{}{}| {:6.2}%\n",
            truck,
            "#".repeat(filled),
            " ".repeat(CHART_WIDTH - filled),
            df,
            width = label_width
        ));
    }
    out
}

pub fn print_df_chart(report: &FleetReport) {
    println!("\nPhysical Availability (DF)");
    print!("{}", render_df_chart(&report.df_series()));
}

pub fn output_estimate(output_format: OutputFormat, estimate: &ProductivityEstimate) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(estimate);
    }

    println!("\nHaul Cycle");
    println!("==========");
    println!(
        "{:<12} {:>12} {:>12} {:>12}",
        "Segment", "Loaded min", "Empty min", "Total min"
    );
    println!("{}", "-".repeat(51));
    for s in &estimate.segments {
        println!(
            "{:<12} {:>12.2} {:>12.2} {:>12.2}",
            s.segment.to_string(),
            s.loaded_minutes,
            s.empty_minutes,
            s.total_minutes()
        );
    }
    println!("{}", "-".repeat(51));
    println!("Cycle time:      {:.2} min", estimate.total_cycle_minutes);
    println!("Cycles per hour: {:.2}", estimate.cycles_per_hour);
    println!("Net payload:     {:.2} t", estimate.net_capacity_tons);
    println!("Productivity:    {:.2} t/h", estimate.tons_per_hour);
    Ok(())
}
