//! Basic example demonstrating solar energy anomaly detection
//!
//! Run with: cargo run --example basic -p energy-anomaly-facade

use chrono::NaiveDate;
use energy_anomaly_facade::{
    analyze, anomaly_stats, detect_anomalies, records_from_json, AnalysisConfig, DetectionConfig,
    NormalizeConfig, Sample,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== energy-anomaly Basic Examples ===\n");

    let start = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("invalid start date")?;
    let production = [8.0, 8.0, 8.0, 8.0, 8.0, 2.0, 0.0];
    let samples: Vec<Sample> = production
        .iter()
        .enumerate()
        .map(|(i, &kwh)| Sample::new(start + chrono::Duration::days(i as i64), kwh))
        .collect();

    println!("Daily production (kWh): {:?}\n", production);

    for (title, config) in [
        ("Window average (5 days, 40%)", DetectionConfig::window_average().with_window_size(5)),
        ("Absolute (3.0 kWh)", DetectionConfig::absolute().with_absolute_threshold(3.0)),
        (
            "Combined",
            DetectionConfig::combined()
                .with_window_size(5)
                .with_absolute_threshold(3.0),
        ),
    ] {
        println!("{}", title);
        let annotated = detect_anomalies(&samples, &config)?;
        for day in annotated.iter().filter(|d| d.has_anomaly()) {
            println!(
                "   {} {} {:>5.1} kWh  {}  {}",
                day.date(),
                day.day(),
                day.total_energy(),
                day.anomaly_type().map(|l| l.to_string()).unwrap_or_default(),
                day.anomaly_reason().unwrap_or_default()
            );
        }
        let stats = anomaly_stats(&annotated);
        println!("   {} of {} days flagged\n", stats.anomalies, stats.total);
    }

    // Raw readings straight from an API response
    let payload = serde_json::json!({
        "records": [
            { "timestamp": "2024-06-01T10:00:00Z", "energyGenerated": 4.5 },
            { "timestamp": "2024-06-01T14:00:00Z", "energyGenerated": 3.5 },
            { "timestamp": "2024-06-03T12:00:00Z", "energyGenerated": 7.0 }
        ]
    });
    let config = AnalysisConfig::new(DetectionConfig::combined(), NormalizeConfig::new(3));
    let report = analyze(&records_from_json(payload), &config, start)?;
    println!("Report from raw readings:");
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("\n=== Examples Complete ===");
    Ok(())
}
