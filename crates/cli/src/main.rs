//! # solar-anomaly
//!
//! Command-line interface for the solar energy anomaly detection engine.

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use energy_anomaly_facade::{
    analyze, records_from_json, AnalysisConfig, AnomalyReport, DetectionConfig, DetectionMethod,
    NormalizeConfig, SortOrder, WindowPreset,
};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "solar-anomaly")]
#[command(about = "Solar production anomaly detection CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect anomalies in daily solar production
    Detect {
        /// Input file with a JSON records payload
        #[arg(short, long)]
        input: PathBuf,

        /// Detection method (windowAverage, absolute, combined)
        #[arg(short, long)]
        method: Option<String>,

        /// Percent drop below the trailing average that is flagged
        #[arg(long)]
        window_threshold: Option<f64>,

        /// Number of preceding days in the trailing average
        #[arg(long)]
        window_size: Option<usize>,

        /// Minimum acceptable daily production in kWh
        #[arg(long)]
        absolute_threshold: Option<f64>,

        /// Number of days to analyze
        #[arg(short, long, conflicts_with = "preset")]
        days: Option<usize>,

        /// Analysis window preset (7days, 30days)
        #[arg(short, long)]
        preset: Option<WindowPreset>,

        /// Detection config file (JSON); flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Window end used when no record carries a usable date (YYYY-MM-DD)
        #[arg(long)]
        reference_date: Option<NaiveDate>,

        /// List the latest day first
        #[arg(long)]
        latest_first: bool,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Detection options given on the command line.
#[derive(Debug, Default)]
struct DetectionOverrides {
    method: Option<String>,
    window_threshold: Option<f64>,
    window_size: Option<usize>,
    absolute_threshold: Option<f64>,
}

impl DetectionOverrides {
    fn apply(self, mut config: DetectionConfig) -> CliResult<DetectionConfig> {
        if let Some(method) = self.method {
            config.method = method
                .parse::<DetectionMethod>()
                .map_err(|e| e.to_string())?;
        }
        if let Some(percent) = self.window_threshold {
            config = config.with_window_threshold_percent(percent);
        }
        if let Some(size) = self.window_size {
            config = config.with_window_size(size);
        }
        if let Some(threshold) = self.absolute_threshold {
            config = config.with_absolute_threshold(threshold);
        }
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_json(path: &Path) -> CliResult<serde_json::Value> {
    let file = File::open(path).map_err(|e| format!("Failed to open {:?}: {}", path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON in {:?}: {}", path, e))
}

/// Load the detection config file, or defaults when none is given.
fn load_detection_config(path: Option<&Path>) -> CliResult<DetectionConfig> {
    match path {
        Some(path) => {
            let value = read_json(path)?;
            serde_json::from_value(value).map_err(|e| format!("Invalid config {:?}: {}", path, e))
        }
        None => Ok(DetectionConfig::default()),
    }
}

fn normalize_config(days: Option<usize>, preset: Option<WindowPreset>) -> NormalizeConfig {
    match (days, preset) {
        (Some(days), _) => NormalizeConfig::new(days),
        (None, Some(preset)) => NormalizeConfig::from_preset(preset),
        (None, None) => NormalizeConfig::default(),
    }
}

fn print_report(report: &AnomalyReport) {
    println!("Detection method: {}", report.method);
    println!("Days analyzed: {}", report.stats.total);

    for day in &report.samples {
        let status = match (day.anomaly_type(), day.anomaly_reason()) {
            (Some(label), Some(reason)) => format!("{}  {}", label, reason),
            _ => "ok".to_string(),
        };
        println!(
            "  {} {} {:>8.1} kWh  {}",
            day.date(),
            day.day(),
            day.total_energy(),
            status
        );
    }

    println!(
        "Anomalies: {} ({}), normal: {} ({})",
        report.stats.anomalies,
        format_percent(report.stats.anomaly_percent()),
        report.stats.normal,
        format_percent(report.stats.normal_percent())
    );
    for (anomaly_type, count) in &report.breakdown.by_type {
        println!("  {}: {}", anomaly_type, count);
    }
}

fn format_percent(percent: Option<f64>) -> String {
    percent.map_or_else(|| "n/a".to_string(), |p| format!("{:.1}%", p))
}

/// Run detect command
#[allow(clippy::too_many_arguments)]
fn run_detect(
    input: PathBuf,
    overrides: DetectionOverrides,
    days: Option<usize>,
    preset: Option<WindowPreset>,
    config: Option<PathBuf>,
    reference_date: Option<NaiveDate>,
    latest_first: bool,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let detection = overrides.apply(load_detection_config(config.as_deref())?)?;
    let mut analysis = AnalysisConfig::new(detection, normalize_config(days, preset));
    if latest_first {
        analysis.order = SortOrder::Descending;
    }

    let records = records_from_json(read_json(&input)?);
    info!(records = records.len(), input = ?input, "loaded records");

    let reference_date = reference_date.unwrap_or_else(|| Utc::now().date_naive());
    let report = analyze(&records, &analysis, reference_date).map_err(|e| e.to_string())?;
    print_report(&report);

    if let Some(path) = output {
        let mut file = File::create(&path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &report)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("\nResults written to {:?}", path);
    }

    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Detect {
            input,
            method,
            window_threshold,
            window_size,
            absolute_threshold,
            days,
            preset,
            config,
            reference_date,
            latest_first,
            output,
        } => run_detect(
            input,
            DetectionOverrides {
                method,
                window_threshold,
                window_size,
                absolute_threshold,
            },
            days,
            preset,
            config,
            reference_date,
            latest_first,
            output,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
