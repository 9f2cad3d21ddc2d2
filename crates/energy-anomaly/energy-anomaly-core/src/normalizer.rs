//! Raw record normalization.
//!
//! Turns heterogeneous upstream records into a gap-filled, ascending sequence
//! with exactly one [`Sample`] per calendar day.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::debug;

use energy_anomaly_api::NormalizeConfig;
use energy_anomaly_spi::{RawPayload, RawRecord, Result, Sample};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Builds fixed-length daily sequences from raw records.
#[derive(Debug, Clone)]
pub struct Normalizer {
    window_days: usize,
}

impl Normalizer {
    /// Create a normalizer emitting `window_days` samples per run.
    pub fn new(window_days: usize) -> Result<Self> {
        Self::from_config(&NormalizeConfig::new(window_days))
    }

    /// Create from configuration.
    pub fn from_config(config: &NormalizeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window_days: config.window_days,
        })
    }

    pub fn window_days(&self) -> usize {
        self.window_days
    }

    /// Normalize records into `window_days` ascending samples.
    ///
    /// The window ends at the latest record date, or at `reference_date` when
    /// no record has a usable date. Days without records get 0.0.
    pub fn normalize(&self, records: &[RawRecord], reference_date: NaiveDate) -> Vec<Sample> {
        let totals = daily_totals(records);
        let end = totals.keys().next_back().copied().unwrap_or(reference_date);
        let days = trailing_days(end, self.window_days);

        if let Some(start) = days.first() {
            let dropped = totals.range(..*start).count();
            if dropped > 0 {
                debug!(dropped, %start, "ignoring days before the analysis window");
            }
        }

        days.into_iter()
            .map(|date| Sample::new(date, totals.get(&date).copied().unwrap_or(0.0)))
            .collect()
    }

    /// Normalize using the current UTC date as the fallback window end.
    pub fn normalize_today(&self, records: &[RawRecord]) -> Vec<Sample> {
        self.normalize(records, Utc::now().date_naive())
    }
}

/// Sum record energy per calendar day.
///
/// Records whose date cannot be read are skipped.
pub fn daily_totals(records: &[RawRecord]) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        let Some(date) = record.date_source().and_then(parse_record_date) else {
            debug!(date = ?record.date_source(), "skipping record with unparseable date");
            continue;
        };
        *totals.entry(date).or_insert(0.0) += parse_energy(record.energy_source());
    }
    totals
}

/// Read a day-level date from a JSON value.
///
/// Accepts RFC 3339 timestamps (the date is taken in the timestamp's own
/// offset), naive ISO date-times, plain `YYYY-MM-DD` dates and Unix epoch
/// milliseconds.
pub fn parse_record_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => {
            let millis = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Read an energy amount in kWh.
///
/// Numbers and numeric strings are accepted. Anything missing, non-numeric,
/// non-finite or negative counts as 0.0.
pub fn parse_energy(value: Option<&Value>) -> f64 {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match amount {
        Some(kwh) if kwh.is_finite() && kwh >= 0.0 => kwh,
        _ => {
            if value.is_some_and(|v| !v.is_null()) {
                debug!(energy = ?value, "treating unusable energy amount as 0");
            }
            0.0
        }
    }
}

/// Extract records from a payload, skipping entries that are not records.
pub fn records_from_payload(payload: RawPayload) -> Vec<RawRecord> {
    payload
        .into_entries()
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<RawRecord>(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(error = %err, "skipping malformed record");
                None
            }
        })
        .collect()
}

/// Extract records from any upstream JSON document.
pub fn records_from_json(value: Value) -> Vec<RawRecord> {
    records_from_payload(RawPayload::from_value(value))
}

/// The `count` consecutive days ending at `end`, ascending.
fn trailing_days(end: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = Some(end);
    while let Some(current) = day {
        if days.len() == count {
            break;
        }
        days.push(current);
        day = current.pred_opt();
    }
    days.reverse();
    days
}
