//! Daily production sample.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One calendar day of observed energy production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Calendar day, timezone-naive
    pub date: NaiveDate,
    /// Summed production for the day in kWh
    pub total_energy: f64,
}

impl Sample {
    /// Create a new Sample.
    pub fn new(date: NaiveDate, total_energy: f64) -> Self {
        Self { date, total_energy }
    }

    /// Three-letter weekday label of the sample date.
    pub fn day_label(&self) -> &'static str {
        match self.date.weekday() {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Whether nothing at all was produced on this day.
    pub fn is_zero(&self) -> bool {
        self.total_energy == 0.0
    }
}
