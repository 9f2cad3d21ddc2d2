//! Raw energy records as delivered by the upstream data provider.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One raw record.
///
/// Two shapes arrive in practice: a pre-grouped daily total
/// (`{"_id": {"date": ...}, "totalEnergy": ...}`) and an individual reading
/// (`{"timestamp": ..., "energyGenerated": ...}`). Fields are kept as loose
/// JSON values; interpretation happens in the normalizer so a single bad field
/// never rejects the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    /// Grouping key of aggregated records, or a plain document id on readings
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_generated: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_energy: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<Value>,
}

impl RawRecord {
    /// Individual timestamped reading.
    pub fn reading(timestamp: impl Into<Value>, energy_generated: f64) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            energy_generated: Some(json!(energy_generated)),
            ..Self::default()
        }
    }

    /// Pre-grouped daily total.
    pub fn daily_total(date: impl Into<Value>, total_energy: f64) -> Self {
        Self {
            id: Some(json!({ "date": date.into() })),
            total_energy: Some(json!(total_energy)),
            ..Self::default()
        }
    }

    /// Field holding the record's date: `date`, then `_id.date`, then `timestamp`.
    pub fn date_source(&self) -> Option<&Value> {
        let grouped = self.id.as_ref().and_then(|id| id.get("date"));
        [self.date.as_ref(), grouped, self.timestamp.as_ref()]
            .into_iter()
            .flatten()
            .find(|value| !value.is_null())
    }

    /// Field holding the record's energy: `energyGenerated`, then `totalEnergy`, then `energy`.
    pub fn energy_source(&self) -> Option<&Value> {
        [
            self.energy_generated.as_ref(),
            self.total_energy.as_ref(),
            self.energy.as_ref(),
        ]
        .into_iter()
        .flatten()
        .find(|value| !value.is_null())
    }
}

/// Response envelope carrying raw records.
///
/// Upstream endpoints answer with a bare array, `{"records": [...]}` or
/// `{"data": [...]}`. Entries are kept as JSON values so malformed entries can
/// be skipped one by one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPayload {
    Records(Vec<Value>),
    Wrapped { records: Vec<Value> },
    Enveloped { data: Vec<Value> },
}

impl RawPayload {
    /// Interpret any JSON document as a payload; unrecognised shapes are empty.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or(RawPayload::Records(Vec::new()))
    }

    /// Raw entries of the payload.
    pub fn into_entries(self) -> Vec<Value> {
        match self {
            RawPayload::Records(entries)
            | RawPayload::Wrapped { records: entries }
            | RawPayload::Enveloped { data: entries } => entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_reading() {
        let record: RawRecord = serde_json::from_value(json!({
            "_id": "665f1c2e9b1e8a0012345678",
            "solarUnitId": "665f1c2e9b1e8a0000000001",
            "timestamp": "2024-06-01T10:00:00.000Z",
            "energyGenerated": 1.5
        }))
        .unwrap();
        assert_eq!(record.date_source(), Some(&json!("2024-06-01T10:00:00.000Z")));
        assert_eq!(record.energy_source(), Some(&json!(1.5)));
    }

    #[test]
    fn test_deserialize_daily_total() {
        let record: RawRecord = serde_json::from_value(json!({
            "_id": { "date": "2024-06-01" },
            "totalEnergy": 22.4
        }))
        .unwrap();
        assert_eq!(record.date_source(), Some(&json!("2024-06-01")));
        assert_eq!(record.energy_source(), Some(&json!(22.4)));
    }

    #[test]
    fn test_date_source_preference() {
        let record = RawRecord {
            date: Some(json!("2024-01-03")),
            id: Some(json!({ "date": "2024-01-02" })),
            timestamp: Some(json!("2024-01-01T00:00:00Z")),
            ..RawRecord::default()
        };
        assert_eq!(record.date_source(), Some(&json!("2024-01-03")));

        let record = RawRecord {
            date: Some(Value::Null),
            id: Some(json!({ "date": "2024-01-02" })),
            timestamp: Some(json!("2024-01-01T00:00:00Z")),
            ..RawRecord::default()
        };
        assert_eq!(record.date_source(), Some(&json!("2024-01-02")));
    }

    #[test]
    fn test_date_source_missing() {
        assert_eq!(RawRecord::default().date_source(), None);
    }

    #[test]
    fn test_energy_source_preference() {
        let record = RawRecord {
            total_energy: Some(json!(4.0)),
            energy: Some(json!(9.0)),
            ..RawRecord::default()
        };
        assert_eq!(record.energy_source(), Some(&json!(4.0)));
    }

    #[test]
    fn test_constructors() {
        let reading = RawRecord::reading("2024-06-01T08:00:00Z", 0.75);
        assert_eq!(reading.energy_source(), Some(&json!(0.75)));
        let total = RawRecord::daily_total("2024-06-01", 12.0);
        assert_eq!(total.date_source(), Some(&json!("2024-06-01")));
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let json = serde_json::to_string(&RawRecord::daily_total("2024-06-01", 12.0)).unwrap();
        assert_eq!(json, r#"{"_id":{"date":"2024-06-01"},"totalEnergy":12.0}"#);
    }

    #[test]
    fn test_payload_shapes() {
        let bare = RawPayload::from_value(json!([{ "timestamp": 1 }]));
        assert_eq!(bare.into_entries().len(), 1);

        let wrapped = RawPayload::from_value(json!({ "records": [{}, {}] }));
        assert_eq!(wrapped.into_entries().len(), 2);

        let enveloped = RawPayload::from_value(json!({ "data": [{}, {}, {}] }));
        assert_eq!(enveloped.into_entries().len(), 3);
    }

    #[test]
    fn test_payload_unrecognised_is_empty() {
        assert!(RawPayload::from_value(json!({ "items": [] })).into_entries().is_empty());
        assert!(RawPayload::from_value(json!("nope")).into_entries().is_empty());
    }
}
