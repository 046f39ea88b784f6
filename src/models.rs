//! Data models for ARGO float telemetry.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---

/// Float identifier as delivered upstream: either numeric or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FloatId {
    Number(u64),
    Text(String),
}

impl fmt::Display for FloatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatId::Number(n) => write!(f, "{n}"),
            FloatId::Text(s) => f.write_str(s),
        }
    }
}

/// Operational state reported for a float.
///
/// Only `Active` is interpreted; any other label is kept verbatim so it
/// survives a round trip through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FloatStatus {
    Active,
    Other(String),
}

impl FloatStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, FloatStatus::Active)
    }
}

impl From<String> for FloatStatus {
    fn from(label: String) -> Self {
        if label == "Active" {
            FloatStatus::Active
        } else {
            FloatStatus::Other(label)
        }
    }
}

impl From<FloatStatus> for String {
    fn from(status: FloatStatus) -> Self {
        match status {
            FloatStatus::Active => "Active".to_string(),
            FloatStatus::Other(label) => label,
        }
    }
}

/// One historical sample along a float's path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    // ---
    pub lat: f64,
    pub lng: f64,
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    pub depth: f64,
}

/// Current snapshot of a single ARGO float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatReading {
    // ---
    pub id: FloatId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Meters below the surface.
    pub depth: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Atmospheres.
    pub pressure: f64,
    /// Parts per thousand.
    pub salinity: f64,
    /// mg/L.
    pub oxygen: f64,
    pub ph: f64,
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    pub region: String,
    pub status: FloatStatus,
    /// Chronological, oldest first.
    #[serde(default)]
    pub trajectory: Vec<TrajectoryPoint>,
}

/// Serde adapter for the dashboard's `YYYY-MM-DD HH:MM:SS` timestamps.
///
/// Deserialization also accepts the `T`-separated form and full RFC 3339;
/// naive values are taken as UTC. Serialization always writes the
/// space-separated form.
pub mod timestamp_format {
    // ---
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        // ---
        let raw = raw.trim();
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, FORMAT) {
            return Some(naive.and_utc());
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Some(naive.and_utc());
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::{TimeZone, Timelike};

    const UPSTREAM_JSON: &str = r#"{
        "id": 42,
        "name": "ARGO Float 9999999",
        "lat": -12.5,
        "lng": 101.25,
        "depth": 1500,
        "temperature": 18.4,
        "pressure": 3.3,
        "salinity": 34.9,
        "oxygen": 6.1,
        "ph": 7.9,
        "timestamp": "2024-02-01 08:15:00",
        "region": "Indian Ocean",
        "status": "Drifting",
        "trajectory": [
            {"lat": -12.5, "lng": 101.25, "timestamp": "2024-02-01T08:15:00", "depth": 0},
            {"lat": -12.4, "lng": 101.30, "timestamp": "2024-02-01T09:15:00Z", "depth": 120}
        ]
    }"#;

    #[test]
    fn test_parses_upstream_shape() {
        // ---
        let reading: FloatReading = serde_json::from_str(UPSTREAM_JSON).unwrap();

        assert_eq!(reading.id, FloatId::Number(42));
        assert_eq!(reading.depth, 1500.0);
        assert_eq!(reading.status, FloatStatus::Other("Drifting".to_string()));
        assert!(!reading.status.is_active());
        assert_eq!(
            reading.timestamp,
            Utc.with_ymd_and_hms(2024, 2, 1, 8, 15, 0).unwrap()
        );
        assert_eq!(reading.trajectory.len(), 2);
        assert_eq!(reading.trajectory[1].timestamp.hour(), 9);
    }

    #[test]
    fn test_string_id_and_missing_trajectory() {
        // ---
        let mut value: serde_json::Value = serde_json::from_str(UPSTREAM_JSON).unwrap();
        value["id"] = "float-42".into();
        value["status"] = "Active".into();
        value.as_object_mut().unwrap().remove("trajectory");

        let reading: FloatReading = serde_json::from_value(value).unwrap();
        assert_eq!(reading.id, FloatId::Text("float-42".to_string()));
        assert_eq!(reading.id.to_string(), "float-42");
        assert!(reading.status.is_active());
        assert!(reading.trajectory.is_empty());
    }

    #[test]
    fn test_serializes_dashboard_timestamp_and_status() {
        // ---
        let reading: FloatReading = serde_json::from_str(UPSTREAM_JSON).unwrap();
        let value = serde_json::to_value(&reading).unwrap();

        assert_eq!(value["timestamp"], "2024-02-01 08:15:00");
        assert_eq!(value["trajectory"][1]["timestamp"], "2024-02-01 09:15:00");
        assert_eq!(value["status"], "Drifting");
        assert_eq!(value["id"], 42);
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        // ---
        let json = UPSTREAM_JSON.replace("2024-02-01 08:15:00", "yesterday");
        assert!(serde_json::from_str::<FloatReading>(&json).is_err());
    }
}
