//! Built-in sample dataset returned when the upstream is unavailable.

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::{FloatId, FloatReading, FloatStatus, TrajectoryPoint};

// ---

/// Midnight UTC on 2024-01-15, the day every sample reading was taken.
const SAMPLE_DAY_SECS: i64 = 1_705_276_800;

/// Hour and minute of a sample reading on the sample day.
type SampleTime = (u32, u32);

struct SampleFloat {
    id: u64,
    name: &'static str,
    lat: f64,
    lng: f64,
    depth: f64,
    temperature: f64,
    pressure: f64,
    salinity: f64,
    oxygen: f64,
    ph: f64,
    at: SampleTime,
    region: &'static str,
    /// (lat, lng, time, depth)
    trajectory: [(f64, f64, SampleTime, f64); 5],
}

const SAMPLE_FLOATS: [SampleFloat; 8] = [
    SampleFloat {
        id: 1,
        name: "ARGO Float 2902755",
        lat: 15.234,
        lng: 68.456,
        depth: 1847.0,
        temperature: 28.5,
        pressure: 4.2,
        salinity: 35.2,
        oxygen: 8.3,
        ph: 8.1,
        at: (14, 30),
        region: "Arabian Sea",
        trajectory: [
            (15.234, 68.456, (14, 30), 0.0),
            (15.245, 68.467, (15, 0), 50.0),
            (15.256, 68.478, (15, 30), 100.0),
            (15.267, 68.489, (16, 0), 200.0),
            (15.278, 68.500, (16, 30), 500.0),
        ],
    },
    SampleFloat {
        id: 2,
        name: "ARGO Float 2902756",
        lat: 12.891,
        lng: 72.123,
        depth: 1923.0,
        temperature: 29.1,
        pressure: 3.8,
        salinity: 34.8,
        oxygen: 7.9,
        ph: 8.0,
        at: (14, 25),
        region: "Arabian Sea",
        trajectory: [
            (12.891, 72.123, (14, 25), 0.0),
            (12.902, 72.134, (14, 55), 75.0),
            (12.913, 72.145, (15, 25), 150.0),
            (12.924, 72.156, (15, 55), 300.0),
            (12.935, 72.167, (16, 25), 600.0),
        ],
    },
    SampleFloat {
        id: 3,
        name: "ARGO Float 2902757",
        lat: 8.567,
        lng: 76.789,
        depth: 1756.0,
        temperature: 30.2,
        pressure: 4.8,
        salinity: 34.5,
        oxygen: 8.7,
        ph: 8.2,
        at: (14, 20),
        region: "Indian Ocean",
        trajectory: [
            (8.567, 76.789, (14, 20), 0.0),
            (8.578, 76.800, (14, 50), 60.0),
            (8.589, 76.811, (15, 20), 120.0),
            (8.600, 76.822, (15, 50), 250.0),
            (8.611, 76.833, (16, 20), 500.0),
        ],
    },
    SampleFloat {
        id: 4,
        name: "ARGO Float 2902758",
        lat: 18.234,
        lng: 84.567,
        depth: 1998.0,
        temperature: 27.8,
        pressure: 5.5,
        salinity: 35.6,
        oxygen: 9.1,
        ph: 8.3,
        at: (14, 15),
        region: "Bay of Bengal",
        trajectory: [
            (18.234, 84.567, (14, 15), 0.0),
            (18.245, 84.578, (14, 45), 80.0),
            (18.256, 84.589, (15, 15), 160.0),
            (18.267, 84.600, (15, 45), 320.0),
            (18.278, 84.611, (16, 15), 650.0),
        ],
    },
    SampleFloat {
        id: 5,
        name: "ARGO Float 2902759",
        lat: 5.789,
        lng: 80.123,
        depth: 1678.0,
        temperature: 31.1,
        pressure: 3.2,
        salinity: 34.2,
        oxygen: 7.5,
        ph: 8.1,
        at: (14, 10),
        region: "Indian Ocean",
        trajectory: [
            (5.789, 80.123, (14, 10), 0.0),
            (5.800, 80.134, (14, 40), 70.0),
            (5.811, 80.145, (15, 10), 140.0),
            (5.822, 80.156, (15, 40), 280.0),
            (5.833, 80.167, (16, 10), 560.0),
        ],
    },
    SampleFloat {
        id: 6,
        name: "ARGO Float 2902760",
        lat: 22.456,
        lng: 88.789,
        depth: 2034.0,
        temperature: 26.5,
        pressure: 3.9,
        salinity: 35.9,
        oxygen: 8.1,
        ph: 8.0,
        at: (14, 5),
        region: "Bay of Bengal",
        trajectory: [
            (22.456, 88.789, (14, 5), 0.0),
            (22.467, 88.800, (14, 35), 90.0),
            (22.478, 88.811, (15, 5), 180.0),
            (22.489, 88.822, (15, 35), 360.0),
            (22.500, 88.833, (16, 5), 720.0),
        ],
    },
    SampleFloat {
        id: 7,
        name: "ARGO Float 2902761",
        lat: 13.678,
        lng: 65.234,
        depth: 1845.0,
        temperature: 28.9,
        pressure: 4.1,
        salinity: 35.1,
        oxygen: 8.2,
        ph: 8.1,
        at: (14, 0),
        region: "Arabian Sea",
        trajectory: [
            (13.678, 65.234, (14, 0), 0.0),
            (13.689, 65.245, (14, 30), 65.0),
            (13.700, 65.256, (15, 0), 130.0),
            (13.711, 65.267, (15, 30), 260.0),
            (13.722, 65.278, (16, 0), 520.0),
        ],
    },
    SampleFloat {
        id: 8,
        name: "ARGO Float 2902762",
        lat: 9.345,
        lng: 79.567,
        depth: 1712.0,
        temperature: 29.8,
        pressure: 3.6,
        salinity: 34.6,
        oxygen: 7.8,
        ph: 8.0,
        at: (13, 55),
        region: "Indian Ocean",
        trajectory: [
            (9.345, 79.567, (13, 55), 0.0),
            (9.356, 79.578, (14, 25), 55.0),
            (9.367, 79.589, (14, 55), 110.0),
            (9.378, 79.600, (15, 25), 220.0),
            (9.389, 79.611, (15, 55), 440.0),
        ],
    },
];

/// Eight active floats across the Arabian Sea, Bay of Bengal and Indian
/// Ocean, each with a five-point descending trajectory.
pub fn sample_floats() -> Vec<FloatReading> {
    SAMPLE_FLOATS.iter().map(SampleFloat::to_reading).collect()
}

impl SampleFloat {
    fn to_reading(&self) -> FloatReading {
        // ---
        FloatReading {
            id: FloatId::Number(self.id),
            name: self.name.to_string(),
            lat: self.lat,
            lng: self.lng,
            depth: self.depth,
            temperature: self.temperature,
            pressure: self.pressure,
            salinity: self.salinity,
            oxygen: self.oxygen,
            ph: self.ph,
            timestamp: sample_time(self.at),
            region: self.region.to_string(),
            status: FloatStatus::Active,
            trajectory: self
                .trajectory
                .iter()
                .map(|&(lat, lng, at, depth)| TrajectoryPoint {
                    lat,
                    lng,
                    timestamp: sample_time(at),
                    depth,
                })
                .collect(),
        }
    }
}

fn sample_time((hour, minute): SampleTime) -> DateTime<Utc> {
    let offset = SAMPLE_DAY_SECS + i64::from(hour) * 3600 + i64::from(minute) * 60;
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(offset)
}
