//! Aggregate statistics over a float dataset.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::FloatReading;

// ---

/// Dashboard summary figures, derived on demand.
///
/// An empty dataset yields zero counts, `0.0` for every min/max/mean and no
/// regions, so no NaN or infinity ever reaches a caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    // ---
    pub total_floats: usize,
    pub active_floats: usize,

    pub avg_temperature: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,

    pub avg_salinity: f64,
    pub min_salinity: f64,
    pub max_salinity: f64,

    pub avg_depth: f64,
    pub min_depth: f64,
    pub max_depth: f64,

    /// Distinct region labels, sorted.
    pub regions: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Summary {
    min: f64,
    max: f64,
    mean: f64,
}

impl Summary {
    const EMPTY: Summary = Summary {
        min: 0.0,
        max: 0.0,
        mean: 0.0,
    };

    fn of(values: impl Iterator<Item = f64>) -> Self {
        // ---
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }

        if count == 0 {
            return Self::EMPTY;
        }
        Self {
            min,
            max,
            mean: sum / count as f64,
        }
    }
}

impl Statistics {
    pub fn compute(floats: &[FloatReading]) -> Self {
        // ---
        let temperature = Summary::of(floats.iter().map(|f| f.temperature));
        let salinity = Summary::of(floats.iter().map(|f| f.salinity));
        let depth = Summary::of(floats.iter().map(|f| f.depth));

        Self {
            total_floats: floats.len(),
            active_floats: floats.iter().filter(|f| f.status.is_active()).count(),
            avg_temperature: temperature.mean,
            min_temperature: temperature.min,
            max_temperature: temperature.max,
            avg_salinity: salinity.mean,
            min_salinity: salinity.min,
            max_salinity: salinity.max,
            avg_depth: depth.mean,
            min_depth: depth.min,
            max_depth: depth.max,
            regions: floats.iter().map(|f| f.region.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::models::FloatStatus;
    use crate::sample::sample_floats;

    #[test]
    fn test_sample_statistics() {
        // ---
        let stats = Statistics::compute(&sample_floats());

        assert_eq!(stats.total_floats, 8);
        assert_eq!(stats.active_floats, 8);
        assert_eq!(stats.max_depth, 2034.0);
        assert_eq!(stats.min_depth, 1678.0);
        assert_eq!(stats.min_temperature, 26.5);
        assert_eq!(stats.max_temperature, 31.1);
        assert_eq!(stats.max_salinity, 35.9);
        assert!((stats.avg_temperature - 28.9875).abs() < 1e-9);
        assert!((stats.avg_depth - 1849.125).abs() < 1e-9);
        assert_eq!(
            stats.regions.iter().map(String::as_str).collect::<Vec<_>>(),
            ["Arabian Sea", "Bay of Bengal", "Indian Ocean"]
        );
    }

    #[test]
    fn test_empty_dataset_policy() {
        // ---
        let stats = Statistics::compute(&[]);

        assert_eq!(stats.total_floats, 0);
        assert_eq!(stats.active_floats, 0);
        for v in [
            stats.avg_temperature,
            stats.min_temperature,
            stats.max_temperature,
            stats.avg_salinity,
            stats.min_salinity,
            stats.max_salinity,
            stats.avg_depth,
            stats.min_depth,
            stats.max_depth,
        ] {
            assert_eq!(v, 0.0);
        }
        assert!(stats.regions.is_empty());
    }

    #[test]
    fn test_inactive_floats_not_counted() {
        // ---
        let mut floats = sample_floats();
        floats[0].status = FloatStatus::Other("Inactive".into());
        floats[1].status = FloatStatus::Other("active".into());

        let stats = Statistics::compute(&floats);
        assert_eq!(stats.total_floats, 8);
        assert_eq!(stats.active_floats, 6);
    }
}
