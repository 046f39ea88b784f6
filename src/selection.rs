//! Criteria for the dashboard's "data selection and download" workflow.

use serde::Serialize;

use crate::{geo::OceanBounds, models::FloatReading};

// ---

/// Optional constraints; a float matches when it satisfies every one that
/// is set. The default selection matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    pub bounds: Option<OceanBounds>,
    pub min_depth: Option<f64>,
    pub max_depth: Option<f64>,
    /// Case-sensitive substring of the float name.
    pub float_name: Option<String>,
}

impl Selection {
    pub fn matches(&self, float: &FloatReading) -> bool {
        // ---
        if let Some(bounds) = &self.bounds {
            if !bounds.contains(float.lat, float.lng) {
                return false;
            }
        }
        if self.min_depth.is_some_and(|min| float.depth < min) {
            return false;
        }
        if self.max_depth.is_some_and(|max| float.depth > max) {
            return false;
        }
        match &self.float_name {
            Some(needle) => float.name.contains(needle.as_str()),
            None => true,
        }
    }

    pub fn apply(&self, floats: &[FloatReading]) -> Vec<FloatReading> {
        floats.iter().filter(|f| self.matches(f)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::sample::sample_floats;

    #[test]
    fn test_default_matches_everything() {
        assert_eq!(Selection::default().apply(&sample_floats()).len(), 8);
    }

    #[test]
    fn test_combined_criteria() {
        // ---
        let selection = Selection {
            bounds: OceanBounds::preset("indian"),
            min_depth: Some(1800.0),
            max_depth: Some(2000.0),
            float_name: None,
        };
        let names: Vec<String> = selection
            .apply(&sample_floats())
            .into_iter()
            .map(|f| f.name)
            .collect();

        assert_eq!(
            names,
            [
                "ARGO Float 2902755",
                "ARGO Float 2902756",
                "ARGO Float 2902758",
                "ARGO Float 2902761",
            ]
        );
    }

    #[test]
    fn test_float_name_and_empty_box() {
        // ---
        let by_name = Selection {
            float_name: Some("2902760".into()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&sample_floats()).len(), 1);

        let atlantic = Selection {
            bounds: OceanBounds::preset("atlantic"),
            ..Default::default()
        };
        assert!(atlantic.apply(&sample_floats()).is_empty());
    }
}
