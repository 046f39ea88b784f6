//! Geospatial helpers: great-circle distance, globe projection, and the
//! named ocean bounding boxes offered by the data-selection panel.

use serde::Serialize;

use crate::models::{FloatReading, TrajectoryPoint};

// ---

/// Mean Earth radius used for all distance calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two lat/lng points
/// (Haversine over a spherical Earth).
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    // ---
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Cartesian point on a sphere, y-axis through the poles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GlobePoint {
    /// Project a geographic coordinate onto a sphere of `radius`.
    pub fn from_lat_lng(lat: f64, lng: f64, radius: f64) -> Self {
        // ---
        let phi = (90.0 - lat).to_radians();
        let theta = (lng + 180.0).to_radians();

        Self {
            x: radius * phi.sin() * theta.cos(),
            y: radius * phi.cos(),
            z: radius * phi.sin() * theta.sin(),
        }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Globe radius for float markers (unit sphere is the Earth surface).
pub const MARKER_RADIUS: f64 = 1.01;
/// Trajectory lines sit just above the markers.
pub const TRAJECTORY_RADIUS: f64 = 1.02;

/// A float positioned for globe rendering.
#[derive(Debug, Clone, Serialize)]
pub struct GlobeFloat {
    pub name: String,
    pub temperature: f64,
    pub position: GlobePoint,
    pub trajectory: Vec<GlobePoint>,
}

impl GlobeFloat {
    pub fn project(float: &FloatReading) -> Self {
        // ---
        Self {
            name: float.name.clone(),
            temperature: float.temperature,
            position: GlobePoint::from_lat_lng(float.lat, float.lng, MARKER_RADIUS),
            trajectory: project_trajectory(&float.trajectory),
        }
    }
}

fn project_trajectory(points: &[TrajectoryPoint]) -> Vec<GlobePoint> {
    points
        .iter()
        .map(|p| GlobePoint::from_lat_lng(p.lat, p.lng, TRAJECTORY_RADIUS))
        .collect()
}

/// Geographic bounding box in degrees, edges inclusive.
///
/// When `west > east` the box crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OceanBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl OceanBounds {
    /// Preset boxes offered by the data-selection panel.
    pub fn preset(name: &str) -> Option<Self> {
        // ---
        let (north, south, west, east) = match name {
            "global" => (90.0, -90.0, -180.0, 180.0),
            "atlantic" => (70.0, 0.0, -80.0, 20.0),
            "pacific" => (60.0, 0.0, 120.0, -120.0),
            "indian" => (30.0, -60.0, 20.0, 120.0),
            "mediterranean" => (45.0, 30.0, -6.0, 36.0),
            "arctic" => (90.0, 60.0, -180.0, 180.0),
            "southern" => (-30.0, -90.0, -180.0, 180.0),
            _ => return None,
        };
        Some(Self {
            north,
            south,
            west,
            east,
        })
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        // ---
        if lat < self.south || lat > self.north {
            return false;
        }
        if self.west <= self.east {
            lng >= self.west && lng <= self.east
        } else {
            lng >= self.west || lng <= self.east
        }
    }
}

/// Named places the map search recognises, as (name, lat, lng).
pub const REFERENCE_LOCATIONS: [(&str, f64, f64); 12] = [
    ("Chennai", 13.0827, 80.2707),
    ("Mumbai", 19.0760, 72.8777),
    ("Kochi", 9.9312, 76.2673),
    ("Kolkata", 22.5726, 88.3639),
    ("Visakhapatnam", 17.6868, 83.2185),
    ("Bengaluru", 12.9716, 77.5946),
    ("Arabian Sea", 15.0, 65.0),
    ("Bay of Bengal", 15.0, 87.0),
    ("Indian Ocean", -20.0, 80.0),
    ("Equator", 0.0, 80.0),
    ("Maldives", 3.2028, 73.2207),
    ("Sri Lanka", 7.8731, 80.7718),
];

/// Coordinates of a reference place; the name must match exactly.
pub fn reference_location(name: &str) -> Option<(f64, f64)> {
    REFERENCE_LOCATIONS
        .iter()
        .find(|(place, _, _)| *place == name)
        .map(|&(_, lat, lng)| (lat, lng))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance_to_self_is_zero() {
        // ---
        for &(lat, lng) in &[(0.0, 0.0), (15.234, 68.456), (-89.9, 179.9), (90.0, -180.0)] {
            assert!(haversine_km(lat, lng, lat, lng).abs() < EPS);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        // ---
        let pairs = [
            ((15.234, 68.456), (22.456, 88.789)),
            ((-33.9, 18.4), (51.5, -0.12)),
            ((10.0, 179.5), (10.0, -179.5)),
        ];
        for ((a_lat, a_lng), (b_lat, b_lng)) in pairs {
            let ab = haversine_km(a_lat, a_lng, b_lat, b_lng);
            let ba = haversine_km(b_lat, b_lng, a_lat, a_lng);
            assert!((ab - ba).abs() < EPS, "{ab} != {ba}");
        }
    }

    #[test]
    fn test_known_distances() {
        // ---
        // One degree of longitude on the equator.
        let one_deg = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((one_deg - 111.19).abs() < 0.01, "got {one_deg}");

        // Pole to pole is half the circumference.
        let half = haversine_km(90.0, 0.0, -90.0, 0.0);
        assert!((half - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);

        // Short hop across the antimeridian.
        let across = haversine_km(0.0, 179.5, 0.0, -179.5);
        assert!((across - one_deg).abs() < 1e-6);
    }

    #[test]
    fn test_globe_projection_axes() {
        // ---
        let north_pole = GlobePoint::from_lat_lng(90.0, 0.0, 1.0);
        assert!(north_pole.x.abs() < EPS && (north_pole.y - 1.0).abs() < EPS);

        // lng = 0 maps to theta = 180°, i.e. the negative x-axis.
        let origin = GlobePoint::from_lat_lng(0.0, 0.0, 2.0);
        assert!((origin.x + 2.0).abs() < EPS);
        assert!(origin.y.abs() < EPS && origin.z.abs() < EPS);

        let p = GlobePoint::from_lat_lng(15.234, 68.456, MARKER_RADIUS);
        assert!((p.norm() - MARKER_RADIUS).abs() < EPS);
    }

    #[test]
    fn test_bounds_presets() {
        // ---
        let indian = OceanBounds::preset("indian").unwrap();
        assert!(indian.contains(15.234, 68.456));
        assert!(indian.contains(30.0, 120.0));
        assert!(!indian.contains(31.0, 70.0));

        let pacific = OceanBounds::preset("pacific").unwrap();
        assert!(pacific.contains(20.0, 170.0));
        assert!(pacific.contains(20.0, -150.0));
        assert!(!pacific.contains(20.0, 0.0));

        assert!(OceanBounds::preset("Indian").is_none());
    }

    #[test]
    fn test_reference_locations() {
        // ---
        assert_eq!(reference_location("Arabian Sea"), Some((15.0, 65.0)));
        assert_eq!(reference_location("Mumbai"), Some((19.0760, 72.8777)));
        assert_eq!(reference_location("mumbai"), None);
        assert_eq!(reference_location("Atlantis"), None);
    }
}
