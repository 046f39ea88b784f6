//! Ocean data access layer for the ARGO float dashboard.
//!
//! The [`OceanDataStore`] caches the float dataset fetched from a
//! [`FloatSource`], falls back to built-in sample data when the upstream is
//! unavailable, and answers the dashboard's region, range, proximity and
//! statistics queries. [`routes::router`] exposes it as a JSON API.

pub mod cache;
pub mod config;
pub mod export;
pub mod geo;
pub mod models;
pub mod routes;
pub mod sample;
pub mod selection;
pub mod source;
pub mod stats;
pub mod store;

pub use config::Config;
pub use models::{FloatId, FloatReading, FloatStatus, TrajectoryPoint};
pub use source::{FetchError, FloatSource, HttpFloatSource};
pub use stats::Statistics;
pub use store::{DataOrigin, NearbyFloat, OceanData, OceanDataStore, SearchOutcome};
