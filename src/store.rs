//! The ocean data store: cached access to the float dataset with a
//! sample-data fallback, plus the filter and search queries built on it.

use std::{sync::Arc, time::Duration};

use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    cache::{TtlCache, DEFAULT_TTL},
    geo::{haversine_km, reference_location},
    models::FloatReading,
    sample::sample_floats,
    selection::Selection,
    source::{FetchError, FloatSource},
    stats::Statistics,
};

// ---

/// Cache slot holding the full dataset.
pub const OCEAN_DATA_KEY: &str = "ocean_data";

/// Search radius used when a caller does not give one.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 1000.0;

/// Radius around a named reference place for a location search.
pub const LOCATION_SEARCH_RADIUS_KM: f64 = 500.0;

/// Where a dataset handed out by the store came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataOrigin {
    /// Served from a live cache entry.
    Cached,
    /// Freshly fetched from upstream and now cached.
    Fetched,
    /// Upstream failed; this is the built-in sample set.
    Fallback(FetchError),
}

impl DataOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            DataOrigin::Cached => "cached",
            DataOrigin::Fetched => "fetched",
            DataOrigin::Fallback(_) => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DataOrigin::Fallback(_))
    }
}

/// A dataset snapshot together with its provenance.
#[derive(Debug, Clone)]
pub struct OceanData {
    pub floats: Arc<Vec<FloatReading>>,
    pub origin: DataOrigin,
}

/// A float found by a proximity search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyFloat {
    #[serde(flatten)]
    pub float: FloatReading,
    pub distance_km: f64,
}

/// Result of a free-text map search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The term named a reference place; floats near it, closest first.
    Location {
        name: String,
        lat: f64,
        lng: f64,
        radius_km: f64,
        floats: Vec<NearbyFloat>,
    },
    /// Floats whose name or region contains the term, ignoring case.
    Matches { floats: Vec<FloatReading> },
}

impl SearchOutcome {
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Location { floats, .. } => floats.len(),
            SearchOutcome::Matches { floats } => floats.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Single source of truth for the current float dataset.
///
/// Construct one per application and share it (e.g. behind an `Arc`).
pub struct OceanDataStore<S> {
    source: S,
    cache: Mutex<TtlCache<&'static str, Arc<Vec<FloatReading>>>>,
}

impl<S: FloatSource> OceanDataStore<S> {
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, DEFAULT_TTL)
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            cache: Mutex::new(TtlCache::new(ttl)),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the current dataset. Never fails.
    ///
    /// A live cache entry is returned as-is. On a miss the source is asked
    /// once; success is cached, failure yields the sample set, which is
    /// not cached. The cache lock is not held while fetching.
    pub async fn ocean_data(&self) -> OceanData {
        // ---
        if let Some(floats) = self.cache.lock().await.get(&OCEAN_DATA_KEY) {
            tracing::debug!("Cache hit for {}: {} floats", OCEAN_DATA_KEY, floats.len());
            return OceanData {
                floats,
                origin: DataOrigin::Cached,
            };
        }

        tracing::debug!("Cache miss for {}, fetching", OCEAN_DATA_KEY);

        match self.source.fetch().await {
            Ok(floats) => {
                tracing::info!("Fetched {} floats from upstream", floats.len());
                let floats = Arc::new(floats);
                self.cache
                    .lock()
                    .await
                    .set(OCEAN_DATA_KEY, Arc::clone(&floats));
                OceanData {
                    floats,
                    origin: DataOrigin::Fetched,
                }
            }
            Err(e) => {
                tracing::warn!("Upstream fetch failed ({}), using sample data: {}", e.kind(), e);
                OceanData {
                    floats: Arc::new(sample_floats()),
                    origin: DataOrigin::Fallback(e),
                }
            }
        }
    }

    /// Floats whose region label equals `region` exactly.
    pub async fn data_by_region(&self, region: &str) -> Vec<FloatReading> {
        by_region(&self.ocean_data().await.floats, region)
    }

    /// Floats with `min <= temperature <= max`.
    pub async fn data_by_temperature(&self, min: f64, max: f64) -> Vec<FloatReading> {
        by_temperature(&self.ocean_data().await.floats, min, max)
    }

    /// Floats with `min <= depth <= max`.
    pub async fn data_by_depth(&self, min: f64, max: f64) -> Vec<FloatReading> {
        by_depth(&self.ocean_data().await.floats, min, max)
    }

    /// Floats within `radius_km` of the query point, closest first.
    pub async fn nearest_floats(&self, lat: f64, lng: f64, radius_km: f64) -> Vec<NearbyFloat> {
        nearest(&self.ocean_data().await.floats, lat, lng, radius_km)
    }

    pub async fn statistics(&self) -> Statistics {
        Statistics::compute(&self.ocean_data().await.floats)
    }

    pub async fn select(&self, selection: &Selection) -> Vec<FloatReading> {
        selection.apply(&self.ocean_data().await.floats)
    }

    pub async fn search(&self, term: &str) -> SearchOutcome {
        search(&self.ocean_data().await.floats, term)
    }

    /// The float whose id renders as `id`, if any.
    pub async fn float_by_id(&self, id: &str) -> Option<FloatReading> {
        self.ocean_data()
            .await
            .floats
            .iter()
            .find(|f| f.id.to_string() == id)
            .cloned()
    }
}

// ---

pub fn by_region(floats: &[FloatReading], region: &str) -> Vec<FloatReading> {
    floats.iter().filter(|f| f.region == region).cloned().collect()
}

pub fn by_temperature(floats: &[FloatReading], min: f64, max: f64) -> Vec<FloatReading> {
    floats
        .iter()
        .filter(|f| f.temperature >= min && f.temperature <= max)
        .cloned()
        .collect()
}

pub fn by_depth(floats: &[FloatReading], min: f64, max: f64) -> Vec<FloatReading> {
    floats
        .iter()
        .filter(|f| f.depth >= min && f.depth <= max)
        .cloned()
        .collect()
}

/// Haversine proximity search. Equal distances keep dataset order.
pub fn nearest(floats: &[FloatReading], lat: f64, lng: f64, radius_km: f64) -> Vec<NearbyFloat> {
    // ---
    let mut hits: Vec<NearbyFloat> = floats
        .iter()
        .filter_map(|f| {
            let distance_km = haversine_km(lat, lng, f.lat, f.lng);
            (distance_km <= radius_km).then(|| NearbyFloat {
                float: f.clone(),
                distance_km,
            })
        })
        .collect();

    hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    hits
}

/// Map search: an exact reference place name yields the floats within
/// [`LOCATION_SEARCH_RADIUS_KM`] of it; any other term is matched as a
/// case-insensitive substring of float names and regions. A blank term
/// matches nothing.
pub fn search(floats: &[FloatReading], term: &str) -> SearchOutcome {
    // ---
    let term = term.trim();
    if let Some((lat, lng)) = reference_location(term) {
        return SearchOutcome::Location {
            name: term.to_string(),
            lat,
            lng,
            radius_km: LOCATION_SEARCH_RADIUS_KM,
            floats: nearest(floats, lat, lng, LOCATION_SEARCH_RADIUS_KM),
        };
    }

    if term.is_empty() {
        return SearchOutcome::Matches { floats: Vec::new() };
    }
    let needle = term.to_lowercase();
    let floats = floats
        .iter()
        .filter(|f| {
            f.name.to_lowercase().contains(&needle) || f.region.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    SearchOutcome::Matches { floats }
}
