//! Read-only float queries: the dataset with optional filters, proximity
//! and map search, single-float lookup, globe projection and summary
//! statistics.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{bad_request, not_found, SharedStore};
use crate::{
    geo::GlobeFloat,
    store::{by_depth, by_region, by_temperature, nearest, DataOrigin, DEFAULT_SEARCH_RADIUS_KM},
    FloatSource,
};

// ---

pub fn router<S>() -> Router<SharedStore<S>>
where
    S: FloatSource + 'static,
{
    // ---
    Router::new()
        .route("/api/floats", get(list_floats::<S>))
        .route("/api/floats/nearest", get(nearest_floats::<S>))
        .route("/api/floats/globe", get(globe::<S>))
        .route("/api/floats/search", get(search::<S>))
        .route("/api/floats/{id}", get(float_detail::<S>))
        .route("/api/statistics", get(statistics::<S>))
}

/// Envelope for every float listing; tells the UI whether it is looking at
/// live data or the sample fallback.
#[derive(Serialize)]
struct FloatsResponse<T> {
    origin: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_reason: Option<String>,
    count: usize,
    floats: Vec<T>,
}

impl<T> FloatsResponse<T> {
    fn new(origin: &DataOrigin, floats: Vec<T>) -> Self {
        let fallback_reason = match origin {
            DataOrigin::Fallback(e) => Some(e.to_string()),
            _ => None,
        };
        Self {
            origin: origin.label(),
            fallback_reason,
            count: floats.len(),
            floats,
        }
    }
}

/// Filters for `GET /api/floats`; an open-ended range uses +/- infinity for
/// the missing bound.
#[derive(Debug, Deserialize)]
struct FloatsQuery {
    region: Option<String>,
    min_temp: Option<f64>,
    max_temp: Option<f64>,
    min_depth: Option<f64>,
    max_depth: Option<f64>,
}

async fn list_floats<S: FloatSource + 'static>(
    Query(params): Query<FloatsQuery>,
    State(store): State<SharedStore<S>>,
) -> impl IntoResponse {
    // ---
    info!("GET /api/floats - {:?}", params);

    let data = store.ocean_data().await;
    let mut floats = data.floats.to_vec();

    if let Some(region) = &params.region {
        floats = by_region(&floats, region);
    }
    if params.min_temp.is_some() || params.max_temp.is_some() {
        floats = by_temperature(
            &floats,
            params.min_temp.unwrap_or(f64::NEG_INFINITY),
            params.max_temp.unwrap_or(f64::INFINITY),
        );
    }
    if params.min_depth.is_some() || params.max_depth.is_some() {
        floats = by_depth(
            &floats,
            params.min_depth.unwrap_or(f64::NEG_INFINITY),
            params.max_depth.unwrap_or(f64::INFINITY),
        );
    }

    info!("Returning {} floats ({})", floats.len(), data.origin.label());
    Json(FloatsResponse::new(&data.origin, floats))
}

#[derive(Debug, Deserialize)]
struct NearestQuery {
    lat: f64,
    lng: f64,
    radius: Option<f64>,
}

async fn nearest_floats<S: FloatSource + 'static>(
    Query(params): Query<NearestQuery>,
    State(store): State<SharedStore<S>>,
) -> Response {
    // ---
    info!("GET /api/floats/nearest - {:?}", params);

    if !(-90.0..=90.0).contains(&params.lat) || !(-180.0..=180.0).contains(&params.lng) {
        return bad_request(format!(
            "coordinate out of range: lat={}, lng={}",
            params.lat, params.lng
        ));
    }
    let radius = params.radius.unwrap_or(DEFAULT_SEARCH_RADIUS_KM);
    if radius.is_nan() || radius < 0.0 {
        return bad_request(format!("radius must be non-negative, got {radius}"));
    }

    let data = store.ocean_data().await;
    let hits = nearest(&data.floats, params.lat, params.lng, radius);

    Json(FloatsResponse::new(&data.origin, hits)).into_response()
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: String,
}

async fn search<S: FloatSource + 'static>(
    Query(params): Query<SearchQuery>,
    State(store): State<SharedStore<S>>,
) -> impl IntoResponse {
    // ---
    info!("GET /api/floats/search - {:?}", params);

    let outcome = store.search(&params.q).await;
    info!("Search for {:?} found {} floats", params.q, outcome.len());
    Json(outcome)
}

async fn float_detail<S: FloatSource + 'static>(
    Path(id): Path<String>,
    State(store): State<SharedStore<S>>,
) -> Response {
    // ---
    match store.float_by_id(&id).await {
        Some(float) => Json(float).into_response(),
        None => not_found(format!("no float with id {id}")),
    }
}

async fn globe<S: FloatSource + 'static>(
    State(store): State<SharedStore<S>>,
) -> impl IntoResponse {
    // ---
    let data = store.ocean_data().await;
    let projected: Vec<GlobeFloat> = data.floats.iter().map(GlobeFloat::project).collect();

    Json(FloatsResponse::new(&data.origin, projected))
}

async fn statistics<S: FloatSource + 'static>(
    State(store): State<SharedStore<S>>,
) -> impl IntoResponse {
    // ---
    Json(store.statistics().await)
}
