//! Data selection and download: `GET /api/select` and `GET /api/export`.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info};

use super::{bad_request, SharedStore};
use crate::{
    export::{export, ExportFormat},
    geo::OceanBounds,
    selection::Selection,
    FloatSource,
};

// ---

pub fn router<S>() -> Router<SharedStore<S>>
where
    S: FloatSource + 'static,
{
    // ---
    Router::new()
        .route("/api/select", get(select::<S>))
        .route("/api/export", get(export_data::<S>))
}

/// Selection panel parameters. `region` names a preset box; otherwise all
/// four of `north`/`south`/`west`/`east` must be given together.
#[derive(Debug, Default, Deserialize)]
struct SelectQuery {
    region: Option<String>,
    north: Option<f64>,
    south: Option<f64>,
    west: Option<f64>,
    east: Option<f64>,
    min_depth: Option<f64>,
    max_depth: Option<f64>,
    float: Option<String>,
}

impl SelectQuery {
    fn to_selection(&self) -> Result<Selection, String> {
        // ---
        let bounds = match (&self.region, self.north, self.south, self.west, self.east) {
            (Some(name), None, None, None, None) => {
                let bounds = OceanBounds::preset(name)
                    .ok_or_else(|| format!("unknown region preset: {name}"))?;
                Some(bounds)
            }
            (None, Some(north), Some(south), Some(west), Some(east)) => Some(OceanBounds {
                north,
                south,
                west,
                east,
            }),
            (None, None, None, None, None) => None,
            _ => {
                return Err(
                    "give either a region preset or all of north, south, west, east".to_string(),
                )
            }
        };

        Ok(Selection {
            bounds,
            min_depth: self.min_depth,
            max_depth: self.max_depth,
            float_name: self.float.clone().filter(|s| !s.is_empty()),
        })
    }
}

async fn select<S: FloatSource + 'static>(
    Query(params): Query<SelectQuery>,
    State(store): State<SharedStore<S>>,
) -> Response {
    // ---
    info!("GET /api/select - {:?}", params);

    let selection = match params.to_selection() {
        Ok(selection) => selection,
        Err(msg) => return bad_request(msg),
    };

    let floats = store.select(&selection).await;
    info!("Selection matched {} floats", floats.len());
    Json(floats).into_response()
}

/// Download format. The selection parameters of `/api/select` are read by
/// a second extractor so the export carries the same rows.
#[derive(Debug, Deserialize)]
struct ExportQuery {
    format: Option<String>,
}

async fn export_data<S: FloatSource + 'static>(
    Query(params): Query<ExportQuery>,
    Query(criteria): Query<SelectQuery>,
    State(store): State<SharedStore<S>>,
) -> Response {
    // ---
    info!("GET /api/export - {:?} {:?}", params, criteria);

    let requested = params.format.as_deref().unwrap_or("json");
    let format = match requested.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(e) => return bad_request(e.to_string()),
    };
    let selection = match criteria.to_selection() {
        Ok(selection) => selection,
        Err(msg) => return bad_request(msg),
    };

    let floats = store.select(&selection).await;
    let body = match export(&floats, format) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to export {} floats: {}", floats.len(), e);
            return (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json("Failed to export data"),
            )
                .into_response();
        }
    };

    let disposition = format!("attachment; filename=\"argo_data.{}\"", format.extension());
    (
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_select_query_bounds() {
        // ---
        let preset = SelectQuery {
            region: Some("indian".into()),
            ..Default::default()
        };
        assert_eq!(
            preset.to_selection().unwrap().bounds,
            OceanBounds::preset("indian")
        );

        let partial = SelectQuery {
            north: Some(10.0),
            south: Some(0.0),
            ..Default::default()
        };
        assert!(partial.to_selection().is_err());

        let unknown = SelectQuery {
            region: Some("caribbean".into()),
            ..Default::default()
        };
        assert!(unknown.to_selection().unwrap_err().contains("caribbean"));

        assert_eq!(
            SelectQuery::default().to_selection().unwrap(),
            Selection::default()
        );
    }
}
