//! Upstream float data sources.
//!
//! [`FloatSource`] is the seam between the store and wherever the dataset
//! comes from. [`HttpFloatSource`] talks to the dashboard's data service;
//! tests supply their own implementations.

use std::{future::Future, time::Duration};

use reqwest::Client;
use thiserror::Error;

use crate::models::FloatReading;

// ---

/// Why an upstream fetch produced no usable dataset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status(_) => "status",
            FetchError::Malformed(_) => "malformed",
        }
    }
}

/// Something that can produce the current float dataset.
pub trait FloatSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Vec<FloatReading>, FetchError>> + Send;
}

/// Fetches a JSON array of floats with a single `GET`.
#[derive(Debug, Clone)]
pub struct HttpFloatSource {
    client: Client,
    url: String,
}

impl HttpFloatSource {
    /// Build a source for `url`; every request is bounded by `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        // ---
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FloatSource for HttpFloatSource {
    async fn fetch(&self) -> Result<Vec<FloatReading>, FetchError> {
        // ---
        tracing::debug!("Fetching float data from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let floats: Vec<FloatReading> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        tracing::debug!("Upstream returned {} floats", floats.len());
        Ok(floats)
    }
}
