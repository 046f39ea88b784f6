#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use anyhow::Result;
use axum::{http::StatusCode, routing::get, Router};

use argo_oceanview::{sample::sample_floats, HttpFloatSource};

// ---

pub const UPSTREAM_PATH: &str = "/api/argo-data";

/// Serve `app` on an ephemeral localhost port.
pub async fn spawn(app: Router) -> Result<SocketAddr> {
    // ---
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(addr)
}

/// A fake float service answering every request with `status` and `body`.
pub struct Upstream {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl Upstream {
    pub async fn start(status: StatusCode, body: String) -> Result<Self> {
        // ---
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let app = Router::new().route(
            UPSTREAM_PATH,
            get(move || {
                let body = body.clone();
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (status, body)
                }
            }),
        );

        Ok(Self {
            addr: spawn(app).await?,
            hits,
        })
    }

    /// Upstream serving the sample floats as real data.
    pub async fn healthy() -> Result<Self> {
        Self::start(StatusCode::OK, serde_json::to_string(&sample_floats())?).await
    }

    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, UPSTREAM_PATH)
    }

    pub fn source(&self) -> Result<HttpFloatSource> {
        Ok(HttpFloatSource::new(self.url(), Duration::from_secs(5))?)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}
