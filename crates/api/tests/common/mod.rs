#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use reelbase_api::config::ServerConfig;
use reelbase_api::router::build_app_router;
use reelbase_api::state::AppState;
use reelbase_core::metadata::{MetadataProvider, MovieMetadata, ProviderError};
use reelbase_omdb::OmdbConfig;

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The real OMDb client is never built
/// from this config; tests inject a [`FakeProvider`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        omdb: OmdbConfig::new(None),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and metadata provider.
pub fn build_test_app(pool: SqlitePool, provider: Arc<dyn MetadataProvider>) -> Router {
    build_test_app_with_config(pool, provider, test_config())
}

/// Same as [`build_test_app`] with a caller-supplied configuration.
pub fn build_test_app_with_config(
    pool: SqlitePool,
    provider: Arc<dyn MetadataProvider>,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        provider,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fake metadata provider
// ---------------------------------------------------------------------------

/// In-memory provider that records how often it is called.
#[derive(Default)]
pub struct FakeProvider {
    movies: HashMap<String, MovieMetadata>,
    search_results: Vec<String>,
    failing: bool,
    lookups: AtomicUsize,
    searches: AtomicUsize,
    looked_up: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every call fails at the transport level.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_movie(mut self, title: &str, year: Option<&str>, description: Option<&str>) -> Self {
        self.movies.insert(
            title.to_string(),
            MovieMetadata {
                title: title.to_string(),
                year: year.map(str::to_string),
                description: description.map(str::to_string),
            },
        );
        self
    }

    pub fn with_search_results(mut self, titles: &[&str]) -> Self {
        self.search_results = titles.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    /// Titles passed to `lookup_by_title`, in call order.
    pub fn looked_up_titles(&self) -> Vec<String> {
        self.looked_up.lock().unwrap().clone()
    }

    /// Highest number of lookups observed running at the same time.
    pub fn max_concurrent_lookups(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataProvider for FakeProvider {
    async fn lookup_by_title(&self, title: &str) -> Result<Option<MovieMetadata>, ProviderError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.looked_up.lock().unwrap().push(title.to_string());

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        // Give any concurrently issued lookup a chance to start.
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing {
            return Err(ProviderError::Transport("connection refused".to_string()));
        }
        Ok(self.movies.get(title).cloned())
    }

    async fn search_titles(
        &self,
        _keyword: &str,
        limit: usize,
    ) -> Result<Vec<String>, ProviderError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(ProviderError::Transport("connection refused".to_string()));
        }
        Ok(self.search_results.iter().take(limit).cloned().collect())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

/// POST a raw body labelled as JSON, for malformed payloads.
pub async fn post_raw_json(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
