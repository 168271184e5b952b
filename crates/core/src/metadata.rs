//! Seam between the catalog and an external movie-metadata provider.
//!
//! The API server holds an `Arc<dyn MetadataProvider>`; production wires in
//! the OMDb client, tests wire in an in-memory fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Provider data normalized into the catalog's record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieMetadata {
    pub title: String,
    pub year: Option<String>,
    pub description: Option<String>,
}

/// Failure talking to the provider.
///
/// A provider answering "not found" is not an error; it is `Ok(None)` or an
/// empty list.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network-level failure: DNS, connect, TLS, timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    /// The provider answered with a body that could not be decoded.
    #[error("malformed provider response: {0}")]
    Decode(String),
}

/// Read-only lookups against an external metadata source.
///
/// Implementations return neutral results (`None`, empty list) when they are
/// not configured, and propagate transport failures as [`ProviderError`].
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Look up a single movie by exact title.
    async fn lookup_by_title(&self, title: &str) -> Result<Option<MovieMetadata>, ProviderError>;

    /// Search by keyword and return at most `limit` titles in provider order.
    async fn search_titles(&self, keyword: &str, limit: usize)
        -> Result<Vec<String>, ProviderError>;
}
