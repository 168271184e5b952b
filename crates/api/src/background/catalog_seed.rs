//! One-shot catalog top-up at startup.
//!
//! When the catalog holds fewer than [`SEED_THRESHOLD`] movies, searches the
//! metadata provider for [`SEED_KEYWORD`] and ensures each hit exists. Titles
//! are looked up one at a time, in search order. Failures are logged and
//! dropped; rows written before a failure stay.

use std::sync::Arc;

use sqlx::SqlitePool;
use reelbase_core::metadata::{MetadataProvider, ProviderError};
use reelbase_db::repositories::MovieRepo;

/// Seeding is skipped once the catalog holds this many movies.
pub const SEED_THRESHOLD: i64 = 10;

/// Keyword used to discover candidate titles.
pub const SEED_KEYWORD: &str = "monitor";

/// Maximum number of candidate titles taken from the search.
pub const SEED_CANDIDATES: usize = 10;

/// What a seeding pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog was already large enough; nothing was called or written.
    Skipped { count: i64 },
    /// `candidates` titles came back from the search and `ensured` of them
    /// resolved to metadata and were ensured in the catalog.
    Seeded { candidates: usize, ensured: usize },
}

/// Failure during a seeding pass.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("metadata provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Run a seeding pass, logging and swallowing any failure.
///
/// Returns the outcome on success so callers and tests can inspect it;
/// `None` means the pass failed part-way.
pub async fn run(pool: SqlitePool, provider: Arc<dyn MetadataProvider>) -> Option<SeedOutcome> {
    tracing::info!(threshold = SEED_THRESHOLD, "Catalog seed check started");

    match seed_catalog(&pool, provider.as_ref()).await {
        Ok(SeedOutcome::Skipped { count }) => {
            tracing::info!(count, "Catalog seed skipped, catalog already populated");
            Some(SeedOutcome::Skipped { count })
        }
        Ok(SeedOutcome::Seeded { candidates, ensured }) => {
            tracing::info!(candidates, ensured, "Catalog seed finished");
            Some(SeedOutcome::Seeded { candidates, ensured })
        }
        Err(e) => {
            tracing::error!(error = %e, "Catalog seed failed");
            None
        }
    }
}

/// Top up the catalog from the provider, propagating the first failure.
pub async fn seed_catalog(
    pool: &SqlitePool,
    provider: &dyn MetadataProvider,
) -> Result<SeedOutcome, SeedError> {
    let count = MovieRepo::count(pool).await?;
    if count >= SEED_THRESHOLD {
        return Ok(SeedOutcome::Skipped { count });
    }

    let titles = provider.search_titles(SEED_KEYWORD, SEED_CANDIDATES).await?;
    tracing::debug!(count, candidates = titles.len(), "Seeding catalog");

    let mut ensured = 0;
    for title in &titles {
        let Some(metadata) = provider.lookup_by_title(title).await? else {
            tracing::debug!(title = %title, "No metadata for seed candidate");
            continue;
        };
        let movie = MovieRepo::ensure(
            pool,
            &metadata.title,
            metadata.year.as_deref(),
            metadata.description.as_deref(),
        )
        .await?;
        tracing::debug!(movie_id = movie.id, title = %movie.title, "Seed candidate ensured");
        ensured += 1;
    }

    Ok(SeedOutcome::Seeded {
        candidates: titles.len(),
        ensured,
    })
}
