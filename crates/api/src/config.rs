use std::time::Duration;

use reelbase_omdb::{OmdbConfig, DEFAULT_BASE_URL};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection string (default: `sqlite://movies.db`).
    pub database_url: String,
    /// OMDb client settings. A missing or empty `OMDB_API_KEY` disables
    /// enrichment and seeding lookups.
    pub omdb: OmdbConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | `sqlite://movies.db`       |
    /// | `OMDB_API_KEY`         | unset (provider disabled)  |
    /// | `OMDB_BASE_URL`        | `http://www.omdbapi.com/`  |
    /// | `OMDB_TIMEOUT_SECS`    | `10`                       |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Panics on unparsable numeric values so misconfiguration fails at
    /// startup rather than on first use.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "8000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = var("DATABASE_URL", "sqlite://movies.db");

        let omdb_timeout_secs: u64 = var("OMDB_TIMEOUT_SECS", "10")
            .parse()
            .expect("OMDB_TIMEOUT_SECS must be a valid u64");

        let mut omdb = OmdbConfig::new(lookup("OMDB_API_KEY"));
        omdb.base_url = var("OMDB_BASE_URL", DEFAULT_BASE_URL);
        omdb.timeout = Duration::from_secs(omdb_timeout_secs);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            omdb,
        }
    }
}
