//! Client for the OMDb movie metadata API.
//!
//! Wraps the title lookup (`?t=`) and keyword search (`?s=`) endpoints using
//! [`reqwest`], and implements [`reelbase_core::metadata::MetadataProvider`]
//! so the API server can depend on the trait rather than this crate's types.

pub mod client;
pub mod error;
pub mod models;

pub use client::{OmdbClient, OmdbConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::OmdbError;
