//! OMDb wire formats.
//!
//! Every OMDb response carries a `"Response": "True" | "False"` discriminator.
//! Failures additionally carry `"Error"`, successes carry the payload.

use serde::Deserialize;
use reelbase_core::metadata::MovieMetadata;

/// Placeholder OMDb uses for unknown fields.
const NOT_AVAILABLE: &str = "N/A";

/// Body of `GET /?t=<title>`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TitleResponse {
    pub response: String,
    pub title: Option<String>,
    pub year: Option<String>,
    pub plot: Option<String>,
    pub error: Option<String>,
}

impl TitleResponse {
    /// Normalize into catalog metadata.
    ///
    /// Returns `None` for a `"False"` response or one without a usable title.
    pub fn into_metadata(self) -> Option<MovieMetadata> {
        if !is_success(&self.response) {
            return None;
        }
        Some(MovieMetadata {
            title: known(self.title)?,
            year: known(self.year),
            description: known(self.plot),
        })
    }
}

/// Body of `GET /?s=<keyword>&type=movie`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    pub response: String,
    #[serde(default)]
    pub search: Vec<SearchItem>,
    pub error: Option<String>,
}

/// One entry of a search result list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchItem {
    pub title: Option<String>,
    pub year: Option<String>,
}

impl SearchResponse {
    /// The first `limit` entries that carry a title.
    ///
    /// The limit is applied to the raw list before entries without a title
    /// are dropped, so fewer than `limit` titles may come back.
    pub fn into_titles(self, limit: usize) -> Vec<String> {
        if !is_success(&self.response) {
            return Vec::new();
        }
        self.search
            .into_iter()
            .take(limit)
            .filter_map(|item| known(item.title))
            .collect()
    }
}

fn is_success(response: &str) -> bool {
    response.eq_ignore_ascii_case("true")
}

/// Drop empty strings and OMDb's `N/A` placeholder.
fn known(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != NOT_AVAILABLE)
}
