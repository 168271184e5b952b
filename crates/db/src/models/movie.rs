//! Movie entity model and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};
use reelbase_core::movie::{blank_to_none, year_within_limit};
use reelbase_core::types::DbId;

/// Default page size for movie listing.
pub const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for movie listing.
pub const MAX_LIMIT: i64 = 100;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: Option<String>,
    pub description: Option<String>,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(max = 10))]
    pub year: Option<String>,
    pub description: Option<String>,
}

impl CreateMovie {
    /// Collapse blank `year`/`description` to absent.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title,
            year: blank_to_none(self.year),
            description: blank_to_none(self.description),
        }
    }
}

/// DTO for updating an existing movie.
///
/// Only fields present in the request body are applied. `year` and
/// `description` distinguish "omitted" (`None`) from "explicitly null"
/// (`Some(None)`), the latter clearing the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_update_year"))]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present_field")]
    pub year: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_field")]
    pub description: Option<Option<String>>,
}

impl UpdateMovie {
    /// Collapse blank `year`/`description` values to an explicit clear.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title,
            year: self.year.map(blank_to_none),
            description: self.description.map(blank_to_none),
        }
    }
}

/// Query parameters for `GET /movies/`.
///
/// `q` is accepted for client compatibility but not applied as a filter.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub q: Option<String>,
}

impl MovieListParams {
    /// Rows to skip, never negative.
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    /// Page size, clamped to `0..=MAX_LIMIT`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
    }
}

/// Deserialize a field that is present in the body, mapping `null` to
/// `Some(None)`. Combined with `#[serde(default)]`, a missing field stays
/// `None`.
fn present_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn validate_update_year(dto: &UpdateMovie) -> Result<(), ValidationError> {
    match &dto.year {
        Some(Some(year)) if !year_within_limit(year) => Err(ValidationError::new("length")
            .with_message("year must be at most 10 characters".into())),
        _ => Ok(()),
    }
}
