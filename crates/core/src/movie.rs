//! Field rules for movie records.
//!
//! The length limits mirror the `movies` table definition and the request
//! DTO validators; keep the three in sync.

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: u64 = 255;

/// Maximum year length in characters. Years are kept as provider-formatted
/// strings, so ranges such as `2019–2021` fit.
pub const YEAR_MAX_LEN: u64 = 10;

/// Human-readable entity name used in not-found errors.
pub const ENTITY_MOVIE: &str = "Movie";

/// Collapse an empty or whitespace-only optional field to `None`.
///
/// Clients and the provider both use empty strings for "unknown"; the
/// catalog stores those as absent so natural-key lookups treat them alike.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns `true` if `year` is within [`YEAR_MAX_LEN`] characters.
pub fn year_within_limit(year: &str) -> bool {
    year.chars().count() as u64 <= YEAR_MAX_LEN
}
