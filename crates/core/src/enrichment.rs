//! Filling gaps in a submitted movie from provider metadata.
//!
//! Pure functions only: the HTTP layer decides when to call the provider,
//! this module decides whether it should and how results merge.

use crate::metadata::MovieMetadata;

/// The optional fields of a submission, after blank normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub year: Option<String>,
    pub description: Option<String>,
}

impl Submission {
    /// A lookup is needed when either optional field is missing.
    pub fn needs_enrichment(&self) -> bool {
        self.year.is_none() || self.description.is_none()
    }

    /// Merge provider data into the submission.
    ///
    /// Values the client supplied always win; the provider only fills fields
    /// that are still absent. The provider's title is ignored.
    pub fn enrich(self, metadata: Option<MovieMetadata>) -> Self {
        let Some(metadata) = metadata else {
            return self;
        };
        Self {
            year: self.year.or(metadata.year),
            description: self.description.or(metadata.description),
        }
    }
}
