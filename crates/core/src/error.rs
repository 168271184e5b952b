use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The external metadata provider could not be reached or answered
    /// with something unusable.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}
