use reelbase_core::metadata::ProviderError;

/// Errors from the OMDb REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum OmdbError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout) or the
    /// body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OMDb returned a non-2xx status code with a body that is not an OMDb
    /// payload.
    #[error("OMDb API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<OmdbError> for ProviderError {
    fn from(err: OmdbError) -> Self {
        match err {
            OmdbError::Request(e) if e.is_decode() => ProviderError::Decode(e.to_string()),
            OmdbError::Request(e) => ProviderError::Transport(e.to_string()),
            OmdbError::Api { status, .. } => ProviderError::Status { status },
        }
    }
}
