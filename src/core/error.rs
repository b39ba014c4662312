//! Failures surfaced by scheme resolution

/// Terminal failures of a single resolve call. The caller decides whether to retry.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Transport failure or non-success HTTP status.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// Response body did not match the expected shape.
    #[error("unexpected search response: {0}")]
    SchemaMismatch(String),

    /// The query matched no schemes.
    #[error("no schemes matched '{0}'")]
    EmptyResult(String),
}

impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ResolveError::SchemaMismatch(err.to_string())
        } else {
            ResolveError::NetworkFailure(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        ResolveError::SchemaMismatch(err.to_string())
    }
}
