use thiserror::Error;

/// Failure modes of a call against the scoring service.
///
/// The UI never shows these verbatim; every variant collapses into the
/// region's fixed "operation failed" message and the detail goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("input is empty after trimming")]
    EmptyInput,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("response is not valid JSON for this endpoint: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response shape violates the contract: {0}")]
    Shape(String),
}
