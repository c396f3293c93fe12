use thiserror::Error;

/// Errors that can end a catalog fetch.
///
/// The taxonomy is flat on purpose: callers get the kind of failure and a message,
/// never the underlying cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint URL could not be constructed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx status code or a transport-level failure
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The payload did not have the expected shape
    #[error("Failed to decode response: {0}")]
    DecodeFailed(String),

    /// The lookup succeeded but returned no record
    #[error("Recipe not found")]
    NotFound,
}

impl FetchError {
    /// Short stable name of the error kind, used in logs and CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl(_) => "invalid_url",
            FetchError::InvalidResponse(_) => "invalid_response",
            FetchError::DecodeFailed(_) => "decode_failed",
            FetchError::NotFound => "not_found",
        }
    }
}

/// Errors raised at the transport boundary.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Failed to perform the HTTP request or read its body
    #[error("Failed to fetch URL: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::InvalidResponse(err.to_string())
    }
}

/// Errors from the convenience entry points that also load configuration
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A catalog call failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The HTTP transport could not be set up
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
