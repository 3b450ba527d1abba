use thiserror::Error;

/// Errors that can occur within a `SeriesProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, bad JSON).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-success status with this body.
    #[error("API error: {0}")]
    Api(String),

    /// The request parameters were invalid before any request was issued.
    #[error("Invalid parameters for provider: {0}")]
    Validation(String),
}

/// Errors while constructing a provider, before any request is made.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// The backend base URL was not configured.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
