//! Error types for Vine App.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur anywhere in Vine App.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid pagination, sort or lookup arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP/network failure talking to the GraphQL endpoint
    #[error("Request error: {0}")]
    Request(String),

    /// The GraphQL endpoint answered with `errors[]`
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// A payload did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            Error::Request(_) | Error::Graphql(_) | Error::Malformed(_) => 502,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(err.to_string())
    }
}
