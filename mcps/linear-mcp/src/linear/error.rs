//! Error types for Linear API operations

use thiserror::Error;

/// Errors raised by the GraphQL transport and session layer
#[derive(Error, Debug)]
pub enum LinearError {
    /// No API key was configured, so no session could be established
    #[error("not authenticated with Linear - set LINEAR_API_KEY or api_key in the config file")]
    NotAuthenticated,

    /// The HTTP request itself failed (connection, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Linear answered with a non-success HTTP status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if readable
        message: String,
    },

    /// The response carried a GraphQL `errors` array
    #[error("GraphQL errors: {}", messages.join(", "))]
    GraphQL { messages: Vec<String> },

    /// The response had neither `data` nor `errors`
    #[error("empty response from Linear API")]
    EmptyResponse,

    /// The `data` object did not match the expected shape
    #[error("failed to decode Linear response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for Linear API operations
pub type LinearResult<T> = Result<T, LinearError>;
