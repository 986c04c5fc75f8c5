//! Error type for character fetches.

use rickdex_core::CoreError;
use thiserror::Error;

/// Result type alias using `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Reasons a character fetch can fail.
///
/// The browse page does not distinguish between them; it shows the
/// display text as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// Error reported by the GraphQL server, verbatim.
    #[error("{0}")]
    GraphQl(String),

    /// Response body was not the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Create a new network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a new decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<ClientError> for CoreError {
    fn from(err: ClientError) -> Self {
        CoreError::fetch_failed(err.to_string())
    }
}
