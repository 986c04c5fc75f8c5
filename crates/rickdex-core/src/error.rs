//! Error types for the Rickdex core library.

use thiserror::Error;

use crate::filter::FilterDimension;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Rickdex.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The character fetch failed. Displays the raw message only.
    #[error("{0}")]
    FetchFailed(String),

    /// A filter value that none of the options of its dimension accept.
    #[error("Unknown {dimension} filter value: {value:?}")]
    UnknownFilterValue {
        dimension: FilterDimension,
        value: String,
    },
}

impl CoreError {
    /// Create a new fetch error from any message.
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed(message.into())
    }

    /// Create a new unknown filter value error.
    pub fn unknown_filter_value(dimension: FilterDimension, value: impl Into<String>) -> Self {
        Self::UnknownFilterValue {
            dimension,
            value: value.into(),
        }
    }
}
