//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Movie Catalog Cache
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream catalog request failed (non-2xx, network error, timeout, bad body)
    ///
    /// Never cached. The next read of the same key retries the fetch.
    #[error("Upstream fetch failed for '{endpoint}': {message}")]
    FetchFailure {
        /// Endpoint key that was being fetched
        endpoint: String,
        /// HTTP status returned by the upstream, if a response was received
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },

    /// Materialized cache storage could not be reached
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        /// Description of the storage failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Fetch and storage error creation methods
impl Error {
    /// Create a fetch failure that never reached a response
    pub fn fetch<E: Into<String>, S: Into<String>>(endpoint: E, message: S) -> Self {
        Self::FetchFailure {
            endpoint: endpoint.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Create a fetch failure for a non-success HTTP status
    pub fn fetch_status<E: Into<String>, S: Into<String>>(
        endpoint: E,
        status: u16,
        message: S,
    ) -> Self {
        Self::FetchFailure {
            endpoint: endpoint.into(),
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create a storage unavailable error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage unavailable error with source
    pub fn storage_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// General error creation methods
impl Error {
    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification
impl Error {
    /// Whether a later attempt of the same operation may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::FetchFailure { .. } | Self::StorageUnavailable { .. }
        )
    }

    /// Whether this error is an upstream fetch failure
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailure { .. })
    }

    /// HTTP status reported by the upstream, when the error carries one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::FetchFailure { status, .. } => *status,
            _ => None,
        }
    }
}
