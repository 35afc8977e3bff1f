//! Core error types for deskclock-core.
//!
//! The timer and mode manager are total and never return these; they show
//! up at the edges (storage backends, configuration files, the weather API).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deskclock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Key-value store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Weather lookup errors
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),
}

/// Errors raised by a [`KvStore`](crate::storage::KvStore) backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Store is locked")]
    Locked,

    /// Storage is not available at all (e.g. disabled or read-only)
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Weather panel errors.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// City rejected by the API
    #[error("City \"{0}\" not found.")]
    CityNotFound(String),

    /// API key rejected
    #[error("Invalid API key or unauthorized.")]
    Unauthorized,

    /// Any other non-success HTTP status
    #[error("API Error: {status}")]
    Api { status: u16 },

    /// IP geolocation lookup failed
    #[error("Geolocation failed: {0}")]
    Geolocation(String),

    /// Empty city submitted by the user
    #[error("Please enter a city name.")]
    EmptyCity,

    /// Endpoint URL could not be built
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// Transport or decode failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _msg) => {
                if code.code == rusqlite::ErrorCode::DatabaseBusy
                    || code.code == rusqlite::ErrorCode::DatabaseLocked
                {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}
