//! Error types for pennywise-core
//!
//! Library consumers get structured errors; the `pennywise` binary wraps
//! them with `anyhow` context.

use thiserror::Error;

/// Boxed driver error kept as the source of a [`DbError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the connection manager
#[derive(Error, Debug)]
pub enum DbError {
    /// One or more required configuration values are missing or empty
    #[error("missing required configuration: {}", .missing.join(", "))]
    Configuration { missing: Vec<&'static str> },

    /// Opening the underlying connection failed
    #[error("unable to connect to the database: {source}")]
    Connection {
        #[source]
        source: BoxError,
    },

    /// A command against an open handle failed
    #[error("database command failed: {source}")]
    Command {
        #[source]
        source: BoxError,
    },
}

/// Result type alias for pennywise-core operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a configuration error for the given keys
    pub fn configuration(missing: Vec<&'static str>) -> Self {
        Self::Configuration { missing }
    }

    /// Wrap a driver error raised while connecting
    pub fn connection(source: impl Into<BoxError>) -> Self {
        Self::Connection {
            source: source.into(),
        }
    }

    /// Wrap a driver error raised while running a command
    pub fn command(source: impl Into<BoxError>) -> Self {
        Self::Command {
            source: source.into(),
        }
    }
}
