//! Error types for the fallible edges of the crate
//!
//! Book and manager operations never fail: missing orders, levels and
//! instruments are reported as data. Only reading configuration and decoding
//! event feeds can go wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or event feeds
#[derive(Debug, Error)]
pub enum OrderBookError {
    /// A file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A line of an event feed is not a valid event
    #[error("invalid event on line {line}: {source}")]
    Decode {
        /// 1-based line number in the feed
        line: usize,
        /// JSON decoding failure
        #[source]
        source: serde_json::Error,
    },

    /// The configuration document is malformed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for the fallible parts of this crate
pub type Result<T> = std::result::Result<T, OrderBookError>;
