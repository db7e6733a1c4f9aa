//! Manager configuration

use crate::error::{OrderBookError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sizing and presentation settings for an [`OrderBookManager`]
///
/// Missing fields in a configuration file fall back to the defaults.
///
/// [`OrderBookManager`]: crate::OrderBookManager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Instruments to reserve registry room for
    pub initial_instrument_capacity: usize,
    /// Live orders to reserve room for in the order-to-instrument map
    pub initial_order_capacity: usize,
    /// Live orders to reserve room for in each newly created book
    pub book_order_capacity: usize,
    /// Number of levels per side printed by the CLI
    pub default_depth: usize,
    /// `tracing` filter directive used by the binary
    pub log_filter: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            initial_instrument_capacity: 64,
            initial_order_capacity: 10_000,
            book_order_capacity: 256,
            default_depth: 5,
            log_filter: "orderbook_manager=info".to_string(),
        }
    }
}

impl ManagerConfig {
    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| OrderBookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
