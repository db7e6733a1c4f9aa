//! Event and query types for driving a manager from a feed
//!
//! Events are encoded as JSON objects tagged by `"type"`, one per line:
//!
//! ```text
//! {"type":"add","id":"b1","instrument":"XBT","side":"buy","price":100,"quantity":10}
//! {"type":"modify","id":"b1","quantity":20}
//! {"type":"delete","id":"b1"}
//! ```

use crate::error::{OrderBookError, Result};
use crate::types::{Order, OrderId, Px, Qty, Side};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mutation applied to an order book manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OrderEvent {
    /// New order added to its instrument's book
    Add(Order),
    /// Existing order's quantity replaced
    Modify {
        /// Order to change
        id: OrderId,
        /// New quantity, not a delta
        quantity: Qty,
    },
    /// Order removed from its book
    Delete {
        /// Order to remove
        id: OrderId,
    },
}

impl OrderEvent {
    /// ID of the order this event refers to
    pub fn order_id(&self) -> &OrderId {
        match self {
            OrderEvent::Add(order) => &order.id,
            OrderEvent::Modify { id, .. } | OrderEvent::Delete { id } => id,
        }
    }
}

/// Read-only question about one instrument's book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Best price on one side
    BestPrice {
        /// Instrument symbol
        instrument: String,
        /// Side to inspect
        side: Side,
    },
    /// Number of orders at a level
    OrderNum {
        /// Instrument symbol
        instrument: String,
        /// Side to inspect
        side: Side,
        /// Level price
        price: Px,
    },
    /// Aggregate quantity at a level
    TotalQuantity {
        /// Instrument symbol
        instrument: String,
        /// Side to inspect
        side: Side,
        /// Level price
        price: Px,
    },
    /// Aggregate notional volume at a level
    TotalVolume {
        /// Instrument symbol
        instrument: String,
        /// Side to inspect
        side: Side,
        /// Level price
        price: Px,
    },
    /// Orders at a level in priority order
    Orders {
        /// Instrument symbol
        instrument: String,
        /// Side to inspect
        side: Side,
        /// Level price
        price: Px,
    },
}

/// Answer to a [`Query`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResult {
    /// Price, count, quantity or volume; -1 when nothing is there
    Scalar(i64),
    /// Order snapshot; empty when nothing is there
    Orders(Vec<Order>),
}

/// Decode a JSON-lines event feed
///
/// Blank lines and lines starting with `#` are skipped. Decoding stops at the
/// first bad line.
pub fn parse_events(input: &str) -> Result<Vec<OrderEvent>> {
    let mut events = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event = serde_json::from_str(line).map_err(|source| OrderBookError::Decode {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }

    Ok(events)
}

/// Read and decode a JSON-lines event file
pub fn read_events(path: impl AsRef<Path>) -> Result<Vec<OrderEvent>> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| OrderBookError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_events(&input)
}
