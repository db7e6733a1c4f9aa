//! Value types shared by every layer of the book
//!
//! Prices, quantities and notional volumes are plain 64-bit integers. Callers
//! are expected to hand in positive prices and quantities; nothing in this
//! crate validates them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Limit price in integer ticks
pub type Px = i64;

/// Order quantity in integer lots
pub type Qty = i64;

/// Notional volume (price × quantity) summed over a level
pub type Volume = i64;

/// Value returned by the scalar queries when nothing lives at the requested
/// instrument, side or price
pub const NOT_FOUND: i64 = -1;

/// Side of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy side (bids)
    Buy,
    /// Sell side (asks/offers)
    Sell,
}

impl Side {
    /// Check if this is the buy side
    #[inline]
    pub fn is_buy(&self) -> bool {
        matches!(self, Side::Buy)
    }

    /// Get the opposite side
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.pad("buy"),
            Side::Sell => f.pad("sell"),
        }
    }
}

/// Caller-supplied opaque order identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wrap an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OrderId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Individual resting limit order
///
/// Everything except `quantity` is fixed once the order has been added to a
/// book. Orders handed back by queries are copies; editing them does not
/// touch the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier
    pub id: OrderId,
    /// Instrument symbol the order trades
    pub instrument: String,
    /// Side of the order
    pub side: Side,
    /// Limit price
    pub price: Px,
    /// Remaining quantity
    pub quantity: Qty,
}

impl Order {
    /// Create a new order
    pub fn new(
        id: impl Into<OrderId>,
        instrument: impl Into<String>,
        side: Side,
        price: Px,
        quantity: Qty,
    ) -> Self {
        Self {
            id: id.into(),
            instrument: instrument.into(),
            side,
            price,
            quantity,
        }
    }

    /// Notional contribution of this order (price × quantity)
    #[inline]
    pub fn volume(&self) -> Volume {
        self.price * self.quantity
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}@{}",
            self.id, self.instrument, self.side, self.quantity, self.price
        )
    }
}
