//! # Price-level order books for many instruments
//!
//! Keeps every resting limit order of every instrument organized by side,
//! price level and time priority, and answers point queries about a level:
//! best price, order count, aggregate quantity, aggregate notional volume and
//! the orders themselves in priority order.
//!
//! ## Layers
//!
//! 1. [`PriceLevel`]: FIFO queue of orders at one price with running totals
//! 2. [`SideIndex`]: levels of one side kept best-first by a [`LevelOrdering`]
//! 3. [`OrderBook`]: bid and ask sides of one instrument plus an ID lookup
//! 4. [`OrderBookManager`]: books by instrument, created and dropped on demand
//!
//! There is no matching: crossing prices simply rest side by side.
//!
//! ```
//! use orderbook_manager::{Order, OrderBookManager, Side};
//!
//! let mut manager = OrderBookManager::new();
//! manager.add_order(Order::new("b1", "XBT", Side::Buy, 100, 10));
//! manager.add_order(Order::new("b2", "XBT", Side::Buy, 100, 25));
//!
//! assert_eq!(manager.get_best_price("XBT", Side::Buy), 100);
//! assert_eq!(manager.get_total_quantity_at_level("XBT", Side::Buy, 100), 35);
//! assert_eq!(manager.get_best_price("XBT", Side::Sell), -1);
//! ```

#![warn(missing_docs)]

pub mod book;
pub mod config;
pub mod error;
pub mod events;
pub mod level;
pub mod manager;
pub mod metrics;
pub mod shared;
pub mod side;
pub mod types;

// Re-exports for convenience
pub use crate::book::OrderBook;
pub use crate::config::ManagerConfig;
pub use crate::error::{OrderBookError, Result};
pub use crate::events::{OrderEvent, Query, QueryResult, parse_events, read_events};
pub use crate::level::{LevelSummary, PriceLevel};
pub use crate::manager::OrderBookManager;
pub use crate::metrics::{BookMetrics, MetricsSnapshot};
pub use crate::shared::SharedOrderBookManager;
pub use crate::side::{AskOrdering, AskSide, BidOrdering, BidSide, LevelOrdering, SideIndex};
pub use crate::types::{NOT_FOUND, Order, OrderId, Px, Qty, Side, Volume};
