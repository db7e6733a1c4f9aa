//! Single-instrument order book
//!
//! Holds the bid and ask sides of one instrument together with a reverse
//! lookup from order ID to the (side, price) the order rests at, so modify
//! and delete go straight to the right level without scanning either side.
//!
//! Lookups that find nothing are answered with data rather than errors: the
//! scalar queries return [`NOT_FOUND`], the order snapshot is empty, and
//! modify/delete of an unknown ID do nothing.

use crate::level::{LevelSummary, PriceLevel};
use crate::side::{AskSide, BidSide};
use crate::types::{NOT_FOUND, Order, OrderId, Px, Qty, Side};
use ahash::AHashMap;
use tracing::warn;

/// The order book for one instrument
///
/// Two books are equal when they hold the same symbol and the same orders in
/// the same queue positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBook {
    /// Symbol for this order book
    symbol: String,

    /// Bid levels, highest price first
    bids: BidSide,

    /// Ask levels, lowest price first
    asks: AskSide,

    /// Order ID to (side, price) for every resting order on either side
    order_map: AHashMap<OrderId, (Side, Px)>,
}

impl OrderBook {
    /// Create a new order book for a symbol
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::with_capacity(symbol, 0)
    }

    /// Create a new order book with room for `orders` resting orders
    pub fn with_capacity(symbol: impl Into<String>, orders: usize) -> Self {
        Self {
            symbol: symbol.into(),
            bids: BidSide::new(),
            asks: AskSide::new(),
            order_map: AHashMap::with_capacity(orders),
        }
    }

    /// Symbol this book tracks
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Add a new order to the back of its price level
    ///
    /// Returns false, leaving the book unchanged, if an order with the same
    /// ID is already resting here. The order's instrument must match this
    /// book's symbol; debug builds assert it.
    pub fn add_order(&mut self, order: Order) -> bool {
        debug_assert_eq!(
            order.instrument, self.symbol,
            "order {} routed to the wrong book",
            order.id
        );

        if self.order_map.contains_key(&order.id) {
            warn!(
                instrument = %self.symbol,
                order_id = %order.id,
                "duplicate order id ignored"
            );
            return false;
        }

        let (side, price) = (order.side, order.price);
        self.order_map.insert(order.id.clone(), (side, price));

        match side {
            Side::Buy => self.bids.upsert_append(price, order),
            Side::Sell => self.asks.upsert_append(price, order),
        }

        true
    }

    /// Change the quantity of a resting order
    ///
    /// Returns the previous quantity, or `None` if the order is not in this
    /// book. See [`PriceLevel::set_quantity`] for the priority rule.
    pub fn modify_order(&mut self, order_id: &str, new_quantity: Qty) -> Option<Qty> {
        let (side, price) = self.locate(order_id)?;
        self.level_mut(side, price)?.set_quantity(order_id, new_quantity)
    }

    /// Remove a resting order, dropping its level if it was the last one there
    pub fn delete_order(&mut self, order_id: &str) -> Option<Order> {
        let (side, price) = self.locate(order_id)?;

        let removed = self
            .level_mut(side, price)
            .and_then(|level| level.remove(order_id));

        match side {
            Side::Buy => self.bids.remove_if_empty(price),
            Side::Sell => self.asks.remove_if_empty(price),
        };

        self.order_map.remove(order_id);
        removed
    }

    /// Side and price an order rests at
    #[inline]
    pub fn locate(&self, order_id: &str) -> Option<(Side, Px)> {
        self.order_map.get(order_id).copied()
    }

    /// Whether an order with this ID is resting in the book
    #[inline]
    pub fn contains_order(&self, order_id: &str) -> bool {
        self.order_map.contains_key(order_id)
    }

    /// Number of resting orders across both sides
    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_map.len()
    }

    /// True when neither side has any level
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Bid side
    pub fn bids(&self) -> &BidSide {
        &self.bids
    }

    /// Ask side
    pub fn asks(&self) -> &AskSide {
        &self.asks
    }

    /// Level at an exact price on one side
    pub fn level(&self, side: Side, price: Px) -> Option<&PriceLevel> {
        match side {
            Side::Buy => self.bids.level_at(price),
            Side::Sell => self.asks.level_at(price),
        }
    }

    fn level_mut(&mut self, side: Side, price: Px) -> Option<&mut PriceLevel> {
        match side {
            Side::Buy => self.bids.level_at_mut(price),
            Side::Sell => self.asks.level_at_mut(price),
        }
    }

    /// Best price on one side, or `None` when the side is empty
    #[inline]
    pub fn best_price(&self, side: Side) -> Option<Px> {
        match side {
            Side::Buy => self.bids.best_price(),
            Side::Sell => self.asks.best_price(),
        }
    }

    /// Best ask minus best bid, when both sides are populated
    pub fn spread(&self) -> Option<Px> {
        match (self.bids.best_price(), self.asks.best_price()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Top `levels` levels of one side, best first
    pub fn depth(&self, side: Side, levels: usize) -> Vec<LevelSummary> {
        match side {
            Side::Buy => self.bids.depth(levels),
            Side::Sell => self.asks.depth(levels),
        }
    }

    /// Best price on one side, or -1
    pub fn get_best_price(&self, side: Side) -> i64 {
        self.best_price(side).unwrap_or(NOT_FOUND)
    }

    /// Number of orders at a level, or -1
    pub fn get_order_num_at_level(&self, side: Side, price: Px) -> i64 {
        self.level(side, price)
            .map_or(NOT_FOUND, |level| level.order_count() as i64)
    }

    /// Aggregate quantity at a level, or -1
    pub fn get_total_quantity_at_level(&self, side: Side, price: Px) -> i64 {
        self.level(side, price)
            .map_or(NOT_FOUND, PriceLevel::total_quantity)
    }

    /// Aggregate notional volume at a level, or -1
    pub fn get_total_volume_at_level(&self, side: Side, price: Px) -> i64 {
        self.level(side, price)
            .map_or(NOT_FOUND, PriceLevel::total_volume)
    }

    /// Orders at a level in priority order; empty if there is no such level
    pub fn get_orders_at_level(&self, side: Side, price: Px) -> Vec<Order> {
        self.level(side, price)
            .map(PriceLevel::snapshot)
            .unwrap_or_default()
    }
}
