//! Registry of order books keyed by instrument
//!
//! Books are created the first time an order arrives for an instrument and
//! dropped as soon as their last order is deleted, so the registry only ever
//! holds instruments with resting orders. An unknown instrument therefore
//! answers every query exactly like an empty level.

use crate::book::OrderBook;
use crate::config::ManagerConfig;
use crate::events::{OrderEvent, Query, QueryResult};
use crate::metrics::{BookMetrics, MetricsSnapshot};
use crate::types::{NOT_FOUND, Order, OrderId, Px, Qty, Side};
use ahash::AHashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, info, warn};

/// Routes order operations and queries to per-instrument books
#[derive(Debug, Clone)]
pub struct OrderBookManager {
    /// Live books by instrument symbol
    books: AHashMap<String, OrderBook>,
    /// Instrument of every live order
    instrument_by_order: AHashMap<OrderId, String>,
    config: ManagerConfig,
    metrics: BookMetrics,
}

impl OrderBookManager {
    /// Create a manager with default sizing
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    /// Create a manager with explicit sizing
    pub fn with_config(config: ManagerConfig) -> Self {
        Self {
            books: AHashMap::with_capacity(config.initial_instrument_capacity),
            instrument_by_order: AHashMap::with_capacity(config.initial_order_capacity),
            config,
            metrics: BookMetrics::new(),
        }
    }

    /// Configuration this manager was built with
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Add an order to its instrument's book, creating the book if needed
    ///
    /// Returns false, changing nothing, if the order ID is already live in
    /// any book.
    pub fn add_order(&mut self, order: Order) -> bool {
        if let Some(existing) = self.instrument_by_order.get(&order.id) {
            warn!(
                order_id = %order.id,
                instrument = %existing,
                "duplicate order id ignored"
            );
            self.metrics.record_duplicate();
            return false;
        }

        let id = order.id.clone();
        let instrument = order.instrument.clone();
        let (price, quantity) = (order.price, order.quantity);

        let book = match self.books.entry(instrument.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                info!(instrument = %entry.key(), "order book created");
                self.metrics.record_book_created();
                entry.insert(OrderBook::with_capacity(
                    instrument.clone(),
                    self.config.book_order_capacity,
                ))
            }
        };

        if !book.add_order(order) {
            return false;
        }

        debug!(order_id = %id, instrument = %instrument, price, quantity, "order added");
        self.instrument_by_order.insert(id, instrument);
        self.metrics.record_order_add(quantity);
        true
    }

    /// Replace the quantity of a live order
    ///
    /// Returns the previous quantity, or `None` if the order is not live.
    pub fn modify_order(&mut self, order_id: &str, new_quantity: Qty) -> Option<Qty> {
        let Some(instrument) = self.instrument_by_order.get(order_id) else {
            debug!(order_id, "modify for unknown order ignored");
            self.metrics.record_unknown_order();
            return None;
        };

        let previous = self
            .books
            .get_mut(instrument)
            .and_then(|book| book.modify_order(order_id, new_quantity));

        if let Some(old_quantity) = previous {
            debug!(order_id, old_quantity, new_quantity, "order modified");
            self.metrics.record_order_modify();
        }
        previous
    }

    /// Delete a live order, dropping its book if nothing else rests there
    ///
    /// Returns the removed order, or `None` if the order is not live.
    pub fn delete_order(&mut self, order_id: &str) -> Option<Order> {
        let Some(instrument) = self.instrument_by_order.remove(order_id) else {
            debug!(order_id, "delete for unknown order ignored");
            self.metrics.record_unknown_order();
            return None;
        };

        let book = self.books.get_mut(&instrument)?;
        let removed = book.delete_order(order_id);

        if book.is_empty() {
            self.books.remove(&instrument);
            info!(instrument = %instrument, "order book removed");
            self.metrics.record_book_removed();
        }

        if let Some(order) = &removed {
            debug!(order_id, instrument = %instrument, "order deleted");
            self.metrics.record_order_delete(order.quantity);
        }
        removed
    }

    /// Apply a feed event, returning whether it changed any book
    pub fn apply(&mut self, event: OrderEvent) -> bool {
        match event {
            OrderEvent::Add(order) => self.add_order(order),
            OrderEvent::Modify { id, quantity } => {
                self.modify_order(id.as_str(), quantity).is_some()
            }
            OrderEvent::Delete { id } => self.delete_order(id.as_str()).is_some(),
        }
    }

    /// Answer a query
    pub fn query(&self, query: &Query) -> QueryResult {
        match query {
            Query::BestPrice { instrument, side } => {
                QueryResult::Scalar(self.get_best_price(instrument, *side))
            }
            Query::OrderNum {
                instrument,
                side,
                price,
            } => QueryResult::Scalar(self.get_order_num_at_level(instrument, *side, *price)),
            Query::TotalQuantity {
                instrument,
                side,
                price,
            } => QueryResult::Scalar(self.get_total_quantity_at_level(instrument, *side, *price)),
            Query::TotalVolume {
                instrument,
                side,
                price,
            } => QueryResult::Scalar(self.get_total_volume_at_level(instrument, *side, *price)),
            Query::Orders {
                instrument,
                side,
                price,
            } => QueryResult::Orders(self.get_orders_at_level(instrument, *side, *price)),
        }
    }

    /// Best price for an instrument and side, or -1
    pub fn get_best_price(&self, instrument: &str, side: Side) -> i64 {
        self.books
            .get(instrument)
            .map_or(NOT_FOUND, |book| book.get_best_price(side))
    }

    /// Number of orders at a level, or -1
    pub fn get_order_num_at_level(&self, instrument: &str, side: Side, price: Px) -> i64 {
        self.books
            .get(instrument)
            .map_or(NOT_FOUND, |book| book.get_order_num_at_level(side, price))
    }

    /// Aggregate quantity at a level, or -1
    pub fn get_total_quantity_at_level(&self, instrument: &str, side: Side, price: Px) -> i64 {
        self.books
            .get(instrument)
            .map_or(NOT_FOUND, |book| {
                book.get_total_quantity_at_level(side, price)
            })
    }

    /// Aggregate notional volume at a level, or -1
    pub fn get_total_volume_at_level(&self, instrument: &str, side: Side, price: Px) -> i64 {
        self.books
            .get(instrument)
            .map_or(NOT_FOUND, |book| {
                book.get_total_volume_at_level(side, price)
            })
    }

    /// Orders at a level in priority order; empty when nothing is there
    pub fn get_orders_at_level(&self, instrument: &str, side: Side, price: Px) -> Vec<Order> {
        self.books
            .get(instrument)
            .map(|book| book.get_orders_at_level(side, price))
            .unwrap_or_default()
    }

    /// Book for an instrument, if it has resting orders
    pub fn book(&self, instrument: &str) -> Option<&OrderBook> {
        self.books.get(instrument)
    }

    /// Instruments with resting orders, in no particular order
    pub fn instruments(&self) -> impl Iterator<Item = &str> + '_ {
        self.books.keys().map(String::as_str)
    }

    /// Instrument a live order belongs to
    pub fn instrument_of(&self, order_id: &str) -> Option<&str> {
        self.instrument_by_order.get(order_id).map(String::as_str)
    }

    /// Whether an order is live in any book
    pub fn contains_order(&self, order_id: &str) -> bool {
        self.instrument_by_order.contains_key(order_id)
    }

    /// Number of live books
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of live orders across all books
    pub fn order_count(&self) -> usize {
        self.instrument_by_order.len()
    }

    /// Counters and gauges at this instant
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics
            .snapshot(self.books.len(), self.instrument_by_order.len())
    }
}

/// Managers are equal when they hold equal books; configuration and
/// counters are not compared.
impl PartialEq for OrderBookManager {
    fn eq(&self, other: &Self) -> bool {
        self.books == other.books && self.instrument_by_order == other.instrument_by_order
    }
}

impl Eq for OrderBookManager {}

impl Default for OrderBookManager {
    fn default() -> Self {
        Self::new()
    }
}
