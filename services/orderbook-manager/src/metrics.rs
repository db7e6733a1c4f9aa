//! Operation counters for an order book manager
//!
//! Counters are plain integers: the manager that owns them is only ever
//! mutated through `&mut self`.

use crate::types::Qty;
use serde::{Deserialize, Serialize};

/// Running counts of what a manager has done since it was created
#[derive(Debug, Clone, Default)]
pub struct BookMetrics {
    orders_added: u64,
    orders_modified: u64,
    orders_deleted: u64,
    unknown_order_ops: u64,
    duplicate_orders_rejected: u64,
    books_created: u64,
    books_removed: u64,
    quantity_added: i64,
    quantity_deleted: i64,
}

impl BookMetrics {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted add
    #[inline]
    pub fn record_order_add(&mut self, quantity: Qty) {
        self.orders_added += 1;
        self.quantity_added += quantity;
    }

    /// Record a modify that found its order
    #[inline]
    pub fn record_order_modify(&mut self) {
        self.orders_modified += 1;
    }

    /// Record a delete that found its order
    #[inline]
    pub fn record_order_delete(&mut self, quantity: Qty) {
        self.orders_deleted += 1;
        self.quantity_deleted += quantity;
    }

    /// Record a modify or delete for an ID that is not live
    #[inline]
    pub fn record_unknown_order(&mut self) {
        self.unknown_order_ops += 1;
    }

    /// Record an add rejected because its ID is already live
    #[inline]
    pub fn record_duplicate(&mut self) {
        self.duplicate_orders_rejected += 1;
    }

    /// Record a lazily created book
    #[inline]
    pub fn record_book_created(&mut self) {
        self.books_created += 1;
    }

    /// Record a book dropped after its last order left
    #[inline]
    pub fn record_book_removed(&mut self) {
        self.books_removed += 1;
    }

    /// Freeze the counters together with the manager's current gauges
    pub fn snapshot(&self, live_books: usize, live_orders: usize) -> MetricsSnapshot {
        MetricsSnapshot {
            orders_added: self.orders_added,
            orders_modified: self.orders_modified,
            orders_deleted: self.orders_deleted,
            unknown_order_ops: self.unknown_order_ops,
            duplicate_orders_rejected: self.duplicate_orders_rejected,
            books_created: self.books_created,
            books_removed: self.books_removed,
            quantity_added: self.quantity_added,
            quantity_deleted: self.quantity_deleted,
            live_books,
            live_orders,
        }
    }
}

/// Point-in-time copy of [`BookMetrics`] plus live gauges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Accepted adds
    pub orders_added: u64,
    /// Modifies that found their order
    pub orders_modified: u64,
    /// Deletes that found their order
    pub orders_deleted: u64,
    /// Modifies and deletes for IDs that were not live
    pub unknown_order_ops: u64,
    /// Adds rejected for reusing a live ID
    pub duplicate_orders_rejected: u64,
    /// Books created on first order
    pub books_created: u64,
    /// Books dropped after their last order
    pub books_removed: u64,
    /// Quantity brought in by accepted adds
    pub quantity_added: i64,
    /// Quantity taken out by deletes
    pub quantity_deleted: i64,
    /// Instruments with at least one resting order
    pub live_books: usize,
    /// Resting orders across all books
    pub live_orders: usize,
}

impl MetricsSnapshot {
    /// Format metrics as a report
    #[must_use]
    pub fn format_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Order Book Manager Metrics ===\n");
        report.push_str(&format!(
            "Orders: {} added, {} modified, {} deleted\n",
            self.orders_added, self.orders_modified, self.orders_deleted
        ));
        report.push_str(&format!(
            "Ignored: {} unknown ids, {} duplicate ids\n",
            self.unknown_order_ops, self.duplicate_orders_rejected
        ));
        report.push_str(&format!(
            "Quantity: {} added, {} deleted\n",
            self.quantity_added, self.quantity_deleted
        ));
        report.push_str(&format!(
            "Books: {} created, {} removed, {} live\n",
            self.books_created, self.books_removed, self.live_books
        ));
        report.push_str(&format!("Live orders: {}\n", self.live_orders));
        report
    }
}
