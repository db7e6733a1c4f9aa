//! A single price level: FIFO order queue with running aggregates

use crate::types::{Order, Px, Qty, Volume};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// All resting orders at one price on one side of one book
///
/// Queue position is priority: the front order arrived first. Quantity and
/// notional totals are kept in step with every mutation so reads never
/// recompute them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    /// Price of this level
    price: Px,
    /// Sum of order quantities at this level
    total_quantity: Qty,
    /// Sum of price × quantity over the orders at this level
    total_volume: Volume,
    /// Individual orders in priority order
    orders: SmallVec<[Order; 8]>,
}

/// Copy of a level's headline numbers, used when enumerating a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    /// Price of the level
    pub price: Px,
    /// Number of resting orders
    pub order_count: usize,
    /// Aggregate quantity
    pub total_quantity: Qty,
    /// Aggregate notional volume
    pub total_volume: Volume,
}

impl PriceLevel {
    /// Create a new, empty price level
    pub fn new(price: Px) -> Self {
        Self {
            price,
            total_quantity: 0,
            total_volume: 0,
            orders: SmallVec::new(),
        }
    }

    /// Add an order at the back of the queue
    pub fn append(&mut self, order: Order) {
        self.total_quantity += order.quantity;
        self.total_volume += order.volume();
        self.orders.push(order);
    }

    /// Remove an order by ID, keeping the relative order of the rest
    ///
    /// Returns `None` and leaves the level untouched if no order has that ID.
    pub fn remove(&mut self, order_id: &str) -> Option<Order> {
        let pos = self.position(order_id)?;
        let order = self.orders.remove(pos);

        self.total_quantity -= order.quantity;
        self.total_volume -= order.volume();

        Some(order)
    }

    /// Change the quantity of a resting order, returning the previous quantity
    ///
    /// Growing an order sends it to the back of the queue. Shrinking it, or
    /// setting the same quantity, keeps its place.
    pub fn set_quantity(&mut self, order_id: &str, new_quantity: Qty) -> Option<Qty> {
        let pos = self.position(order_id)?;
        let old_quantity = self.orders[pos].quantity;

        self.total_quantity -= old_quantity;
        self.total_volume -= self.orders[pos].volume();

        if new_quantity > old_quantity {
            let mut order = self.orders.remove(pos);
            order.quantity = new_quantity;
            self.append(order);
        } else {
            let order = &mut self.orders[pos];
            order.quantity = new_quantity;
            self.total_quantity += order.quantity;
            self.total_volume += order.volume();
        }

        Some(old_quantity)
    }

    #[inline]
    fn position(&self, order_id: &str) -> Option<usize> {
        self.orders.iter().position(|o| o.id.as_str() == order_id)
    }

    /// Price of this level
    #[inline]
    pub fn price(&self) -> Px {
        self.price
    }

    /// Number of orders at this level
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Total quantity at this level
    #[inline]
    pub fn total_quantity(&self) -> Qty {
        self.total_quantity
    }

    /// Total notional volume at this level
    #[inline]
    pub fn total_volume(&self) -> Volume {
        self.total_volume
    }

    /// True once the last order has left
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Whether an order with this ID rests here
    pub fn contains(&self, order_id: &str) -> bool {
        self.position(order_id).is_some()
    }

    /// Order with the highest time priority
    pub fn front(&self) -> Option<&Order> {
        self.orders.first()
    }

    /// Borrowed view of the queue in priority order
    #[inline]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Owned copy of the queue in priority order
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.to_vec()
    }

    /// Headline numbers for this level
    pub fn summary(&self) -> LevelSummary {
        LevelSummary {
            price: self.price,
            order_count: self.order_count(),
            total_quantity: self.total_quantity,
            total_volume: self.total_volume,
        }
    }
}
