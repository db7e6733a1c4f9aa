//! One side of a book: price levels kept in best-first order
//!
//! The ordering is a type parameter rather than a runtime flag. Bids key
//! their `BTreeMap` by `Reverse<Px>` so iteration yields the highest price
//! first; asks key by the plain price so iteration yields the lowest first.

use crate::level::{LevelSummary, PriceLevel};
use crate::types::{Order, Px, Side};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Price ordering policy for one side of the book
pub trait LevelOrdering {
    /// Map key whose natural order is best-first for this side
    type Key: Ord + Copy + fmt::Debug;

    /// Side this ordering belongs to
    const SIDE: Side;

    /// Key under which a level at `price` is stored
    fn key(price: Px) -> Self::Key;
}

/// Descending prices: best bid is the highest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BidOrdering;

impl LevelOrdering for BidOrdering {
    type Key = Reverse<Px>;
    const SIDE: Side = Side::Buy;

    #[inline]
    fn key(price: Px) -> Self::Key {
        Reverse(price)
    }
}

/// Ascending prices: best ask is the lowest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AskOrdering;

impl LevelOrdering for AskOrdering {
    type Key = Px;
    const SIDE: Side = Side::Sell;

    #[inline]
    fn key(price: Px) -> Self::Key {
        price
    }
}

/// Price-indexed levels for a single side
///
/// Every level present holds at least one order; callers that drain a level
/// must follow up with [`SideIndex::remove_if_empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideIndex<O: LevelOrdering> {
    levels: BTreeMap<O::Key, PriceLevel>,
    _ordering: PhantomData<O>,
}

/// Bid side of a book
pub type BidSide = SideIndex<BidOrdering>;

/// Ask side of a book
pub type AskSide = SideIndex<AskOrdering>;

impl<O: LevelOrdering> SideIndex<O> {
    /// Create an empty side
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
            _ordering: PhantomData,
        }
    }

    /// Which side of the book this index holds
    #[inline]
    pub fn side(&self) -> Side {
        O::SIDE
    }

    /// Price of the best level, if any
    #[inline]
    pub fn best_price(&self) -> Option<Px> {
        self.levels.values().next().map(PriceLevel::price)
    }

    /// Best level, if any
    pub fn best_level(&self) -> Option<&PriceLevel> {
        self.levels.values().next()
    }

    /// Level at an exact price
    #[inline]
    pub fn level_at(&self, price: Px) -> Option<&PriceLevel> {
        self.levels.get(&O::key(price))
    }

    /// Mutable level at an exact price
    ///
    /// Removing the last order through this handle leaves an empty level
    /// behind until [`SideIndex::remove_if_empty`] is called.
    #[inline]
    pub fn level_at_mut(&mut self, price: Px) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&O::key(price))
    }

    /// Append an order to the level at `price`, creating the level if needed
    pub fn upsert_append(&mut self, price: Px, order: Order) {
        self.levels
            .entry(O::key(price))
            .or_insert_with(|| PriceLevel::new(price))
            .append(order);
    }

    /// Drop the level at `price` if it no longer holds any orders
    ///
    /// Returns true when a level was dropped.
    pub fn remove_if_empty(&mut self, price: Px) -> bool {
        let key = O::key(price);
        if self.levels.get(&key).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&key);
            true
        } else {
            false
        }
    }

    /// Number of price levels
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when the side has no levels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Levels in best-first order
    pub fn levels(&self) -> impl Iterator<Item = &PriceLevel> + '_ {
        self.levels.values()
    }

    /// Top `levels` levels, best first
    pub fn depth(&self, levels: usize) -> Vec<LevelSummary> {
        self.levels
            .values()
            .take(levels)
            .map(PriceLevel::summary)
            .collect()
    }
}

impl<O: LevelOrdering> Default for SideIndex<O> {
    fn default() -> Self {
        Self::new()
    }
}
