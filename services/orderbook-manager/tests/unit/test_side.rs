//! Unit tests for side ordering and level lifecycle

use orderbook_manager::{AskSide, BidSide, Order, Side};
use pretty_assertions::assert_eq;

fn order(id: &str, side: Side, price: i64, quantity: i64) -> Order {
    Order::new(id, "XBT", side, price, quantity)
}

fn prices<'a>(levels: impl Iterator<Item = &'a orderbook_manager::PriceLevel>) -> Vec<i64> {
    levels.map(|l| l.price()).collect()
}

#[test]
fn test_bids_iterate_highest_first() {
    let mut bids = BidSide::new();
    for (i, price) in [100, 102, 99, 101].into_iter().enumerate() {
        bids.upsert_append(price, order(&format!("b{i}"), Side::Buy, price, 1));
    }

    assert_eq!(bids.side(), Side::Buy);
    assert_eq!(bids.best_price(), Some(102));
    assert_eq!(prices(bids.levels()), vec![102, 101, 100, 99]);
}

#[test]
fn test_asks_iterate_lowest_first() {
    let mut asks = AskSide::new();
    for (i, price) in [200, 50, 150].into_iter().enumerate() {
        asks.upsert_append(price, order(&format!("s{i}"), Side::Sell, price, 1));
    }

    assert_eq!(asks.side(), Side::Sell);
    assert_eq!(asks.best_price(), Some(50));
    assert_eq!(prices(asks.levels()), vec![50, 150, 200]);
}

#[test]
fn test_empty_side_has_no_best_price() {
    let bids = BidSide::new();
    assert!(bids.is_empty());
    assert_eq!(bids.len(), 0);
    assert_eq!(bids.best_price(), None);
    assert!(bids.best_level().is_none());
}

#[test]
fn test_upsert_reuses_existing_level() {
    let mut bids = BidSide::new();
    bids.upsert_append(100, order("b1", Side::Buy, 100, 10));
    bids.upsert_append(100, order("b2", Side::Buy, 100, 25));

    assert_eq!(bids.len(), 1);
    let level = bids.level_at(100).expect("level exists");
    assert_eq!(level.order_count(), 2);
    assert_eq!(level.total_quantity(), 35);
    assert!(bids.level_at(101).is_none());
}

#[test]
fn test_remove_if_empty_only_drops_drained_levels() {
    let mut asks = AskSide::new();
    asks.upsert_append(50, order("s1", Side::Sell, 50, 10));
    asks.upsert_append(50, order("s2", Side::Sell, 50, 10));

    asks.level_at_mut(50).and_then(|l| l.remove("s1"));
    assert!(!asks.remove_if_empty(50));
    assert_eq!(asks.len(), 1);

    asks.level_at_mut(50).and_then(|l| l.remove("s2"));
    assert!(asks.remove_if_empty(50));
    assert!(asks.is_empty());
    assert!(asks.level_at(50).is_none());

    // no level at all is not an error
    assert!(!asks.remove_if_empty(50));
}

#[test]
fn test_depth_is_best_first_and_bounded() {
    let mut bids = BidSide::new();
    for price in 95..=100 {
        bids.upsert_append(price, order(&format!("b{price}"), Side::Buy, price, price));
    }

    let depth = bids.depth(3);
    assert_eq!(depth.len(), 3);
    assert_eq!(
        depth.iter().map(|l| l.price).collect::<Vec<_>>(),
        vec![100, 99, 98]
    );
    assert_eq!(depth[0].total_quantity, 100);
    assert_eq!(depth[0].total_volume, 100 * 100);
    assert_eq!(bids.depth(50).len(), 6);
}
