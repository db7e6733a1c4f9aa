//! End-to-end flows across many instruments

use crate::assertions::{assert_book_invariants, assert_manager_invariants};
use crate::generators::{generate_book_building_orders, generate_orders};
use orderbook_manager::{NOT_FOUND, OrderBookManager, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_book_building_shape() {
    let mut manager = OrderBookManager::new();
    for order in generate_book_building_orders("XBT", 10, 1_000) {
        manager.add_order(order);
    }

    let book = manager.book("XBT").expect("book exists");
    assert_book_invariants(book);
    assert_eq!(book.get_best_price(Side::Buy), 1_000);
    assert_eq!(book.get_best_price(Side::Sell), 1_001);
    assert_eq!(book.spread(), Some(1));
    assert_eq!(book.bids().len(), 10);
    assert_eq!(book.asks().len(), 10);
    assert_eq!(
        book.get_total_volume_at_level(Side::Sell, 1_010),
        1_010 * 2_800
    );
}

#[test]
fn test_many_instruments_churn() {
    let mut manager = OrderBookManager::new();
    let instruments = ["XBT", "ETH", "SOL", "XRP"];

    for (n, instrument) in instruments.iter().enumerate() {
        for order in generate_orders(instrument, 200, 1_000 * (n as i64 + 1)) {
            assert!(manager.add_order(order));
        }
    }
    assert_eq!(manager.book_count(), 4);
    assert_eq!(manager.order_count(), 800);
    assert_manager_invariants(&manager);

    let mut rng = StdRng::seed_from_u64(42);
    for instrument in instruments {
        for i in 0..200 {
            let id = format!("{instrument}-{i}");
            if rng.gen_bool(0.5) {
                manager.modify_order(&id, rng.gen_range(1..1_000));
            }
        }
    }
    assert_manager_invariants(&manager);

    // drain ETH completely and half of XBT
    for i in 0..200 {
        manager.delete_order(&format!("ETH-{i}"));
        if i % 2 == 0 {
            manager.delete_order(&format!("XBT-{i}"));
        }
    }
    assert_manager_invariants(&manager);
    assert!(manager.book("ETH").is_none());
    assert_eq!(manager.get_best_price("ETH", Side::Buy), NOT_FOUND);
    assert_eq!(manager.book("XBT").map(|b| b.order_count()), Some(100));
    assert_eq!(manager.book_count(), 3);
}

#[test]
fn test_interleaved_random_operations_keep_invariants() {
    let mut manager = OrderBookManager::new();
    let mut rng = StdRng::seed_from_u64(7);
    let mut live: Vec<String> = Vec::new();

    for step in 0..2_000 {
        match rng.gen_range(0..10) {
            0..=4 => {
                let id = format!("o{step}");
                let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
                let instrument = ["XBT", "ETH"][rng.gen_range(0..2)];
                let order = orderbook_manager::Order::new(
                    id.clone(),
                    instrument,
                    side,
                    rng.gen_range(90..110),
                    rng.gen_range(1..500),
                );
                assert!(manager.add_order(order));
                live.push(id);
            }
            5..=7 if !live.is_empty() => {
                let id = &live[rng.gen_range(0..live.len())];
                assert!(manager.modify_order(id, rng.gen_range(1..500)).is_some());
            }
            _ if !live.is_empty() => {
                let id = live.swap_remove(rng.gen_range(0..live.len()));
                assert!(manager.delete_order(&id).is_some());
            }
            _ => {}
        }

        if step % 100 == 0 {
            assert_manager_invariants(&manager);
        }
    }

    assert_manager_invariants(&manager);
    assert_eq!(manager.order_count(), live.len());
}
