//! Walkthrough of the order book manager
//!
//! Run with: cargo run --example demo

use orderbook_manager::{Order, OrderBookManager, Side};

fn print_levels(manager: &OrderBookManager, instrument: &str) {
    let Some(book) = manager.book(instrument) else {
        println!("   {instrument}: no book");
        return;
    };

    for side in [Side::Sell, Side::Buy] {
        for level in book.depth(side, 5) {
            println!(
                "   {instrument} {side:<4} {:>6}  orders={} qty={} vol={}",
                level.price, level.order_count, level.total_quantity, level.total_volume
            );
        }
    }
}

fn main() {
    println!("=== Order Book Manager Demo ===\n");

    let mut manager = OrderBookManager::new();

    println!("Adding orders...");
    for order in [
        Order::new("b1", "XBT", Side::Buy, 100, 10),
        Order::new("b2", "XBT", Side::Buy, 100, 15),
        Order::new("b3", "XBT", Side::Buy, 99, 5),
        Order::new("a1", "XBT", Side::Sell, 101, 20),
        Order::new("a2", "XBT", Side::Sell, 102, 7),
        Order::new("e1", "ETH", Side::Sell, 50, 3),
    ] {
        manager.add_order(order);
    }
    print_levels(&manager, "XBT");
    print_levels(&manager, "ETH");

    let best_bid = manager.get_best_price("XBT", Side::Buy);
    let best_ask = manager.get_best_price("XBT", Side::Sell);
    println!("\nBest bid XBT: {best_bid}");
    println!("Best ask XBT: {best_ask}");

    println!("\nRaising b1 to 20 sends it behind b2:");
    manager.modify_order("b1", 20);
    for order in manager.get_orders_at_level("XBT", Side::Buy, 100) {
        println!("   {order}");
    }

    println!("\nDeleting e1 removes the ETH book:");
    manager.delete_order("e1");
    print_levels(&manager, "ETH");
    let eth_ask = manager.get_best_price("ETH", Side::Sell);
    println!("   best ask ETH: {eth_ask}");

    println!("\n{}", manager.metrics().format_report());
}
