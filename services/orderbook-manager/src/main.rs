//! Order book manager CLI
//!
//! Replays a JSON-lines order event feed into a fresh manager and reports
//! the resulting books.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use orderbook_manager::{
    LevelSummary, ManagerConfig, OrderBook, OrderBookManager, Px, Side, read_events,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Order book manager CLI
#[derive(Parser)]
#[command(name = "orderbook-manager")]
#[command(about = "Per-instrument price-level order books")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an event feed and print every live book
    Replay {
        /// JSON-lines event file
        input: PathBuf,

        /// Levels per side to print
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Apply an event feed and inspect one level
    Query {
        /// JSON-lines event file
        input: PathBuf,

        /// Instrument symbol
        #[arg(long)]
        instrument: String,

        /// Side of the book
        #[arg(long, value_enum)]
        side: SideArg,

        /// Level price
        #[arg(long)]
        price: Px,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Side::Buy,
            SideArg::Sell => Side::Sell,
        }
    }
}

fn load_manager(config: ManagerConfig, input: &Path) -> Result<OrderBookManager> {
    let events = read_events(input)
        .with_context(|| format!("loading events from {}", input.display()))?;
    let total = events.len();

    let mut manager = OrderBookManager::with_config(config);
    let mut applied = 0usize;
    for event in events {
        if manager.apply(event) {
            applied += 1;
        }
    }

    let ignored = total - applied;
    info!(total, applied, ignored, "event feed applied");
    Ok(manager)
}

fn print_side(label: &str, levels: &[LevelSummary]) {
    println!("  {label}:");
    println!(
        "    {:>12} {:>12} {:>8} {:>16}",
        "Price", "Quantity", "Orders", "Volume"
    );
    for level in levels {
        println!(
            "    {:>12} {:>12} {:>8} {:>16}",
            level.price, level.total_quantity, level.order_count, level.total_volume
        );
    }
}

fn print_book(book: &OrderBook, depth: usize) {
    println!("{} ({} orders)", book.symbol(), book.order_count());
    print_side("Bids", &book.depth(Side::Buy, depth));
    print_side("Asks", &book.depth(Side::Sell, depth));
    if let Some(spread) = book.spread() {
        println!("  Spread: {spread}");
    }
}

fn replay(manager: &OrderBookManager, depth: usize) {
    let mut instruments: Vec<&str> = manager.instruments().collect();
    instruments.sort_unstable();

    for instrument in instruments {
        if let Some(book) = manager.book(instrument) {
            print_book(book, depth);
        }
    }

    print!("{}", manager.metrics().format_report());
}

fn query(manager: &OrderBookManager, instrument: &str, side: Side, price: Px) {
    println!("{instrument} {side} @ {price}");
    println!(
        "  Best price:     {}",
        manager.get_best_price(instrument, side)
    );
    println!(
        "  Orders:         {}",
        manager.get_order_num_at_level(instrument, side, price)
    );
    println!(
        "  Total quantity: {}",
        manager.get_total_quantity_at_level(instrument, side, price)
    );
    println!(
        "  Total volume:   {}",
        manager.get_total_volume_at_level(instrument, side, price)
    );

    let ids: Vec<String> = manager
        .get_orders_at_level(instrument, side, price)
        .iter()
        .map(|order| format!("{}:{}", order.id, order.quantity))
        .collect();
    println!("  Queue:          [{}]", ids.join(", "));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ManagerConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ManagerConfig::default(),
    };

    let directive = if cli.debug {
        "orderbook_manager=debug".to_string()
    } else {
        config.log_filter.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse()?),
        )
        .with_target(false)
        .with_line_number(true)
        .init();

    match cli.command {
        Commands::Replay { input, depth } => {
            let depth = depth.unwrap_or(config.default_depth);
            let manager = load_manager(config, &input)?;
            replay(&manager, depth);
        }
        Commands::Query {
            input,
            instrument,
            side,
            price,
        } => {
            let manager = load_manager(config, &input)?;
            query(&manager, &instrument, side.into(), price);
        }
    }

    Ok(())
}
