// demos/src/bin/basic_orderbook.rs

use demos::setup_logger;
use orderbook_index::{BookConfig, Order, OrderBook, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

const PAIR: &str = "BTC_USD";

fn main() {
    // Set up logging
    setup_logger();
    info!("Basic OrderBook Example");

    // Create a new order book for a trading pair
    let mut book = create_orderbook(PAIR);

    // Add orders on both sides of the book
    let resting = demo_adding_orders(&mut book);

    // Display current book state
    display_orderbook_state(&book);

    // Demonstrate order lookup and retrieval
    demo_order_lookup(&book, &resting);

    // Demonstrate rejected operations
    demo_rejections(&mut book, &resting);

    // Demonstrate order removal
    demo_remove_orders(&mut book, &resting);

    // Display final book state
    info!("\nFinal OrderBook State:");
    display_orderbook_state(&book);
}

fn create_orderbook(trading_pair: &str) -> OrderBook {
    let config = BookConfig::from_json(r#"{"ask_depth_limit": 3, "bid_depth_limit": 3}"#)
        .unwrap_or_default();
    info!(
        "Creating OrderBook for {} with depth limits ask={} bid={}",
        trading_pair, config.ask_depth_limit, config.bid_depth_limit
    );
    OrderBook::with_config(trading_pair, &config)
}

fn demo_adding_orders(book: &mut OrderBook) -> Vec<Order> {
    info!("\nAdding orders to the OrderBook...");
    let mut resting = Vec::new();

    // Bids at 9900, 9920, ... 9980 and asks at 10000, 10020, ... 10080
    for i in 0..5i64 {
        let quantity = dec!(0.1) + Decimal::new(i * 5, 2);
        for (side, base) in [(Side::Bid, 9900), (Side::Ask, 10000)] {
            let price = Decimal::from(base + i * 20);
            match Order::new(PAIR, price, quantity, side, "demo-owner") {
                Ok(order) => match book.add_order(order.clone()) {
                    Ok(()) => {
                        info!(
                            "Added {} order: id={}, price={}, qty={}",
                            side,
                            order.id(),
                            order.price(),
                            order.volume()
                        );
                        resting.push(order);
                    }
                    Err(e) => info!("Failed to add {} order: {}", side, e),
                },
                Err(e) => info!("Invalid {} order: {}", side, e),
            }
        }
    }

    // Queue a second order on the best bid
    if let Ok(order) = Order::parse(PAIR, "9980", "0.75", "bid", "demo-owner") {
        if book.add_order(order.clone()).is_ok() {
            info!("Queued order {} behind the best bid", order.id());
            resting.push(order);
        }
    }

    resting
}

fn demo_order_lookup(book: &OrderBook, resting: &[Order]) {
    info!("\nDemonstrating order lookup...");

    info!("Best bid: {:?}", book.best_bid());
    info!("Best ask: {:?}", book.best_ask());
    info!("Spread: {:?}", book.spread());
    info!("Mid price: {:?}", book.mid_price());

    if let Some(bid_price) = book.best_bid() {
        let orders = book.orders_at_price(bid_price, Side::Bid);
        info!("Orders at best bid ({}): {}", bid_price, orders.len());
        for (i, order) in orders.iter().enumerate() {
            info!("  Order {}: id={}, qty={}", i, order.id(), order.volume());
        }
    }

    if let Some(first) = resting.first() {
        match book.get_order_by(&first.id()) {
            Ok(order) => info!(
                "Found order {}: {} {} @ {} created at {}",
                order.id(),
                order.side(),
                order.volume(),
                order.price(),
                order.created_at()
            ),
            Err(e) => info!("Lookup failed: {}", e),
        }
    }
}

fn demo_rejections(book: &mut OrderBook, resting: &[Order]) {
    info!("\nDemonstrating rejected operations...");

    if let Some(first) = resting.first() {
        if let Err(e) = book.add_order(first.clone()) {
            info!("Re-adding a resting order fails: {}", e);
        }
    }

    if let Ok(order) = Order::new("ETH_USD", dec!(2000), dec!(1), Side::Ask, "demo-owner") {
        if let Err(e) = book.add_order(order) {
            info!("Order for another pair fails: {}", e);
        }
    }

    for (price, volume, side) in [("-1", "1", "ask"), ("1", "0.000000001", "ask"), ("1", "1", "hold")] {
        if let Err(e) = Order::parse(PAIR, price, volume, side, "demo-owner") {
            info!("Order ({}, {}, {}) rejected: {}", price, volume, side, e);
        }
    }
}

fn demo_remove_orders(book: &mut OrderBook, resting: &[Order]) {
    info!("\nDemonstrating order removal...");

    for order in resting.iter().step_by(2) {
        match book.remove_order(&order.id()) {
            Ok(removed) => info!(
                "Removed {} order {} at {}",
                removed.side(),
                removed.id(),
                removed.price()
            ),
            Err(e) => info!("Failed to remove order {}: {}", order.id(), e),
        }
    }

    if let Some(first) = resting.first() {
        if let Err(e) = book.remove_order(&first.id()) {
            info!("Removing it again fails: {}", e);
        }
    }
}

fn display_orderbook_state(book: &OrderBook) {
    let market_data = book.market_data();

    info!("OrderBook state for {}:", book.trading_pair());
    info!(
        "  Resting orders: {} ({} bid levels, {} ask levels)",
        book.order_count(),
        book.level_count(Side::Bid),
        book.level_count(Side::Ask)
    );
    for level in market_data.asks.iter().rev() {
        info!("  ASK {:>10} | {}", level.price, level.quantity);
    }
    for level in &market_data.bids {
        info!("  BID {:>10} | {}", level.price, level.quantity);
    }
    match market_data.to_json() {
        Ok(json) => info!("  Market data: {}", json),
        Err(e) => info!("  Could not serialize market data: {}", e),
    }
}
