//! # Limit Order Book Index
//!
//! An in-memory index of the resting orders of a single trading pair. The book
//! groups orders into price levels on each side, finds any order by id without
//! scanning, and produces depth-limited market data snapshots whose cost
//! depends on the number of levels shown, not on the number of orders resting.
//!
//! The index never matches orders. A matching engine, a persistence layer or a
//! market data publisher sit on top of it and drive it through
//! [`OrderBook::add_order`], [`OrderBook::remove_order`],
//! [`OrderBook::get_order_by`] and [`OrderBook::market_data`].
//!
//! ## Key Features
//!
//! - **Exact Decimal Prices**: Prices and volumes are [`rust_decimal::Decimal`]
//!   values with at most 8 decimal places. Values needing more precision are
//!   rejected instead of rounded, so two orders share a level exactly when
//!   their prices are equal.
//!
//! - **Price Levels**: Each level is a FIFO queue in arrival order with an
//!   aggregate volume maintained on every insertion and removal. Empty levels
//!   are removed immediately.
//!
//! - **Id Index**: Every resting order is indexed by id to its (price, side),
//!   making lookup and cancellation logarithmic in the number of levels.
//!
//! - **All-or-nothing Operations**: An operation either succeeds with every
//!   invariant holding or fails with an [`OrderBookError`] and leaves the book
//!   as it was.
//!
//! - **Multi-pair Registry**: [`BookRegistry`] keeps one lock-guarded book per
//!   trading pair for services that share books between threads.
//!
//! ## Example
//!
//! ```
//! use orderbook_index::{Order, OrderBook, Side};
//! use rust_decimal::Decimal;
//!
//! let mut book = OrderBook::with_depth_limits("BTC_USD", 2, 2);
//! for price in 1..=5 {
//!     let order = Order::new("BTC_USD", Decimal::from(price), Decimal::ONE, Side::Bid, "alice")
//!         .expect("valid order");
//!     book.add_order(order).expect("order accepted");
//! }
//!
//! let market_data = book.market_data();
//! let prices: Vec<&str> = market_data.bids.iter().map(|level| level.price.as_str()).collect();
//! assert_eq!(prices, vec!["5", "4"]);
//! assert!(market_data.asks.is_empty());
//! ```
//!
//! ## Concurrency
//!
//! [`OrderBook`] is a plain single-writer structure: mutation needs `&mut`.
//! The id index and the price levels change together, so a shared book must be
//! locked for the full duration of every operation, reads included. The
//! registry does exactly that with one mutex per book.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`trace` per operation, `debug` when
//! levels open or close, `error` on invariant violations) and never installs a
//! subscriber itself.

pub mod orderbook;

mod utils;

pub use orderbook::{
    BookConfig, BookRegistry, LevelData, MarketData, Order, OrderBook, OrderBookError, OrderId,
    PriceLevel, Side,
};
pub use utils::{current_time_millis, monotonic_time_nanos};
