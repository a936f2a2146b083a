//! OrderBook index: resting orders grouped into price levels per side.

pub mod book;
mod config;
mod error;
mod level;
mod operations;
mod order;
mod private;
mod registry;
mod snapshot;

pub use book::OrderBook;
pub use config::{BookConfig, DEFAULT_DEPTH_LIMIT};
pub use error::OrderBookError;
pub use level::PriceLevel;
pub use order::{DECIMAL_PLACES, Order, OrderId, Side};
pub use registry::BookRegistry;
pub use snapshot::{LevelData, MarketData};
