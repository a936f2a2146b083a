//! Core OrderBook implementation for managing price levels and orders

use super::config::BookConfig;
use super::error::OrderBookError;
use super::level::PriceLevel;
use super::order::{Order, OrderId, Side};
use super::snapshot::{LevelData, MarketData};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// The OrderBook keeps the resting orders of one trading pair, grouped into
/// price levels on each side, plus an index from order id to the level holding
/// it so lookups and cancellations never scan the book.
///
/// Mutating operations take `&mut self`. A book shared between threads must be
/// wrapped in a lock held for the whole operation, see
/// [`BookRegistry`](super::BookRegistry).
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// The trading pair this book accepts orders for
    pub(super) trading_pair: String,

    /// Ask side price levels (sell orders), lowest price first
    pub(super) asks: BTreeMap<Decimal, PriceLevel>,

    /// Bid side price levels (buy orders). Stored ascending; the best bid is
    /// the last key.
    pub(super) bids: BTreeMap<Decimal, PriceLevel>,

    /// Where each resting order lives, as (price, side)
    pub(super) order_locations: HashMap<OrderId, (Decimal, Side)>,

    /// Number of ask levels exposed by market data
    pub(super) ask_depth_limit: usize,

    /// Number of bid levels exposed by market data
    pub(super) bid_depth_limit: usize,
}

impl OrderBook {
    /// Create a new order book for the given trading pair with default depth limits
    pub fn new(trading_pair: &str) -> Self {
        Self::with_config(trading_pair, &BookConfig::default())
    }

    /// Create a new order book with explicit depth limits
    pub fn with_depth_limits(
        trading_pair: &str,
        ask_depth_limit: usize,
        bid_depth_limit: usize,
    ) -> Self {
        Self::with_config(
            trading_pair,
            &BookConfig::new(ask_depth_limit, bid_depth_limit),
        )
    }

    /// Create a new order book from a configuration
    pub fn with_config(trading_pair: &str, config: &BookConfig) -> Self {
        trace!(
            "Creating order book {} with depth limits ask={} bid={}",
            trading_pair, config.ask_depth_limit, config.bid_depth_limit
        );
        Self {
            trading_pair: trading_pair.to_string(),
            asks: BTreeMap::new(),
            bids: BTreeMap::new(),
            order_locations: HashMap::new(),
            ask_depth_limit: config.ask_depth_limit,
            bid_depth_limit: config.bid_depth_limit,
        }
    }

    /// Get the trading pair of this order book
    pub fn trading_pair(&self) -> &str {
        &self.trading_pair
    }

    pub fn ask_depth_limit(&self) -> usize {
        self.ask_depth_limit
    }

    pub fn bid_depth_limit(&self) -> usize {
        self.bid_depth_limit
    }

    /// Change how many levels per side market data exposes
    pub fn set_depth_limits(&mut self, ask_depth_limit: usize, bid_depth_limit: usize) {
        trace!(
            "Order book {}: depth limits set to ask={} bid={}",
            self.trading_pair, ask_depth_limit, bid_depth_limit
        );
        self.ask_depth_limit = ask_depth_limit;
        self.bid_depth_limit = bid_depth_limit;
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.keys().next_back().copied()
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.keys().next().copied()
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => ask.checked_sub(bid),
            _ => None,
        }
    }

    /// Get the mid price (average of best bid and best ask).
    ///
    /// `None` when a side is empty or the sum of the two prices overflows.
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid
                .checked_add(ask)
                .and_then(|sum| sum.checked_div(Decimal::TWO))
                .map(|mid| mid.normalize()),
            _ => None,
        }
    }

    /// Number of resting orders on both sides
    pub fn order_count(&self) -> usize {
        self.order_locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order_locations.is_empty()
    }

    pub fn contains_order(&self, order_id: &OrderId) -> bool {
        self.order_locations.contains_key(order_id)
    }

    /// Number of distinct prices holding orders on `side`
    pub fn level_count(&self, side: Side) -> usize {
        self.side_levels(side).len()
    }

    /// Aggregate resting volume on `side`, `None` if it exceeds [`Decimal::MAX`]
    pub fn total_volume(&self, side: Side) -> Option<Decimal> {
        self.side_levels(side)
            .values()
            .try_fold(Decimal::ZERO, |total, level| {
                total.checked_add(level.total_volume())
            })
    }

    /// Get all orders at a specific price level, in arrival order
    pub fn orders_at_price(&self, price: Decimal, side: Side) -> Vec<&Order> {
        trace!(
            "Order book {}: Getting orders at price {} for side {}",
            self.trading_pair, price, side
        );
        self.side_levels(side)
            .get(&price)
            .map(|level| level.iter().collect())
            .unwrap_or_default()
    }

    /// Get a resting order by id
    pub fn get_order_by(&self, order_id: &OrderId) -> Result<&Order, OrderBookError> {
        trace!("Order book {}: Looking up order {}", self.trading_pair, order_id);
        let (price, side) = *self
            .order_locations
            .get(order_id)
            .ok_or(OrderBookError::OrderNotFound(*order_id))?;

        self.side_levels(side)
            .get(&price)
            .and_then(|level| level.get(order_id))
            .ok_or_else(|| {
                OrderBookError::invariant(format!(
                    "order {} indexed at {} {} but missing from its level",
                    order_id, side, price
                ))
            })
    }

    /// Depth-limited aggregated view of both sides using the configured limits
    pub fn market_data(&self) -> MarketData {
        self.market_data_with_depth(self.ask_depth_limit, self.bid_depth_limit)
    }

    /// Depth-limited aggregated view of both sides, best prices first.
    ///
    /// Reads only the levels it returns; volumes come from each level's
    /// running total.
    pub fn market_data_with_depth(&self, ask_depth: usize, bid_depth: usize) -> MarketData {
        let asks = self
            .asks
            .values()
            .take(ask_depth)
            .map(LevelData::from_level)
            .collect();
        let bids = self
            .bids
            .values()
            .rev()
            .take(bid_depth)
            .map(LevelData::from_level)
            .collect();

        MarketData { asks, bids }
    }
}
