//! One lock-guarded order book per trading pair

use super::book::OrderBook;
use super::config::BookConfig;
use super::error::OrderBookError;
use super::order::{Order, OrderId};
use super::snapshot::MarketData;
use dashmap::DashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, trace, warn};

/// Holds the order books of several trading pairs for use from many threads.
///
/// Books are independent: the pair map is a concurrent map and every book has
/// its own mutex, held for the whole of each operation so the id index and the
/// price levels are never observed half-updated. A book that reports an
/// invariant violation is dropped from the registry.
pub struct BookRegistry {
    books: DashMap<String, Arc<Mutex<OrderBook>>>,
    config: BookConfig,
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::new(BookConfig::default())
    }
}

impl BookRegistry {
    /// Create an empty registry; `config` applies to every book it opens
    pub fn new(config: BookConfig) -> Self {
        Self {
            books: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Open a book for `trading_pair`. Returns false if one already exists.
    pub fn register(&self, trading_pair: &str) -> bool {
        let mut inserted = false;
        self.books.entry(trading_pair.to_string()).or_insert_with(|| {
            inserted = true;
            Arc::new(Mutex::new(OrderBook::with_config(
                trading_pair,
                &self.config,
            )))
        });
        trace!("Registry: register {} -> {}", trading_pair, inserted);
        inserted
    }

    /// Drop the book for `trading_pair`. Returns false if there was none.
    pub fn deregister(&self, trading_pair: &str) -> bool {
        let removed = self.books.remove(trading_pair).is_some();
        trace!("Registry: deregister {} -> {}", trading_pair, removed);
        removed
    }

    pub fn contains(&self, trading_pair: &str) -> bool {
        self.books.contains_key(trading_pair)
    }

    /// Registered trading pairs, sorted
    pub fn trading_pairs(&self) -> Vec<String> {
        let mut pairs: Vec<String> = self.books.iter().map(|item| item.key().clone()).collect();
        pairs.sort();
        pairs
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Run `f` against the book of `trading_pair` while holding its lock
    pub fn with_book<R>(
        &self,
        trading_pair: &str,
        f: impl FnOnce(&mut OrderBook) -> Result<R, OrderBookError>,
    ) -> Result<R, OrderBookError> {
        let book = self
            .books
            .get(trading_pair)
            .map(|item| Arc::clone(item.value()))
            .ok_or_else(|| OrderBookError::UnsupportedTradingPair {
                expected: self.trading_pairs().join(","),
                actual: trading_pair.to_string(),
            })?;

        let result = {
            let mut guard = book.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut *guard)
        };

        if let Err(err) = &result {
            if err.is_fatal() {
                error!(
                    "Registry: book {} is corrupted and has been removed: {}",
                    trading_pair, err
                );
                self.books.remove(trading_pair);
            } else {
                warn!("Registry: operation on {} rejected: {}", trading_pair, err);
            }
        }
        result
    }

    /// Route an order to the book of its trading pair
    pub fn add_order(&self, order: Order) -> Result<(), OrderBookError> {
        let trading_pair = order.trading_pair().to_string();
        self.with_book(&trading_pair, |book| book.add_order(order))
    }

    pub fn remove_order(
        &self,
        trading_pair: &str,
        order_id: &OrderId,
    ) -> Result<Order, OrderBookError> {
        self.with_book(trading_pair, |book| book.remove_order(order_id))
    }

    /// Copy of a resting order
    pub fn get_order_by(
        &self,
        trading_pair: &str,
        order_id: &OrderId,
    ) -> Result<Order, OrderBookError> {
        self.with_book(trading_pair, |book| book.get_order_by(order_id).cloned())
    }

    pub fn market_data(&self, trading_pair: &str) -> Result<MarketData, OrderBookError> {
        self.with_book(trading_pair, |book| Ok(book.market_data()))
    }
}
