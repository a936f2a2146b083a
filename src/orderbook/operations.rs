//! Order book operations: adding and removing resting orders

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId};
use tracing::trace;

impl OrderBook {
    /// Rest an order in the book.
    ///
    /// Fails without touching the book when the order belongs to another
    /// trading pair or its id is already resting here.
    pub fn add_order(&mut self, order: Order) -> Result<(), OrderBookError> {
        trace!(
            "Order book {}: Adding order {} {} {} @ {}",
            self.trading_pair,
            order.id(),
            order.side(),
            order.volume(),
            order.price()
        );

        if order.trading_pair() != self.trading_pair {
            return Err(OrderBookError::UnsupportedTradingPair {
                expected: self.trading_pair.clone(),
                actual: order.trading_pair().to_string(),
            });
        }
        if self.order_locations.contains_key(&order.id()) {
            return Err(OrderBookError::DuplicateOrder(order.id()));
        }

        let location = (order.price(), order.side());
        let order_id = order.id();
        self.place_order_in_level(order)?;
        self.order_locations.insert(order_id, location);
        Ok(())
    }

    /// Remove a resting order and hand it back.
    ///
    /// The level it sat in is dropped when this was its last order.
    pub fn remove_order(&mut self, order_id: &OrderId) -> Result<Order, OrderBookError> {
        trace!("Order book {}: Removing order {}", self.trading_pair, order_id);

        let (price, side) = *self
            .order_locations
            .get(order_id)
            .ok_or(OrderBookError::OrderNotFound(*order_id))?;

        let order = self.take_order_from_level(order_id, price, side)?;
        self.order_locations.remove(order_id);
        Ok(order)
    }
}
