use super::book::OrderBook;
use super::error::OrderBookError;
use super::level::PriceLevel;
use super::order::{Order, OrderId, Side};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::debug;

impl OrderBook {
    /// Price levels of one side
    pub(super) fn side_levels(&self, side: Side) -> &BTreeMap<Decimal, PriceLevel> {
        match side {
            Side::Ask => &self.asks,
            Side::Bid => &self.bids,
        }
    }

    /// Places a resting order in the level at its price, creating the level on
    /// first use. A new level only enters the map once it holds the order.
    pub(super) fn place_order_in_level(&mut self, order: Order) -> Result<(), OrderBookError> {
        let (price, side) = (order.price(), order.side());
        let levels = match side {
            Side::Ask => &mut self.asks,
            Side::Bid => &mut self.bids,
        };

        match levels.entry(price) {
            Entry::Occupied(mut entry) => entry.get_mut().add(order),
            Entry::Vacant(entry) => {
                let mut level = PriceLevel::new(price);
                level.add(order)?;
                debug!("Order book {}: opened {} level {}", self.trading_pair, side, price);
                entry.insert(level);
                Ok(())
            }
        }
    }

    /// Takes an order out of its level, dropping the level once it is empty
    pub(super) fn take_order_from_level(
        &mut self,
        order_id: &OrderId,
        price: Decimal,
        side: Side,
    ) -> Result<Order, OrderBookError> {
        let levels = match side {
            Side::Ask => &mut self.asks,
            Side::Bid => &mut self.bids,
        };

        let level = levels.get_mut(&price).ok_or_else(|| {
            OrderBookError::invariant(format!(
                "order {} indexed at {} {} but no such level exists",
                order_id, side, price
            ))
        })?;
        let order = level.remove(order_id)?;

        if level.is_empty() {
            levels.remove(&price);
            debug!("Order book {}: closed {} level {}", self.trading_pair, side, price);
        }
        Ok(order)
    }
}
