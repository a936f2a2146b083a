//! A FIFO queue of resting orders sharing one price

use super::error::OrderBookError;
use super::order::{Order, OrderId, Side};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use tracing::error;

/// All resting orders on one side of the book at one price, in arrival order,
/// with their aggregate volume kept up to date on every change.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Decimal,
    /// Adopted from the first member, `None` while the level is empty
    side: Option<Side>,
    orders: VecDeque<Order>,
    total_volume: Decimal,
}

impl PriceLevel {
    /// Create an empty level at `price`
    pub fn new(price: Decimal) -> Self {
        Self {
            price,
            side: None,
            orders: VecDeque::new(),
            total_volume: Decimal::ZERO,
        }
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Side of the members, `None` for an empty level
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    /// Sum of the volumes of every member
    pub fn total_volume(&self) -> Decimal {
        self.total_volume
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Append an order to the back of the queue.
    ///
    /// An empty level adopts the order's price and side. Afterwards every
    /// member must match both. An order whose volume would push the aggregate
    /// past [`Decimal::MAX`] is rejected and the level is left as it was.
    pub fn add(&mut self, order: Order) -> Result<(), OrderBookError> {
        if self.orders.is_empty() {
            self.price = order.price();
            self.side = Some(order.side());
        }

        if order.price() != self.price {
            error!(
                "Order {} at {} routed to level {}",
                order.id(),
                order.price(),
                self.price
            );
            return Err(OrderBookError::invariant(format!(
                "order {} priced {} added to level {}",
                order.id(),
                order.price(),
                self.price
            )));
        }
        if self.side != Some(order.side()) {
            error!(
                "{} order {} routed to a level holding the other side",
                order.side(),
                order.id()
            );
            return Err(OrderBookError::invariant(format!(
                "{} order {} added to level {} of the opposite side",
                order.side(),
                order.id(),
                self.price
            )));
        }

        let total_volume = self.total_volume.checked_add(order.volume()).ok_or_else(|| {
            error!(
                "Order {} volume {} overflows level {} holding {}",
                order.id(),
                order.volume(),
                self.price,
                self.total_volume
            );
            OrderBookError::validation(
                "volume",
                format!(
                    "{} would overflow the {} already resting at {}",
                    order.volume(),
                    self.total_volume,
                    self.price
                ),
            )
        })?;

        self.total_volume = total_volume;
        self.orders.push_back(order);
        Ok(())
    }

    /// Remove the member with `order_id` and hand it back.
    ///
    /// Every check runs before the level is touched, so a failed removal
    /// leaves it unchanged.
    pub fn remove(&mut self, order_id: &OrderId) -> Result<Order, OrderBookError> {
        let position = self
            .position(order_id)
            .ok_or(OrderBookError::OrderNotFound(*order_id))?;

        let (price, volume) = {
            let order = &self.orders[position];
            (order.price(), order.volume())
        };
        if price != self.price {
            error!("Order {} priced {} found in level {}", order_id, price, self.price);
            return Err(OrderBookError::invariant(format!(
                "order {} priced {} held by level {}",
                order_id, price, self.price
            )));
        }
        if volume > self.total_volume {
            error!(
                "Removing order {} would drive level {} volume below zero",
                order_id, self.price
            );
            return Err(OrderBookError::invariant(format!(
                "level {} holds {} but order {} carries {}",
                self.price, self.total_volume, order_id, volume
            )));
        }

        let removed = self
            .orders
            .remove(position)
            .ok_or_else(|| OrderBookError::invariant("level position vanished during removal"))?;
        self.total_volume -= volume;
        if self.orders.is_empty() {
            self.side = None;
        }
        Ok(removed)
    }

    /// Index of the member with `order_id` in arrival order
    pub fn position(&self, order_id: &OrderId) -> Option<usize> {
        self.orders.iter().position(|order| order.id() == *order_id)
    }

    /// Member with `order_id`, if present
    pub fn get(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == *order_id)
    }

    /// Oldest member of the queue
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Members in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}
