//! Add / lookup / remove lifecycle through the public API

use orderbook_index::{Order, OrderBook, OrderBookError, OrderId, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const PAIR: &str = "BTC_USD";

fn create_order(price: Decimal, volume: Decimal, side: Side) -> Order {
    Order::new(PAIR, price, volume, side, "owner-1").unwrap()
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_positive_get_exist_order_with_type() {
        for side in [Side::Ask, Side::Bid] {
            let mut book = OrderBook::new(PAIR);
            let order = create_order(dec!(10), dec!(1), side);
            book.add_order(order.clone()).unwrap();

            let found = book.get_order_by(&order.id()).unwrap();
            assert_eq!(found.id(), order.id());
            assert_eq!(found.side(), side);
            assert_eq!(found.owner_id(), "owner-1");
        }
    }

    #[test]
    fn test_negative_get_removed_order_with_type() {
        for side in [Side::Ask, Side::Bid] {
            let mut book = OrderBook::new(PAIR);
            let order = create_order(dec!(10), dec!(1), side);
            book.add_order(order.clone()).unwrap();
            book.remove_order(&order.id()).unwrap();

            assert!(matches!(
                book.get_order_by(&order.id()),
                Err(OrderBookError::OrderNotFound(_))
            ));
        }
    }

    #[test]
    fn test_negative_not_exist_order() {
        let mut book = OrderBook::new(PAIR);
        let id = OrderId::new_uuid();
        assert!(matches!(
            book.get_order_by(&id),
            Err(OrderBookError::OrderNotFound(_))
        ));
        assert!(matches!(
            book.remove_order(&id),
            Err(OrderBookError::OrderNotFound(_))
        ));
    }

    #[test]
    fn test_negative_delete_order_by_invalid_data() {
        let result = "definitely-not-a-uuid".parse::<OrderId>();
        assert!(matches!(result, Err(OrderBookError::Validation { .. })));
    }

    #[test]
    fn test_negative_add_order_with_invalid_type() {
        for side in ["", "ASKK", "sell", "b1d"] {
            let result = Order::parse(PAIR, "1", "1", side, "owner-1");
            assert!(
                matches!(result, Err(OrderBookError::UnsupportedOrderType(_))),
                "Side {side:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_negative_add_same_order_twice() {
        let mut book = OrderBook::new(PAIR);
        let order = create_order(dec!(10), dec!(1), Side::Bid);
        book.add_order(order.clone()).unwrap();
        let before = book.market_data();

        assert!(matches!(
            book.add_order(order),
            Err(OrderBookError::DuplicateOrder(_))
        ));
        assert_eq!(book.market_data(), before);
        assert_eq!(book.order_count(), 1);
    }

    #[test]
    fn test_bounded_level_set() {
        let mut book = OrderBook::with_depth_limits(PAIR, 100, 100);
        let mut orders = Vec::new();
        for price in 1..=20 {
            orders.push(create_order(Decimal::from(price), dec!(1), Side::Ask));
        }
        for order in &orders {
            book.add_order(order.clone()).unwrap();
        }
        for order in orders.iter().filter(|order| order.price() > dec!(10)) {
            book.remove_order(&order.id()).unwrap();
        }

        assert_eq!(book.level_count(Side::Ask), 10);
        let market_data = book.market_data();
        assert_eq!(market_data.asks.len(), 10);
        assert!(
            market_data
                .asks
                .iter()
                .all(|level| level.price_decimal().unwrap() <= dec!(10))
        );
    }

    #[test]
    fn test_removed_order_is_returned_unchanged() {
        let mut book = OrderBook::new(PAIR);
        let order = create_order(dec!(0.12345678), dec!(7.5), Side::Bid);
        book.add_order(order.clone()).unwrap();

        let removed = book.remove_order(&order.id()).unwrap();
        assert_eq!(removed.id(), order.id());
        assert_eq!(removed.price(), order.price());
        assert_eq!(removed.volume(), order.volume());
        assert_eq!(removed.created_at(), order.created_at());
    }
}
