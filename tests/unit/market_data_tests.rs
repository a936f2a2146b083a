//! End-to-end market data behaviour through the public API

use orderbook_index::{MarketData, Order, OrderBook, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const PAIR: &str = "BTC_USD";

fn add(book: &mut OrderBook, price: Decimal, volume: Decimal, side: Side) -> Order {
    let order = Order::new(PAIR, price, volume, side, "owner-1").unwrap();
    book.add_order(order.clone()).unwrap();
    order
}

fn prices(levels: &[orderbook_index::LevelData]) -> Vec<&str> {
    levels.iter().map(|level| level.price.as_str()).collect()
}

#[cfg(test)]
mod market_data_tests {
    use super::*;

    #[test]
    fn test_market_data_without_data() {
        let book = OrderBook::new(PAIR);
        assert_eq!(book.market_data(), MarketData::default());
    }

    #[test]
    fn test_market_data_with_bids_only() {
        let mut book = OrderBook::new(PAIR);
        add(&mut book, dec!(10), dec!(1), Side::Bid);
        add(&mut book, dec!(12), dec!(2), Side::Bid);
        add(&mut book, dec!(11), dec!(3), Side::Bid);

        let market_data = book.market_data();
        assert!(market_data.asks.is_empty());
        assert_eq!(prices(&market_data.bids), vec!["12", "11", "10"]);
    }

    #[test]
    fn test_market_data_with_asks_only() {
        let mut book = OrderBook::new(PAIR);
        add(&mut book, dec!(10), dec!(1), Side::Ask);
        add(&mut book, dec!(12), dec!(2), Side::Ask);
        add(&mut book, dec!(11), dec!(3), Side::Ask);

        let market_data = book.market_data();
        assert!(market_data.bids.is_empty());
        assert_eq!(prices(&market_data.asks), vec!["10", "11", "12"]);
    }

    #[test]
    fn test_market_data_with_a_lot_of_bid_prices() {
        let mut book = OrderBook::new(PAIR);
        for price in 1..=25 {
            add(&mut book, Decimal::from(price), dec!(1), Side::Bid);
        }

        let market_data = book.market_data();
        assert_eq!(market_data.bids.len(), 10);
        assert_eq!(market_data.bids[0].price, "25");
        assert_eq!(market_data.bids[9].price, "16");
    }

    #[test]
    fn test_market_data_with_a_lot_of_ask_prices() {
        let mut book = OrderBook::new(PAIR);
        for price in (1..=25).rev() {
            add(&mut book, Decimal::from(price), dec!(1), Side::Ask);
        }

        let market_data = book.market_data();
        assert_eq!(market_data.asks.len(), 10);
        assert_eq!(market_data.asks[0].price, "1");
        assert_eq!(market_data.asks[9].price, "10");
    }

    #[test]
    fn test_market_data_with_bids_and_asks() {
        let mut book = OrderBook::new(PAIR);
        add(&mut book, dec!(99.5), dec!(1), Side::Bid);
        add(&mut book, dec!(99.5), dec!(0.5), Side::Bid);
        add(&mut book, dec!(100.5), dec!(2), Side::Ask);

        let json = book.market_data().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"asks":[{"price":"100.5","quantity":"2"}],"bids":[{"price":"99.5","quantity":"1.5"}]}"#
        );
    }

    #[test]
    fn test_remove_order_from_market_data() {
        let mut book = OrderBook::new(PAIR);
        let first = add(&mut book, dec!(10), dec!(1), Side::Ask);
        let second = add(&mut book, dec!(10), dec!(2), Side::Ask);

        book.remove_order(&first.id()).unwrap();
        assert_eq!(book.market_data().asks[0].quantity, "2");

        book.remove_order(&second.id()).unwrap();
        assert!(book.market_data().asks.is_empty());
    }

    #[test]
    fn test_market_data_max_print_size_limiter() {
        let mut book = OrderBook::with_depth_limits(PAIR, 2, 2);
        let bids: Vec<Order> = (1..=5)
            .map(|price| add(&mut book, Decimal::from(price), dec!(1), Side::Bid))
            .collect();
        for price in 6..=10 {
            add(&mut book, Decimal::from(price), dec!(1), Side::Ask);
        }

        let market_data = book.market_data();
        assert_eq!(prices(&market_data.bids), vec!["5", "4"]);
        assert_eq!(prices(&market_data.asks), vec!["6", "7"]);
        assert!(market_data.bids.iter().all(|level| level.quantity == "1"));

        book.remove_order(&bids[4].id()).unwrap();
        assert_eq!(prices(&book.market_data().bids), vec!["4", "3"]);
    }

    #[test]
    fn test_aggregate_is_exact_sum() {
        let mut book = OrderBook::new(PAIR);
        let volumes = [dec!(0.1), dec!(0.2), dec!(0.00000001), dec!(12345.6789), dec!(3)];
        for volume in volumes {
            add(&mut book, dec!(50000), volume, Side::Bid);
        }

        let expected: Decimal = volumes.iter().copied().sum();
        let market_data = book.market_data();
        assert_eq!(market_data.bids[0].quantity_decimal(), Some(expected));
        assert_eq!(market_data.bids[0].quantity, "12348.97890001");
    }
}
