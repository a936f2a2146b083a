//! Order book snapshot for market data

use super::level::PriceLevel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Aggregated volume resting at one price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    /// Exact decimal price, normalized (`"1"`, `"0.5"`)
    pub price: String,
    /// Exact aggregate volume at this price, normalized
    pub quantity: String,
}

impl LevelData {
    pub(crate) fn from_level(level: &PriceLevel) -> Self {
        Self {
            price: level.price().normalize().to_string(),
            quantity: level.total_volume().normalize().to_string(),
        }
    }

    /// Price parsed back into a decimal
    pub fn price_decimal(&self) -> Option<Decimal> {
        self.price.parse().ok()
    }

    /// Quantity parsed back into a decimal
    pub fn quantity_decimal(&self) -> Option<Decimal> {
        self.quantity.parse().ok()
    }
}

/// A depth-limited view of the book, best prices first on both sides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketData {
    /// Ask levels, lowest price first
    pub asks: Vec<LevelData>,

    /// Bid levels, highest price first
    pub bids: Vec<LevelData>,
}

impl MarketData {
    /// Get the best bid price and quantity
    pub fn best_bid(&self) -> Option<&LevelData> {
        let bid = self.bids.first();
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and quantity
    pub fn best_ask(&self) -> Option<&LevelData> {
        let ask = self.asks.first();
        trace!("best_ask: {:?}", ask);
        ask
    }

    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }

    /// Total volume across the shown bid levels, `None` on overflow
    pub fn total_bid_volume(&self) -> Option<Decimal> {
        let volume = sum_quantities(&self.bids);
        trace!("total_bid_volume: {:?}", volume);
        volume
    }

    /// Total volume across the shown ask levels, `None` on overflow
    pub fn total_ask_volume(&self) -> Option<Decimal> {
        let volume = sum_quantities(&self.asks);
        trace!("total_ask_volume: {:?}", volume);
        volume
    }

    /// Serialize as `{"asks":[{"price":..,"quantity":..}],"bids":[..]}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn sum_quantities(levels: &[LevelData]) -> Option<Decimal> {
    levels
        .iter()
        .filter_map(LevelData::quantity_decimal)
        .try_fold(Decimal::ZERO, |total, quantity| total.checked_add(quantity))
}
