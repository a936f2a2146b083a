//! Resting order value type and its identifiers

use super::error::OrderBookError;
use crate::utils::monotonic_time_nanos;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use uuid::Uuid;

/// Number of decimal places prices and volumes are kept at
pub const DECIMAL_PLACES: u32 = 8;

/// Globally unique order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh random identifier
    pub fn new_uuid() -> Self {
        OrderId(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        OrderId(uuid)
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for OrderId {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(OrderId::from_uuid)
            .map_err(|e| OrderBookError::validation("order_id", format!("'{}': {}", s, e)))
    }
}

/// Side of the book an order rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Sell side
    Ask,
    /// Buy side
    Bid,
}

impl Side {
    /// The other side of the book
    pub fn opposite(&self) -> Side {
        match self {
            Side::Ask => Side::Bid,
            Side::Bid => Side::Ask,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Ask => write!(f, "ASK"),
            Side::Bid => write!(f, "BID"),
        }
    }
}

impl FromStr for Side {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASK" => Ok(Side::Ask),
            "BID" => Ok(Side::Bid),
            _ => Err(OrderBookError::UnsupportedOrderType(s.to_string())),
        }
    }
}

/// A resting limit order.
///
/// Orders are immutable once built. Two orders are equal when their ids are
/// equal, whatever the other fields hold.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    trading_pair: String,
    price: Decimal,
    volume: Decimal,
    side: Side,
    owner_id: String,
    created_at: u64,
}

impl Order {
    /// Build a new order, generating its id and creation timestamp.
    ///
    /// Price and volume must be strictly positive and exactly representable
    /// with [`DECIMAL_PLACES`] decimal places. Values are stored normalized,
    /// so `1.50000000` and `1.5` land on the same price.
    pub fn new(
        trading_pair: impl Into<String>,
        price: Decimal,
        volume: Decimal,
        side: Side,
        owner_id: impl Into<String>,
    ) -> Result<Self, OrderBookError> {
        let price = validate_amount("price", price)?;
        let volume = validate_amount("volume", volume)?;

        Ok(Self {
            id: OrderId::new_uuid(),
            trading_pair: trading_pair.into(),
            price,
            volume,
            side,
            owner_id: owner_id.into(),
            created_at: monotonic_time_nanos(),
        })
    }

    /// Build an order from textual fields, as received at an API boundary
    pub fn parse(
        trading_pair: impl Into<String>,
        price: &str,
        volume: &str,
        side: &str,
        owner_id: impl Into<String>,
    ) -> Result<Self, OrderBookError> {
        let price = parse_decimal("price", price)?;
        let volume = parse_decimal("volume", volume)?;
        let side = side.parse::<Side>()?;
        Order::new(trading_pair, price, volume, side, owner_id)
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn trading_pair(&self) -> &str {
        &self.trading_pair
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn volume(&self) -> Decimal {
        self.volume
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Creation time in nanoseconds since UNIX epoch, unique per process
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Whether this order was constructed strictly before `other`
    pub fn earlier_than(&self, other: &Order) -> bool {
        self.created_at < other.created_at
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn validate_amount(field: &'static str, value: Decimal) -> Result<Decimal, OrderBookError> {
    if value <= Decimal::ZERO {
        return Err(OrderBookError::validation(
            field,
            format!("must be strictly positive, got {}", value),
        ));
    }
    let normalized = value.normalize();
    if normalized.scale() > DECIMAL_PLACES {
        return Err(OrderBookError::validation(
            field,
            format!(
                "{} is not representable with {} decimal places",
                value, DECIMAL_PLACES
            ),
        ));
    }
    Ok(normalized)
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, OrderBookError> {
    Decimal::from_str(raw.trim())
        .map_err(|_| OrderBookError::validation(field, format!("'{}' is not a decimal number", raw)))
}
