//! Order book error types

use super::order::OrderId;
use std::fmt;

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// Order construction received a value it cannot accept
    Validation {
        /// Name of the rejected field
        field: &'static str,
        /// Why the value was rejected
        message: String,
    },

    /// An order with this id is already resting in the book
    DuplicateOrder(OrderId),

    /// Order trading pair does not match the book
    UnsupportedTradingPair {
        /// Trading pair of the book
        expected: String,
        /// Trading pair carried by the order
        actual: String,
    },

    /// Side value outside of ASK / BID
    UnsupportedOrderType(String),

    /// Order not found in the book
    OrderNotFound(OrderId),

    /// Internal bookkeeping is inconsistent. Signals a bug and leaves the
    /// affected book untrustworthy.
    InvariantViolation {
        /// Description of the inconsistency
        message: String,
    },

    /// Book configuration could not be loaded
    InvalidConfig(String),
}

impl OrderBookError {
    /// Helper for building a validation error
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        OrderBookError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Helper for building an invariant violation
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        OrderBookError::InvariantViolation {
            message: message.into(),
        }
    }

    /// Whether the error means the book state can no longer be trusted
    pub fn is_fatal(&self) -> bool {
        matches!(self, OrderBookError::InvariantViolation { .. })
    }
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::Validation { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            OrderBookError::DuplicateOrder(id) => write!(f, "Duplicate order: {}", id),
            OrderBookError::UnsupportedTradingPair { expected, actual } => {
                write!(
                    f,
                    "Unsupported trading pair: {} (book trades {})",
                    actual, expected
                )
            }
            OrderBookError::UnsupportedOrderType(side) => {
                write!(f, "Unsupported order type: {}", side)
            }
            OrderBookError::OrderNotFound(id) => write!(f, "Order not found: {}", id),
            OrderBookError::InvariantViolation { message } => {
                write!(f, "Invariant violation: {}", message)
            }
            OrderBookError::InvalidConfig(message) => {
                write!(f, "Invalid configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}

impl From<serde_json::Error> for OrderBookError {
    fn from(err: serde_json::Error) -> Self {
        OrderBookError::InvalidConfig(err.to_string())
    }
}
