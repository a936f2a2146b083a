//! Display settings applied to an order book

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};

/// Default number of price levels shown per side
pub const DEFAULT_DEPTH_LIMIT: usize = 10;

/// How many price levels per side a market data snapshot exposes.
///
/// Limits only affect snapshots, never how many levels the book stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    pub ask_depth_limit: usize,
    pub bid_depth_limit: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            ask_depth_limit: DEFAULT_DEPTH_LIMIT,
            bid_depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }
}

impl BookConfig {
    pub fn new(ask_depth_limit: usize, bid_depth_limit: usize) -> Self {
        Self {
            ask_depth_limit,
            bid_depth_limit,
        }
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, OrderBookError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
