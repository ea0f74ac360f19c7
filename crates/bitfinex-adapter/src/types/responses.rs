/*
[INPUT]:  Raw JSON bodies returned by the exchange
[OUTPUT]: Typed response contracts and their mapping into shared records
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::models::{Ask, Balance, Bid, Board, Ticker, serde_helpers};

/// One entry of `GET /v1/markets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInfo {
    pub product_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerResponse {
    pub timestamp: String,
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub ltp: f64,
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub best_bid: f64,
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub best_ask: f64,
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub volume: f64,
}

impl From<TickerResponse> for Ticker {
    fn from(raw: TickerResponse) -> Self {
        // The ticker endpoint reports no daily range.
        Ticker {
            timestamp: raw.timestamp,
            last: raw.ltp,
            high: None,
            low: None,
            bid: raw.best_bid,
            ask: raw.best_ask,
            volume: raw.volume,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLevel {
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub price: f64,
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardResponse {
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub mid_price: f64,
    pub bids: Vec<BoardLevel>,
    pub asks: Vec<BoardLevel>,
}

impl From<BoardResponse> for Board {
    fn from(raw: BoardResponse) -> Self {
        Board {
            asks: raw
                .asks
                .into_iter()
                .map(|level| Ask {
                    price: level.price,
                    size: level.size,
                })
                .collect(),
            bids: raw
                .bids
                .into_iter()
                .map(|level| Bid {
                    price: level.price,
                    size: level.size,
                })
                .collect(),
            mid_price: raw.mid_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendChildOrderResponse {
    pub child_order_acceptance_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingCommission {
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub commission_rate: f64,
}

/// One entry of `GET /v1/me/getbalance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub currency_code: String,
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "serde_helpers::deserialize_f64")]
    pub available: f64,
}

/// Fold balance entries into a fresh map keyed by currency code.
///
/// A currency listed twice keeps its last entry.
pub fn balances_by_currency(entries: Vec<BalanceEntry>) -> HashMap<String, Balance> {
    entries
        .into_iter()
        .map(|entry| {
            (
                entry.currency_code,
                Balance {
                    amount: entry.amount,
                    available: entry.available,
                },
            )
        })
        .collect()
}
