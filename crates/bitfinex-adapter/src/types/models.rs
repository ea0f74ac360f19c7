/*
[INPUT]:  Decoded exchange payloads
[OUTPUT]: Shared market-data and account records (Ticker, Board, Ask, Bid, Balance)
[POS]:    Data layer - record shapes shared by every exchange client
[UPDATE]: When the shared record shapes change
[UPDATE]: 2026-10-19 numeric fields accept both JSON strings and numbers
[UPDATE]: 2026-10-20 reject NaN and infinite numeric fields
*/

use serde::{Deserialize, Serialize};

/// Last-trade snapshot for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub timestamp: String,
    pub last: f64,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub bid: f64,
    pub ask: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ask {
    pub price: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub price: f64,
    pub size: f64,
}

/// Order book snapshot. Levels keep the order the exchange returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub asks: Vec<Ask>,
    pub bids: Vec<Bid>,
    pub mid_price: f64,
}

impl Board {
    pub fn best_ask(&self) -> Option<&Ask> {
        self.asks.first()
    }

    pub fn best_bid(&self) -> Option<&Bid> {
        self.bids.first()
    }
}

/// Holdings of one currency: total amount and the part free to trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub amount: f64,
    pub available: f64,
}

impl Balance {
    /// Amount currently tied up in open orders.
    pub fn locked(&self) -> f64 {
        self.amount - self.available
    }
}

pub(crate) mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accepts `1.5` as well as `"1.5"`; anything else (including null) is an error.
    ///
    /// Non-finite results such as `"NaN"` or `"inf"` are rejected.
    pub fn deserialize_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        let number = if let Some(number) = value.as_f64() {
            number
        } else if let Some(raw) = value.as_str() {
            raw.trim().parse::<f64>().map_err(|err| {
                serde::de::Error::custom(format!("invalid number {raw:?}: {err}"))
            })?
        } else {
            return Err(serde::de::Error::custom(format!(
                "expected number or numeric string, got {value}"
            )));
        };

        if !number.is_finite() {
            return Err(serde::de::Error::custom(format!("non-finite number {value}")));
        }
        Ok(number)
    }
}
