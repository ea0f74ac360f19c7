/*
[INPUT]:  Order type and side identifiers (typed or free-form strings)
[OUTPUT]: Typed Rust enums with upper-case wire serialization
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the exchange accepts new order types or sides
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::BitfinexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

/// Child order type. Only `Limit` orders carry a price on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Limit,
    Market,
}

impl OrderType {
    pub fn is_limit(self) -> bool {
        matches!(self, OrderType::Limit)
    }
}

impl FromStr for Side {
    type Err = BitfinexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(BitfinexError::InvalidOrder(format!("unknown side: {other}"))),
        }
    }
}

impl FromStr for OrderType {
    type Err = BitfinexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "limit" => Ok(OrderType::Limit),
            "market" => Ok(OrderType::Market),
            other => Err(BitfinexError::InvalidOrder(format!(
                "unknown order type: {other}"
            ))),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("BUY"),
            Side::Sell => f.write_str("SELL"),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => f.write_str("LIMIT"),
            OrderType::Market => f.write_str("MARKET"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LiMiT".parse::<OrderType>().unwrap(), OrderType::Limit);
        assert_eq!("market".parse::<OrderType>().unwrap(), OrderType::Market);
        assert_eq!("Sell".parse::<Side>().unwrap(), Side::Sell);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!(matches!(
            "stop".parse::<OrderType>(),
            Err(BitfinexError::InvalidOrder(_))
        ));
        assert!("hold".parse::<Side>().is_err());
    }

    #[test]
    fn test_wire_format_is_uppercase() {
        assert_eq!(serde_json::to_string(&OrderType::Market).unwrap(), r#""MARKET""#);
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), r#""BUY""#);
        assert_eq!(OrderType::Limit.to_string(), "LIMIT");
    }
}
