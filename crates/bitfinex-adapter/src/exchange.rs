/*
[INPUT]:  Exchange-agnostic calls from strategy code
[OUTPUT]: Shared records (Ticker, Board, Balance) from any exchange client
[POS]:    Capability layer - common interface implemented per exchange
[UPDATE]: When the common exchange contract changes
[UPDATE]: 2026-10-20 error type is chosen by each implementation
*/

use std::collections::HashMap;

use async_trait::async_trait;

use crate::http::{BitfinexClient, BitfinexError};
use crate::types::{Balance, Board, OrderType, Side, Ticker};

/// Operations every exchange client in the system provides.
///
/// Each client reports failures in its own error type; trait objects name it,
/// e.g. `Box<dyn Exchange<Error = BitfinexError>>`.
#[async_trait]
pub trait Exchange: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Exchange name, for logs and routing.
    fn name(&self) -> &str;

    // === Market data ===

    async fn markets(&self) -> Result<Vec<String>, Self::Error>;

    async fn ticker(&self, symbol: &str) -> Result<Ticker, Self::Error>;

    async fn board(&self, symbol: &str) -> Result<Board, Self::Error>;

    // === Orders ===

    /// Returns the exchange-assigned order id.
    async fn order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: Side,
        price: f64,
        size: f64,
    ) -> Result<String, Self::Error>;

    /// Active orders as the exchange reports them.
    async fn get_open_orders(&self, symbol: &str) -> Result<Vec<serde_json::Value>, Self::Error>;

    async fn cancel_order(&self, symbol: &str, order_id: &str) -> Result<(), Self::Error>;

    // === Account ===

    async fn get_fee(&self, symbol: &str) -> Result<f64, Self::Error>;

    async fn balance(&self) -> Result<HashMap<String, Balance>, Self::Error>;
}

#[async_trait]
impl Exchange for BitfinexClient {
    type Error = BitfinexError;

    fn name(&self) -> &str {
        "bitfinex"
    }

    async fn markets(&self) -> Result<Vec<String>, BitfinexError> {
        BitfinexClient::markets(self).await
    }

    async fn ticker(&self, symbol: &str) -> Result<Ticker, BitfinexError> {
        BitfinexClient::ticker(self, symbol).await
    }

    async fn board(&self, symbol: &str) -> Result<Board, BitfinexError> {
        BitfinexClient::board(self, symbol).await
    }

    async fn order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: Side,
        price: f64,
        size: f64,
    ) -> Result<String, BitfinexError> {
        BitfinexClient::order(self, symbol, order_type, side, price, size).await
    }

    async fn get_open_orders(&self, symbol: &str) -> Result<Vec<serde_json::Value>, BitfinexError> {
        BitfinexClient::get_open_orders(self, symbol).await
    }

    async fn cancel_order(&self, symbol: &str, order_id: &str) -> Result<(), BitfinexError> {
        BitfinexClient::cancel_order(self, symbol, order_id).await
    }

    async fn get_fee(&self, symbol: &str) -> Result<f64, BitfinexError> {
        BitfinexClient::get_fee(self, symbol).await
    }

    async fn balance(&self) -> Result<HashMap<String, Balance>, BitfinexError> {
        BitfinexClient::balance(self).await
    }
}
