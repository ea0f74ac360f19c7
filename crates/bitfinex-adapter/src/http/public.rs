/*
[INPUT]:  Symbol identifiers
[OUTPUT]: Market data (market list, ticker, order book)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
[UPDATE]: 2026-10-19 board accepts a product code
*/

use crate::http::{BitfinexClient, Result};
use crate::types::{Board, BoardResponse, MarketInfo, Ticker, TickerResponse};

const MARKETS_RESOURCE: &str = "/v1/markets";
const TICKER_RESOURCE: &str = "/v1/ticker";
const BOARD_RESOURCE: &str = "/v1/board";

impl BitfinexClient {
    /// List tradable product codes
    ///
    /// GET /v1/markets
    pub async fn markets(&self) -> Result<Vec<String>> {
        let builder = self.public_get(MARKETS_RESOURCE, &[])?;
        let markets: Vec<MarketInfo> = self.send_json(builder).await?;
        Ok(markets.into_iter().map(|market| market.product_code).collect())
    }

    /// Latest ticker; an empty symbol asks for the exchange default market
    ///
    /// GET /v1/ticker?product_code={product_code}
    pub async fn ticker(&self, symbol: &str) -> Result<Ticker> {
        let code = product_code(symbol);
        let params = product_code_param(code.as_deref());
        let builder = self.public_get(TICKER_RESOURCE, &params)?;
        let raw: TickerResponse = self.send_json(builder).await?;
        Ok(raw.into())
    }

    /// Order book snapshot
    ///
    /// GET /v1/board?product_code={product_code}
    pub async fn board(&self, symbol: &str) -> Result<Board> {
        let code = product_code(symbol);
        let params = product_code_param(code.as_deref());
        let builder = self.public_get(BOARD_RESOURCE, &params)?;
        let raw: BoardResponse = self.send_json(builder).await?;
        Ok(raw.into())
    }
}

/// Turn a caller symbol into a product code.
///
/// `"BTCJPY"` becomes `"BTC_JPY"`; codes that already contain `_` and
/// anything that is not a six-letter pair pass through unchanged.
pub fn product_code(symbol: &str) -> Option<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return None;
    }
    if symbol.contains('_') || symbol.len() != 6 || !symbol.is_ascii() {
        return Some(symbol.to_string());
    }
    Some(format!("{}_{}", &symbol[..3], &symbol[3..]))
}

fn product_code_param(product_code: Option<&str>) -> Vec<(&'static str, &str)> {
    product_code
        .map(|code| vec![("product_code", code)])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::product_code;
    use crate::http::{BitfinexClient, BitfinexError, ClientConfig, Credentials};
    use crate::types::{Ask, Bid, Board};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BitfinexClient {
        BitfinexClient::with_config_and_base_url(
            Credentials::new("key", "secret"),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[test]
    fn test_product_code() {
        assert_eq!(product_code(""), None);
        assert_eq!(product_code("  "), None);
        assert_eq!(product_code("BTCJPY").as_deref(), Some("BTC_JPY"));
        assert_eq!(product_code("ETH_BTC").as_deref(), Some("ETH_BTC"));
        assert_eq!(product_code("FX_BTC_JPY").as_deref(), Some("FX_BTC_JPY"));
        assert_eq!(product_code("BTCJPY28JUN2024").as_deref(), Some("BTCJPY28JUN2024"));
    }

    #[tokio::test]
    async fn test_markets() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            { "product_code": "BTC_JPY" },
            { "product_code": "FX_BTC_JPY" },
            { "product_code": "BTCJPY28JUN2024", "alias": "BTCJPY_MAT3M" }
        ]"#;

        Mock::given(method("GET"))
            .and(path("/v1/markets"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let markets = client_for(&server).markets().await.expect("markets failed");
        assert_eq!(markets, vec!["BTC_JPY", "FX_BTC_JPY", "BTCJPY28JUN2024"]);
    }

    #[tokio::test]
    async fn test_ticker() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "product_code": "BTC_JPY",
            "timestamp": "2015-07-08T02:50:59.97",
            "tick_id": 3579,
            "best_bid": 30000,
            "best_ask": 36640,
            "best_bid_size": 0.1,
            "best_ask_size": 5,
            "ltp": 31690,
            "volume": 16819.26,
            "volume_by_product": 6819.26
        }"#;

        Mock::given(method("GET"))
            .and(path("/v1/ticker"))
            .and(query_param("product_code", "BTC_JPY"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ticker = client_for(&server).ticker("BTCJPY").await.expect("ticker failed");
        assert_eq!(ticker.timestamp, "2015-07-08T02:50:59.97");
        assert_eq!(ticker.last, 31690.0);
        assert_eq!(ticker.bid, 30000.0);
        assert_eq!(ticker.ask, 36640.0);
        assert_eq!(ticker.volume, 16819.26);
        assert!(ticker.high.is_none());
        assert!(ticker.low.is_none());
    }

    #[tokio::test]
    async fn test_ticker_missing_field() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/ticker"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "timestamp": "2015-07-08T02:50:59.97",
                "best_bid": 30000,
                "best_ask": 36640,
                "volume": 1.0
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).ticker("").await.unwrap_err();
        match err {
            BitfinexError::InvalidResponse(message) => assert!(message.contains("ltp")),
            other => panic!("Expected InvalidResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_board() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "mid_price": 33320,
            "bids": [{ "price": 30000, "size": 0.1 }, { "price": 25570, "size": 3 }],
            "asks": [{ "price": 36640, "size": 5 }, { "price": 36700, "size": 1.2 }]
        }"#;

        Mock::given(method("GET"))
            .and(path("/v1/board"))
            .and(query_param("product_code", "BTC_JPY"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let board = client_for(&server).board("BTC_JPY").await.expect("board failed");

        let expected = Board {
            asks: vec![
                Ask {
                    price: 36640.0,
                    size: 5.0,
                },
                Ask {
                    price: 36700.0,
                    size: 1.2,
                },
            ],
            bids: vec![
                Bid {
                    price: 30000.0,
                    size: 0.1,
                },
                Bid {
                    price: 25570.0,
                    size: 3.0,
                },
            ],
            mid_price: 33320.0,
        };
        assert_eq!(board, expected);
    }
}
