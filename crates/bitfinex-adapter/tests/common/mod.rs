/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitfinex-adapter tests

use bitfinex_adapter::{BitfinexClient, ClientConfig, Credentials};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key-0001";
pub const TEST_SECRET_KEY: &str = "test-secret-key-0001";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed credentials used by every test client
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_SECRET_KEY)
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> BitfinexClient {
    BitfinexClient::with_config_and_base_url(
        test_credentials(),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}

/// Balance payload with the given JPY amounts
#[allow(dead_code)]
pub fn balance_body(jpy_amount: f64, jpy_available: f64) -> serde_json::Value {
    serde_json::json!([
        { "currency_code": "JPY", "amount": jpy_amount, "available": jpy_available },
        { "currency_code": "BTC", "amount": 1.5, "available": 1.0 }
    ])
}
