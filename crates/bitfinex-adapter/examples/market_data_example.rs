/*
[INPUT]:  Product code (e.g., "BTC_JPY")
[OUTPUT]: Market data (market list, ticker, order book)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bitfinex_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no signature required)
///
/// Credentials are still needed to build the client but are not sent.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bitfinex Market Data Example ===\n");

    let client = match BitfinexClient::new(Credentials::new("", "")) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (public endpoints are unsigned)\n");

    println!("Querying markets...");
    match client.markets().await {
        Ok(markets) => println!("✓ Markets: {:?}", markets),
        Err(e) => println!("✗ Error: {}", e),
    }

    let symbol = DEFAULT_PRODUCT_CODE;

    println!("\nQuerying ticker for {}...", symbol);
    match client.ticker(symbol).await {
        Ok(ticker) => println!("✓ Ticker: {:?}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying board for {}...", symbol);
    match client.board(symbol).await {
        Ok(board) => println!(
            "✓ Board: mid={} asks={} bids={} best_ask={:?} best_bid={:?}",
            board.mid_price,
            board.asks.len(),
            board.bids.len(),
            board.best_ask(),
            board.best_bid()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
