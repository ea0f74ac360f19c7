/*
[INPUT]:  API credentials from the environment and order parameters
[OUTPUT]: Balances, commission, open orders, order acceptance ids
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use bitfinex_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Trading operations (signed requests)
///
/// Reads BITFINEX_API_KEY / BITFINEX_API_SECRET. Set BITFINEX_PLACE_ORDER=1
/// to actually submit and cancel a far-from-market limit order.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bitfinex Trading Example ===\n");

    let client = match BitfinexClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let exchange: &dyn Exchange<Error = BitfinexError> = &client;
    let symbol = DEFAULT_PRODUCT_CODE;

    match exchange.balance().await {
        Ok(balances) => {
            for (currency, balance) in &balances {
                println!(
                    "  {}: amount={} available={}",
                    currency, balance.amount, balance.available
                );
            }
        }
        Err(e) => println!("✗ Balance error: {}", e),
    }

    match exchange.get_fee(symbol).await {
        Ok(fee) => println!("✓ Commission rate for {}: {}", symbol, fee),
        Err(e) => println!("✗ Fee error: {}", e),
    }

    match exchange.get_open_orders(symbol).await {
        Ok(orders) => println!("✓ {} open order(s) on {}", orders.len(), symbol),
        Err(e) => println!("✗ Open orders error: {}", e),
    }

    if std::env::var("BITFINEX_PLACE_ORDER").as_deref() != Ok("1") {
        println!("\nSkipping order placement (set BITFINEX_PLACE_ORDER=1)");
        return;
    }

    let (order_type, side) = match ("limit".parse::<OrderType>(), "buy".parse::<Side>()) {
        (Ok(order_type), Ok(side)) => (order_type, side),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Invalid order parameters: {}", e);
            return;
        }
    };

    match exchange.order(symbol, order_type, side, 1_000.0, 0.001).await {
        Ok(id) => {
            println!("✓ Order accepted: {}", id);
            match exchange.cancel_order(symbol, &id).await {
                Ok(()) => println!("✓ Cancel requested for {}", id),
                Err(e) => println!("✗ Cancel error: {}", e),
            }
        }
        Err(e) => println!("✗ Order error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
