/*
[INPUT]:  Query parameters and signed ACCESS-* headers
[OUTPUT]: User account data (open orders, commission, balances)
[POS]:    HTTP layer - user data endpoints (require signed GET)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

// ### User Endpoints

use std::collections::HashMap;

use crate::http::{BitfinexClient, Result};
use crate::types::{Balance, BalanceEntry, TradingCommission, balances_by_currency};

const OPEN_ORDERS_RESOURCE: &str = "/v1/me/getchildorders";
const TRADING_COMMISSION_RESOURCE: &str = "/v1/me/gettradingcommission";
const BALANCE_RESOURCE: &str = "/v1/me/getbalance";

impl BitfinexClient {
    /// Active child orders, optionally limited to one product
    ///
    /// GET /v1/me/getchildorders?child_order_state=ACTIVE&product_code={symbol}
    pub async fn get_open_orders(&self, symbol: &str) -> Result<Vec<serde_json::Value>> {
        let mut params = vec![("child_order_state", "ACTIVE")];
        if !symbol.is_empty() {
            params.push(("product_code", symbol));
        }

        let builder = self.signed_get(OPEN_ORDERS_RESOURCE, &params)?;
        self.send_json(builder).await
    }

    /// Commission rate charged on the given product
    ///
    /// GET /v1/me/gettradingcommission?product_code={symbol}
    pub async fn get_fee(&self, symbol: &str) -> Result<f64> {
        let builder = self.signed_get(TRADING_COMMISSION_RESOURCE, &[("product_code", symbol)])?;
        let commission: TradingCommission = self.send_json(builder).await?;
        Ok(commission.commission_rate)
    }

    /// Balances keyed by currency code
    ///
    /// GET /v1/me/getbalance
    pub async fn balance(&self) -> Result<HashMap<String, Balance>> {
        let builder = self.signed_get(BALANCE_RESOURCE, &[])?;
        let entries: Vec<BalanceEntry> = self.send_json(builder).await?;
        Ok(balances_by_currency(entries))
    }
}
