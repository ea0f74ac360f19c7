/*
[INPUT]:  Order parameters with signed ACCESS-* headers
[OUTPUT]: Order acceptance ids and cancellation confirmation
[POS]:    HTTP layer - trading endpoints (require signed POST)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{BitfinexClient, Result};
use crate::types::{
    CancelChildOrderRequest, OrderType, SendChildOrderRequest, SendChildOrderResponse, Side,
};

const ORDER_RESOURCE: &str = "/v1/me/sendchildorder";
const CANCEL_ORDER_RESOURCE: &str = "/v1/me/cancelchildorder";

impl BitfinexClient {
    /// Place a child order and return its acceptance id
    ///
    /// `price` is only sent for limit orders.
    pub async fn order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: Side,
        price: f64,
        size: f64,
    ) -> Result<String> {
        let req = SendChildOrderRequest::new(symbol, order_type, side, price, size);
        self.send_child_order(&req).await
    }

    /// POST /v1/me/sendchildorder
    pub async fn send_child_order(&self, req: &SendChildOrderRequest) -> Result<String> {
        let builder = self.signed_post(ORDER_RESOURCE, req)?;
        let response: SendChildOrderResponse = self.send_json(builder).await?;
        Ok(response.child_order_acceptance_id)
    }

    /// Cancel an order by acceptance id
    ///
    /// POST /v1/me/cancelchildorder
    pub async fn cancel_order(&self, symbol: &str, order_id: &str) -> Result<()> {
        let req = CancelChildOrderRequest {
            product_code: symbol.to_string(),
            child_order_acceptance_id: order_id.to_string(),
        };
        let builder = self.signed_post(CANCEL_ORDER_RESOURCE, &req)?;
        self.send_void(builder).await
    }
}
