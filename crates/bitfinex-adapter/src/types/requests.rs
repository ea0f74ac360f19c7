/*
[INPUT]:  Order parameters from callers
[OUTPUT]: JSON request bodies for authenticated POST endpoints
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side};

/// Body of `POST /v1/me/sendchildorder`.
///
/// Field order matches the exchange documentation and is preserved in the
/// signed JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendChildOrderRequest {
    pub product_code: String,
    pub child_order_type: OrderType,
    pub side: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub size: f64,
}

impl SendChildOrderRequest {
    /// Build an order body. The price is dropped for anything but limit orders.
    pub fn new(
        product_code: impl Into<String>,
        order_type: OrderType,
        side: Side,
        price: f64,
        size: f64,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            child_order_type: order_type,
            side,
            price: order_type.is_limit().then_some(price),
            size,
        }
    }
}

/// Body of `POST /v1/me/cancelchildorder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelChildOrderRequest {
    pub product_code: String,
    pub child_order_acceptance_id: String,
}
