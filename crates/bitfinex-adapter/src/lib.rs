/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bitfinex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod exchange;
pub mod http;
pub mod types;

pub use exchange::Exchange;

// Re-export commonly used types from http
pub use http::{
    BitfinexClient,
    BitfinexError,
    ClientConfig,
    Credentials,
    DEFAULT_PRODUCT_CODE,
    RequestSigner,
    Result,
};

// Re-export all types
pub use types::*;
