/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{BitfinexError, Result};
pub use signature::RequestSigner;

pub use client::{BitfinexClient, ClientConfig, Credentials, DEFAULT_PRODUCT_CODE};
pub use public::product_code;
