/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client, signed request builders, decoded responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
[UPDATE]: 2026-10-20 keep the base URL path prefix; credentials from any lookup
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::{BitfinexError, RequestSigner, Result};

/// Base URL for the REST API
const BASE_URL: &str = "https://api.bitfinex.com";

/// Market used when a caller has no preference
pub const DEFAULT_PRODUCT_CODE: &str = "BTC_JPY";

const API_KEY_ENV: &str = "BITFINEX_API_KEY";
const API_SECRET_ENV: &str = "BITFINEX_API_SECRET";

const ACCESS_KEY_HEADER: &str = "ACCESS-KEY";
const ACCESS_TIMESTAMP_HEADER: &str = "ACCESS-TIMESTAMP";
const ACCESS_SIGN_HEADER: &str = "ACCESS-SIGN";

const ERROR_BODY_LOG_MAX_BYTES: usize = 512;

/// HTTP client configuration
///
/// `None` leaves the transport default in place.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// API key pair used to sign private requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask(&self.api_key))
            .field("secret_key", &"***REDACTED***")
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Load credentials from `BITFINEX_API_KEY` / `BITFINEX_API_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials by variable name from any source (env, config map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name).ok_or_else(|| BitfinexError::Config(format!("{name} is not set")))
        };
        Ok(Self::new(read(API_KEY_ENV)?, read(API_SECRET_ENV)?))
    }
}

fn mask(value: &str) -> String {
    if value.len() > 8 && value.is_ascii() {
        format!("{}...{}", &value[..4], &value[value.len() - 4..])
    } else {
        "***REDACTED***".to_string()
    }
}

/// Main HTTP client for the Bitfinex REST API
///
/// Owns one connection pool for its whole lifetime; dropping the client
/// releases it.
#[derive(Debug)]
pub struct BitfinexClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
    signer: RequestSigner,
}

impl BitfinexClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, BASE_URL)
    }

    /// Create a client against a custom base URL (mock servers, proxies)
    ///
    /// A path prefix such as `http://proxy/bitfinex` is kept: resources are
    /// resolved under it.
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder
            .build()
            .map_err(|err| BitfinexError::Config(format!("failed to build HTTP client: {err}")))?;

        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http_client,
            base_url,
            signer: RequestSigner::new(&credentials.secret_key)?,
            api_key: credentials.api_key,
        })
    }

    /// Load credentials from the environment and build a default client
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // `path` is the absolute resource path that gets signed; it is joined
    // relative to the base so a prefix survives.
    fn url(&self, path: &str, query: &str) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    /// Unsigned GET with parameters in the query string
    pub(crate) fn public_get(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<RequestBuilder> {
        let query = encode_query(params);
        let url = self.url(path, &query)?;
        debug!(method = "GET", path, signed = false, "sending request");
        Ok(self.http_client.get(url))
    }

    /// Signed GET; the encoded query string is the signed body
    pub(crate) fn signed_get(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<RequestBuilder> {
        let query = encode_query(params);
        let url = self.url(path, &query)?;
        debug!(method = "GET", path, signed = true, "sending request");
        let builder = self.http_client.get(url);
        Ok(self.sign(builder, Method::GET, path, &query))
    }

    /// Signed POST with a JSON body; the exact body bytes are signed
    pub(crate) fn signed_post<B>(&self, path: &str, body: &B) -> Result<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        let url = self.url(path, "")?;
        debug!(method = "POST", path, signed = true, "sending request");
        let builder = self.sign(self.http_client.post(url), Method::POST, path, &body);
        Ok(builder.body(body))
    }

    fn sign(
        &self,
        builder: RequestBuilder,
        method: Method,
        path: &str,
        body: &str,
    ) -> RequestBuilder {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.signer.sign(&timestamp, method.as_str(), path, body);

        builder
            .header(ACCESS_KEY_HEADER, &self.api_key)
            .header(ACCESS_TIMESTAMP_HEADER, timestamp)
            .header(ACCESS_SIGN_HEADER, signature)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send a request and decode a JSON body
    ///
    /// Single attempt. Transport failures and non-success statuses come back
    /// as [`BitfinexError`].
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = ensure_success(builder.send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| {
            BitfinexError::InvalidResponse(format!(
                "{err}; body: {}",
                truncate_for_log(&body, ERROR_BODY_LOG_MAX_BYTES)
            ))
        })
    }

    /// Send a request whose body is not needed
    pub(crate) async fn send_void(&self, builder: RequestBuilder) -> Result<()> {
        ensure_success(builder.send().await?).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    warn!(
        status = status.as_u16(),
        path = %url,
        body = %truncate_for_log(&body, ERROR_BODY_LOG_MAX_BYTES),
        "request failed"
    );
    Err(BitfinexError::api_error(status, body))
}

fn encode_query(params: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::with_capacity(end + 3);
    out.push_str(&value[..end]);
    out.push_str("...");
    out
}
