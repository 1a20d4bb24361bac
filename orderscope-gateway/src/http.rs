//! HTTP implementation of the order gateway.
//!
//! One request shape: `GET <base>/order/get-order/<escaped id>` with
//! `Accept: application/json`. Status mapping, envelope validation and
//! schema decoding all happen here; callers only ever see [`FetchedOrder`]
//! or a [`GatewayError`].

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::error::{GatewayError, Result};
use crate::traits::OrderGateway;
use crate::types::FetchedOrder;
use crate::wire::OrderEnvelope;

/// Maximum number of characters of a response body to include in logs.
const BODY_LOG_LIMIT: usize = 256;

/// Order gateway backed by `reqwest`.
///
/// No overall request timeout is configured: a lookup against a silent
/// backend stays pending until the caller gives up. Only timeouts the
/// transport itself reports surface as [`GatewayError::Timeout`].
pub struct HttpOrderGateway {
    client: Client,
    base_url: String,
}

impl HttpOrderGateway {
    /// Creates a gateway for the backend at `base_url`.
    ///
    /// A trailing slash on `base_url` is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this gateway talks to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn fetch_order(&self, identifier: &str) -> Result<FetchedOrder> {
        let url = format!(
            "{}/order/get-order/{}",
            self.base_url,
            urlencoding::encode(identifier)
        );
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    GatewayError::Network {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let response_text = response.text().await.map_err(|e| GatewayError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        let envelope: OrderEnvelope = serde_json::from_str(&response_text).map_err(|e| {
            log::error!("JSON decode failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(&response_text));
            GatewayError::Decode {
                detail: e.to_string(),
            }
        })?;

        if !envelope.success {
            log::warn!("Lookup envelope reports failure for '{identifier}'");
            return Err(GatewayError::InvalidFormat);
        }
        let wire = envelope.data.ok_or(GatewayError::InvalidFormat)?;

        Ok(FetchedOrder {
            order: wire.into(),
            served_from_cache: envelope.cached,
        })
    }
}

/// Truncate a response body for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the
/// first `BODY_LOG_LIMIT` characters with a suffix giving the total length.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= BODY_LOG_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, BODY_LOG_LIMIT)],
            s.len()
        )
    }
}

/// MSRV-compatible replacement for `str::floor_char_boundary`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}
