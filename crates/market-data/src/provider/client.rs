//! Shared HTTP plumbing for the providers.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::errors::MarketDataError;

/// Connection settings shared by every provider.
#[derive(Clone, Debug, Default)]
pub struct HttpSettings {
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl HttpSettings {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub(crate) fn build_client(&self) -> Client {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        client_or_default(builder.build(), self.timeout)
    }
}

/// Falls back to a plain client when the configured one cannot be built.
/// The fallback has no timeout.
fn client_or_default<E: fmt::Display>(
    built: Result<Client, E>,
    timeout: Option<Duration>,
) -> Client {
    built.unwrap_or_else(|e| {
        warn!(
            "Failed to build HTTP client (timeout {:?}): {}; using defaults without timeout",
            timeout, e
        );
        Client::new()
    })
}

/// Issues a GET and returns the body of a successful response.
///
/// Non-success statuses are mapped onto [`MarketDataError`]; `symbol` is
/// what a 404 gets reported against.
pub(crate) async fn get_text(
    client: &Client,
    provider: &str,
    url: &str,
    params: &[(&str, &str)],
    symbol: &str,
) -> Result<String, MarketDataError> {
    debug!("{} request: {} with {} params", provider, url, params.len());

    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| MarketDataError::from_transport(provider, e))?;

    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(MarketDataError::RateLimited {
            provider: provider.to_string(),
        });
    }

    if status == StatusCode::NOT_FOUND {
        return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(MarketDataError::provider(
            provider,
            "Invalid or missing API token",
        ));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(MarketDataError::provider(
            provider,
            format!("HTTP {} - {}", status, body),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| MarketDataError::provider(provider, format!("Failed to read response: {}", e)))
}

/// Joins a configured base URL and a path without doubling slashes.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://open.er-api.com/v6/latest/", "DOP"),
            "https://open.er-api.com/v6/latest/DOP"
        );
        assert_eq!(
            join_url("https://api.binance.com", "/api/v3/ticker/bookTicker"),
            "https://api.binance.com/api/v3/ticker/bookTicker"
        );
    }

    #[test]
    fn test_client_falls_back_when_build_fails() {
        let built: Result<Client, &str> = Err("TLS backend unavailable");
        // Still usable for requests; only the timeout is lost.
        let client = client_or_default(built, Some(Duration::from_millis(500)));
        assert!(client.get("https://example.com").build().is_ok());

        let configured = HttpSettings::with_timeout(Duration::from_secs(1)).build_client();
        assert!(configured.get("https://example.com").build().is_ok());
    }

    #[test]
    fn test_default_settings_have_no_timeout() {
        assert!(HttpSettings::default().timeout.is_none());
        let settings = HttpSettings::with_timeout(Duration::from_secs(5));
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }
}
