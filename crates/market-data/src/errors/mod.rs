//! Error types for the market data crate.
//!
//! Every provider call reports failures through [`MarketDataError`]. Callers
//! on the refresh path never propagate these; they log them and render a
//! placeholder instead.

use thiserror::Error;

/// Errors that can occur while talking to a market data service.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol is unknown to the provider (HTTP 404).
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The response parsed but lacks a field the caller needs.
    #[error("No data for {symbol}: missing {field}")]
    MissingField {
        /// The symbol or currency the request was made for
        symbol: String,
        /// The absent field, as named on the wire
        field: &'static str,
    },

    /// The provider answered with HTTP 429.
    /// Reported only; nothing in the dashboard retries.
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request exceeded the configured timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (bad status, rejected token, ...).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The body could not be decoded into the expected shape.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider whose response was rejected
        provider: String,
        /// Decoder message
        message: String,
    },

    /// The instrument string cannot be understood (e.g. a pair without `/`).
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    pub(crate) fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed(provider: &str, err: impl std::fmt::Display) -> Self {
        Self::MalformedResponse {
            provider: provider.to_string(),
            message: err.to_string(),
        }
    }

    /// Maps a transport error, keeping timeouts distinguishable.
    pub(crate) fn from_transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::RateLimited {
            provider: "IEX_CLOUD".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: IEX_CLOUD");

        let error = MarketDataError::provider("BINANCE", "Invalid symbol.");
        assert_eq!(
            format!("{}", error),
            "Provider error: BINANCE - Invalid symbol."
        );
    }

    #[test]
    fn test_missing_field_display() {
        let error = MarketDataError::MissingField {
            symbol: "AAPL".to_string(),
            field: "marketCap",
        };
        assert_eq!(format!("{}", error), "No data for AAPL: missing marketCap");
    }
}
