//! IEX Cloud stock quote provider.
//!
//! Uses `/stock/{symbol}/quote`, authenticated with a publishable token
//! passed as the `token` query parameter.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::StockQuote;
use crate::provider::client::{get_text, join_url, HttpSettings};
use crate::provider::StockQuoteProvider;

pub const DEFAULT_BASE_URL: &str = "https://cloud.iexapis.com/stable";
const PROVIDER_ID: &str = "IEX_CLOUD";

/// Response from /stock/{symbol}/quote, reduced to the fields we read
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResponse {
    latest_price: Option<f64>,
    market_cap: Option<f64>,
}

/// IEX Cloud quote provider.
pub struct IexCloudProvider {
    client: Client,
    base_url: String,
    token: String,
}

impl IexCloudProvider {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, settings: &HttpSettings) -> Self {
        Self {
            client: settings.build_client(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn quote_url(&self, symbol: &str) -> String {
        join_url(
            &self.base_url,
            &format!("stock/{}/quote", urlencoding::encode(symbol)),
        )
    }
}

fn parse_quote(symbol: &str, body: &str) -> Result<StockQuote, MarketDataError> {
    let response: QuoteResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::malformed(PROVIDER_ID, e))?;

    let latest_price = response
        .latest_price
        .and_then(Decimal::from_f64_retain)
        .ok_or_else(|| MarketDataError::MissingField {
            symbol: symbol.to_string(),
            field: "latestPrice",
        })?;

    let market_cap = response
        .market_cap
        .and_then(Decimal::from_f64_retain)
        .ok_or_else(|| MarketDataError::MissingField {
            symbol: symbol.to_string(),
            field: "marketCap",
        })?;

    Ok(StockQuote::new(
        symbol.to_string(),
        latest_price,
        market_cap,
    ))
}

#[async_trait]
impl StockQuoteProvider for IexCloudProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_stock_quote(&self, symbol: &str) -> Result<StockQuote, MarketDataError> {
        let url = self.quote_url(symbol);
        let params = [("token", self.token.as_str())];
        let body = get_text(&self.client, PROVIDER_ID, &url, &params, symbol).await?;
        parse_quote(symbol, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_provider_id() {
        let provider = IexCloudProvider::new(DEFAULT_BASE_URL, "pk_test", &HttpSettings::default());
        assert_eq!(provider.id(), "IEX_CLOUD");
    }

    #[test]
    fn test_quote_url() {
        let provider = IexCloudProvider::new(
            "https://cloud.iexapis.com/stable/",
            "pk_test",
            &HttpSettings::default(),
        );
        assert_eq!(
            provider.quote_url("AAPL"),
            "https://cloud.iexapis.com/stable/stock/AAPL/quote"
        );
        assert_eq!(
            provider.quote_url("BRK.B"),
            "https://cloud.iexapis.com/stable/stock/BRK.B/quote"
        );
    }

    #[test]
    fn test_parse_quote() {
        let json = r#"{
            "symbol": "MSFT",
            "companyName": "Microsoft Corporation",
            "latestPrice": 415.5,
            "marketCap": 3088000000000,
            "peRatio": 36.1
        }"#;

        let quote = parse_quote("MSFT", json).unwrap();
        assert_eq!(quote.symbol, "MSFT");
        assert_eq!(quote.latest_price, dec!(415.5));
        assert_eq!(quote.market_cap, dec!(3088000000000));
    }

    #[test]
    fn test_parse_quote_missing_market_cap() {
        let json = r#"{"latestPrice": 12.0, "marketCap": null}"#;
        let err = parse_quote("SPY", json).unwrap_err();
        assert!(matches!(
            err,
            MarketDataError::MissingField {
                field: "marketCap",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_quote_missing_price() {
        let err = parse_quote("AAPL", "{}").unwrap_err();
        assert!(matches!(
            err,
            MarketDataError::MissingField {
                field: "latestPrice",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_quote_malformed() {
        let err = parse_quote("AAPL", "Unknown symbol").unwrap_err();
        assert!(matches!(err, MarketDataError::MalformedResponse { .. }));
    }
}
