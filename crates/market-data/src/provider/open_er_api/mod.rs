//! ExchangeRate-API open access provider.
//!
//! `GET {base_url}/{BASE}` returns every rate relative to `BASE`.
//! No authentication; upstream refreshes once a day.

use std::borrow::Cow;
use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::RateTable;
use crate::provider::client::{get_text, join_url, HttpSettings};
use crate::provider::RateSource;

pub const DEFAULT_BASE_URL: &str = "https://open.er-api.com/v6/latest";
const PROVIDER_ID: &str = "OPEN_ER_API";

#[derive(Debug, Deserialize)]
struct LatestResponse {
    /// "success" or "error"
    #[serde(default)]
    result: Option<String>,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
    rates: Option<HashMap<String, f64>>,
}

/// Open exchange-rate provider.
pub struct OpenErApiProvider {
    client: Client,
    base_url: String,
}

impl OpenErApiProvider {
    pub fn new(base_url: impl Into<String>, settings: &HttpSettings) -> Self {
        Self {
            client: settings.build_client(),
            base_url: base_url.into(),
        }
    }
}

fn parse_rates(base: &str, body: &str) -> Result<RateTable, MarketDataError> {
    let response: LatestResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::malformed(PROVIDER_ID, e))?;

    if response.result.as_deref() == Some("error") {
        let reason = response
            .error_type
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(MarketDataError::provider(PROVIDER_ID, reason));
    }

    let rates = response.rates.ok_or_else(|| MarketDataError::MissingField {
        symbol: base.to_string(),
        field: "rates",
    })?;

    Ok(RateTable::from_f64(Cow::Owned(base.to_string()), rates))
}

#[async_trait]
impl RateSource for OpenErApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_rates(&self, base: &str) -> Result<RateTable, MarketDataError> {
        let url = join_url(&self.base_url, &urlencoding::encode(base));
        let body = get_text(&self.client, PROVIDER_ID, &url, &[], base).await?;
        parse_rates(base, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_provider_id() {
        let provider = OpenErApiProvider::new(DEFAULT_BASE_URL, &HttpSettings::default());
        assert_eq!(provider.id(), "OPEN_ER_API");
    }

    #[test]
    fn test_parse_rates() {
        let json = r#"{
            "result": "success",
            "provider": "https://www.exchangerate-api.com",
            "base_code": "DOP",
            "rates": {
                "DOP": 1,
                "USD": 0.01695,
                "EUR": 0.01562
            }
        }"#;

        let table = parse_rates("DOP", json).unwrap();
        assert_eq!(table.base(), "DOP");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("DOP"), Some(dec!(1)));
    }

    #[test]
    fn test_parse_rates_without_result_field() {
        let table = parse_rates("DOP", r#"{"rates": {"EUR": 63.2}}"#).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parse_error_result() {
        let json = r#"{"result": "error", "error-type": "unsupported-code"}"#;
        let err = parse_rates("XXX", json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Provider error: OPEN_ER_API - unsupported-code"
        );
    }

    #[test]
    fn test_parse_missing_rates() {
        let err = parse_rates("DOP", r#"{"result": "success"}"#).unwrap_err();
        assert!(matches!(err, MarketDataError::MissingField { field: "rates", .. }));
    }
}
