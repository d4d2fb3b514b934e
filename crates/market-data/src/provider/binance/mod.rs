//! Binance public ticker provider.
//!
//! Reads the best ask from `/api/v3/ticker/bookTicker`. Public endpoint,
//! no API key. Prices arrive as decimal strings.

use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::{CryptoPair, Ticker};
use crate::provider::client::{get_text, join_url, HttpSettings};
use crate::provider::TickerProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";
const PROVIDER_ID: &str = "BINANCE";
const BOOK_TICKER_PATH: &str = "api/v3/ticker/bookTicker";

/// Response from /api/v3/ticker/bookTicker
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookTickerResponse {
    #[allow(dead_code)]
    symbol: String,
    ask_price: Option<String>,
}

/// Binance exchange ticker provider.
pub struct BinanceProvider {
    client: Client,
    base_url: String,
}

impl BinanceProvider {
    pub fn new(base_url: impl Into<String>, settings: &HttpSettings) -> Self {
        Self {
            client: settings.build_client(),
            base_url: base_url.into(),
        }
    }
}

fn parse_price(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|s| Decimal::from_str(s).ok())
        .map(|d| d.normalize())
}

fn parse_ticker(pair: &CryptoPair, body: &str) -> Result<Ticker, MarketDataError> {
    let response: BookTickerResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::malformed(PROVIDER_ID, e))?;

    let ask = parse_price(response.ask_price.as_deref()).ok_or_else(|| {
        MarketDataError::MissingField {
            symbol: pair.to_string(),
            field: "askPrice",
        }
    })?;

    Ok(Ticker {
        symbol: pair.to_string(),
        ask,
    })
}

#[async_trait]
impl TickerProvider for BinanceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_ticker(&self, pair: &CryptoPair) -> Result<Ticker, MarketDataError> {
        let url = join_url(&self.base_url, BOOK_TICKER_PATH);
        let symbol = pair.exchange_symbol();
        let params = [("symbol", symbol.as_str())];
        let body = get_text(&self.client, PROVIDER_ID, &url, &params, &pair.to_string()).await?;
        parse_ticker(pair, &body)
    }
}
