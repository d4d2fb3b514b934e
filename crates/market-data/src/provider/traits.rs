//! Market data provider trait definitions.
//!
//! One trait per upstream service. The dashboard only depends on these
//! traits, so tests can substitute in-memory providers.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CryptoPair, RateTable, StockQuote, Ticker};

/// Source of latest stock quotes.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use finanzas_market_data::provider::StockQuoteProvider;
///
/// struct FixedQuotes;
///
/// #[async_trait]
/// impl StockQuoteProvider for FixedQuotes {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_stock_quote(&self, symbol: &str) -> Result<StockQuote, MarketDataError> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait StockQuoteProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a ticker symbol.
    ///
    /// Returns an error when either the last price or the market
    /// capitalization is missing from the response.
    async fn get_stock_quote(&self, symbol: &str) -> Result<StockQuote, MarketDataError>;
}

/// Source of exchange order-book tickers for crypto pairs.
#[async_trait]
pub trait TickerProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the current ticker for a pair.
    async fn get_ticker(&self, pair: &CryptoPair) -> Result<Ticker, MarketDataError>;
}

/// Source of foreign-exchange rate tables.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the full rate table for `base`.
    ///
    /// Each rate in the returned table is expressed relative to `base`.
    async fn get_rates(&self, base: &str) -> Result<RateTable, MarketDataError>;
}
