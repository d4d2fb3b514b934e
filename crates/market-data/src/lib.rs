//! Finanzas Market Data Crate
//!
//! This crate fetches the three kinds of data the dashboard displays:
//! - Stock quotes (last price and market capitalization)
//! - Crypto exchange tickers (best ask)
//! - Foreign-exchange rate tables for a base currency
//!
//! # Core Types
//!
//! - [`StockQuote`] - Latest quote for a ticker symbol
//! - [`Ticker`] - Order-book ticker for a crypto pair
//! - [`RateTable`] - Rates relative to one base currency
//! - [`CryptoPair`] - `BASE/QUOTE` pair as displayed
//!
//! # Providers
//!
//! - [`IexCloudProvider`] implements [`StockQuoteProvider`]
//! - [`BinanceProvider`] implements [`TickerProvider`]
//! - [`OpenErApiProvider`] implements [`RateSource`]

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;

// Re-export all public types from models
pub use models::{CryptoPair, Currency, RateTable, StockQuote, Ticker};

// Re-export provider types
pub use provider::binance::BinanceProvider;
pub use provider::iex_cloud::IexCloudProvider;
pub use provider::open_er_api::OpenErApiProvider;
pub use provider::{HttpSettings, RateSource, StockQuoteProvider, TickerProvider};
