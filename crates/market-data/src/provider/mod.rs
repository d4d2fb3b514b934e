//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - One trait per upstream service (`StockQuoteProvider`, `TickerProvider`, `RateSource`)
//! - Shared HTTP settings
//! - Concrete provider implementations (IEX Cloud, Binance, ExchangeRate-API)
//!
//! Providers are plain request/response clients: no caching, no retries.
//! A failed call is returned to the caller as a `MarketDataError`.

mod client;
mod traits;

pub mod binance;
pub mod iex_cloud;
pub mod open_er_api;

// Re-exports
pub use client::HttpSettings;
pub use traits::{RateSource, StockQuoteProvider, TickerProvider};
