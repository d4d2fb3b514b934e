//! Market data models
//!
//! This module contains the data types exchanged with the providers:
//! - `types` - Type aliases for common identifiers (Currency)
//! - `instrument` - Crypto pair identity (CryptoPair)
//! - `quote` - Latest-value structures (StockQuote, Ticker)
//! - `rates` - Exchange-rate table for a base currency (RateTable)

mod instrument;
mod quote;
mod rates;
mod types;

pub use instrument::CryptoPair;
pub use quote::{StockQuote, Ticker};
pub use rates::RateTable;
pub use types::Currency;
