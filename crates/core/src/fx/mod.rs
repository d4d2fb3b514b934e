//! FX (Foreign Exchange) module - rate table, conversion, and currency catalog.

pub mod currency;
mod fx_errors;
mod rate_provider;

pub use currency::{normalize_currency_code, CurrencyInfo, BASE_CURRENCY, TRACKED_CURRENCIES};
pub use fx_errors::ConversionError;
pub use rate_provider::RateProvider;
