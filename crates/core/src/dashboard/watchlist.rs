use finanzas_market_data::CryptoPair;

use super::mode::DisplayMode;
use super::sinks::SinkSpec;
use crate::fx::{CurrencyInfo, BASE_CURRENCY, TRACKED_CURRENCIES};

pub const DEFAULT_STOCK_SYMBOLS: &[&str] = &["MSFT", "AAPL", "NVDA", "AMZN", "GOOGL"];

pub const DEFAULT_CRYPTO_PAIRS: &[&str] = &["BTC/USDT", "ETH/USDT", "BNB/USDT", "SOL/USDT", "XRP/USDT"];

/// Symbols shown in each mode. Fixed for the lifetime of the dashboard.
#[derive(Debug, Clone)]
pub struct Watchlist {
    pub stocks: Vec<String>,
    pub crypto_pairs: Vec<CryptoPair>,
    pub currencies: &'static [CurrencyInfo],
    pub base_currency: String,
}

impl Default for Watchlist {
    fn default() -> Self {
        Self::with_base_currency(BASE_CURRENCY.code)
    }
}

impl Watchlist {
    pub fn with_base_currency(base_currency: &str) -> Self {
        Self {
            stocks: DEFAULT_STOCK_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            crypto_pairs: DEFAULT_CRYPTO_PAIRS
                .iter()
                .filter_map(|p| p.parse().ok())
                .collect(),
            currencies: TRACKED_CURRENCIES,
            base_currency: base_currency.to_ascii_uppercase(),
        }
    }

    /// Sink layout for `mode`, in display order.
    pub fn sink_specs(&self, mode: DisplayMode) -> Vec<SinkSpec> {
        match mode {
            DisplayMode::Currencies => self
                .currencies
                .iter()
                .map(|c| {
                    SinkSpec::new(
                        c.code,
                        format!(
                            "1 {} ({}) to {}:",
                            c.code, c.display_name, self.base_currency
                        ),
                    )
                })
                .collect(),
            DisplayMode::Stocks => self
                .stocks
                .iter()
                .map(|s| SinkSpec::new(s.clone(), format!("{}:", s)))
                .collect(),
            DisplayMode::Crypto => self
                .crypto_pairs
                .iter()
                .map(|p| SinkSpec::new(p.to_string(), p.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_watchlist() {
        let watchlist = Watchlist::default();
        assert_eq!(watchlist.stocks.len(), 5);
        assert_eq!(watchlist.crypto_pairs.len(), 5);
        assert_eq!(watchlist.currencies.len(), 6);
        assert_eq!(watchlist.base_currency, "DOP");
    }

    #[test]
    fn test_currency_captions_name_base() {
        let watchlist = Watchlist::default();
        let specs = watchlist.sink_specs(DisplayMode::Currencies);
        assert_eq!(specs[0].symbol, "USD");
        assert_eq!(specs[0].caption, "1 USD (US Dollar) to DOP:");
    }

    #[test]
    fn test_crypto_specs_use_display_pairs() {
        let watchlist = Watchlist::default();
        let symbols: Vec<_> = watchlist
            .sink_specs(DisplayMode::Crypto)
            .into_iter()
            .map(|s| s.symbol)
            .collect();
        assert_eq!(symbols, DEFAULT_CRYPTO_PAIRS.to_vec());
    }
}
