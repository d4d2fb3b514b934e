use std::time::Duration;

use finanzas_core::constants::DEFAULT_REFRESH_INTERVAL;
use finanzas_core::fx::BASE_CURRENCY;
use finanzas_market_data::provider::{binance, iex_cloud, open_er_api};

pub struct Config {
    pub base_currency: String,
    pub rates_url: String,
    pub quotes_url: String,
    pub quotes_token: String,
    pub exchange_url: String,
    pub refresh_interval: Duration,
    pub http_timeout: Option<Duration>,
    pub log_format: String,
    pub log_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let string_or = |key: &str, default: &str| {
            var(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let millis = |key: &str| var(key).and_then(|v| v.trim().parse::<u64>().ok());

        let refresh_interval = millis("FINANZAS_REFRESH_INTERVAL_MS")
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL);
        let http_timeout = millis("FINANZAS_HTTP_TIMEOUT_MS")
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Self {
            base_currency: string_or("FINANZAS_BASE_CURRENCY", BASE_CURRENCY.code)
                .to_ascii_uppercase(),
            rates_url: string_or("FINANZAS_RATES_URL", open_er_api::DEFAULT_BASE_URL),
            quotes_url: string_or("FINANZAS_QUOTES_URL", iex_cloud::DEFAULT_BASE_URL),
            quotes_token: var("FINANZAS_QUOTES_TOKEN").unwrap_or_default(),
            exchange_url: string_or("FINANZAS_EXCHANGE_URL", binance::DEFAULT_BASE_URL),
            refresh_interval,
            http_timeout,
            log_format: string_or("FINANZAS_LOG_FORMAT", "text"),
            log_file: string_or("FINANZAS_LOG_FILE", "finanzas.log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.base_currency, "DOP");
        assert_eq!(config.rates_url, "https://open.er-api.com/v6/latest");
        assert_eq!(config.quotes_url, "https://cloud.iexapis.com/stable");
        assert_eq!(config.exchange_url, "https://api.binance.com");
        assert_eq!(config.refresh_interval, Duration::from_millis(1000));
        assert!(config.http_timeout.is_none());
        assert!(config.quotes_token.is_empty());
        assert_eq!(config.log_format, "text");
        assert_eq!(config.log_file, "finanzas.log");
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("FINANZAS_BASE_CURRENCY", "eur"),
            ("FINANZAS_REFRESH_INTERVAL_MS", "2500"),
            ("FINANZAS_HTTP_TIMEOUT_MS", "8000"),
            ("FINANZAS_QUOTES_TOKEN", "pk_live"),
        ]);
        assert_eq!(config.base_currency, "EUR");
        assert_eq!(config.refresh_interval, Duration::from_millis(2500));
        assert_eq!(config.http_timeout, Some(Duration::from_secs(8)));
        assert_eq!(config.quotes_token, "pk_live");
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_with(&[
            ("FINANZAS_REFRESH_INTERVAL_MS", "soon"),
            ("FINANZAS_HTTP_TIMEOUT_MS", "0"),
        ]);
        assert_eq!(config.refresh_interval, DEFAULT_REFRESH_INTERVAL);
        assert!(config.http_timeout.is_none());
    }
}
