use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use finanzas_core::{Dashboard, RateProvider, Watchlist};
use finanzas_market_data::{BinanceProvider, HttpSettings, IexCloudProvider, OpenErApiProvider};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installs the tracing subscriber. Output goes to the log file, since the
/// terminal belongs to the UI.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;
    let writer = Mutex::new(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(writer),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init();
    }
    Ok(())
}

pub fn build_dashboard(config: &Config) -> Dashboard {
    let settings = match config.http_timeout {
        Some(timeout) => HttpSettings::with_timeout(timeout),
        None => HttpSettings::default(),
    };

    if config.quotes_token.is_empty() {
        tracing::warn!("FINANZAS_QUOTES_TOKEN is not set; stock quotes will be unavailable");
    }

    let quotes = Arc::new(IexCloudProvider::new(
        config.quotes_url.clone(),
        config.quotes_token.clone(),
        &settings,
    ));
    let tickers = Arc::new(BinanceProvider::new(config.exchange_url.clone(), &settings));
    let rate_source = Arc::new(OpenErApiProvider::new(config.rates_url.clone(), &settings));

    Dashboard::new(
        quotes,
        tickers,
        RateProvider::new(rate_source, config.base_currency.clone()),
        Watchlist::with_base_currency(&config.base_currency),
    )
}
