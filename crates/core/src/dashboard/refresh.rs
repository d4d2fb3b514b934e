use std::sync::Arc;

use chrono::{DateTime, Utc};
use finanzas_market_data::{CryptoPair, StockQuoteProvider, TickerProvider};
use rust_decimal::Decimal;

use super::converter::{ConversionOutcome, ConversionRequest, ConverterForm};
use super::mode::DisplayMode;
use super::state::DashboardState;
use super::watchlist::Watchlist;
use crate::constants::UNAVAILABLE_PLACEHOLDER;
use crate::errors::ValidationError;
use crate::fx::RateProvider;

/// Outcome of fetching one symbol during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellUpdate {
    /// Formatted value to show.
    Value(String),
    /// Fetch failed; carries the placeholder to show instead.
    Unavailable(String),
}

impl CellUpdate {
    fn into_text(self) -> String {
        match self {
            Self::Value(text) | Self::Unavailable(text) => text,
        }
    }
}

/// Summary of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub mode: DisplayMode,
    pub updated: usize,
    pub unavailable: usize,
    pub finished_at: DateTime<Utc>,
}

/// Drives the refresh cycle against the three data sources.
///
/// The dashboard holds no display state of its own; every call that needs it
/// takes the [`DashboardState`] explicitly.
pub struct Dashboard {
    quotes: Arc<dyn StockQuoteProvider>,
    tickers: Arc<dyn TickerProvider>,
    rates: RateProvider,
    watchlist: Watchlist,
}

impl Dashboard {
    pub fn new(
        quotes: Arc<dyn StockQuoteProvider>,
        tickers: Arc<dyn TickerProvider>,
        rates: RateProvider,
        watchlist: Watchlist,
    ) -> Self {
        Self {
            quotes,
            tickers,
            rates,
            watchlist,
        }
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn rates(&self) -> &RateProvider {
        &self.rates
    }

    /// State for a freshly opened dashboard.
    pub fn initial_state(&self, mode: DisplayMode) -> DashboardState {
        DashboardState::new(mode, &self.watchlist)
    }

    pub fn select_mode(&self, state: &mut DashboardState, mode: DisplayMode) {
        state.select_mode(mode, &self.watchlist);
    }

    /// Runs one refresh tick over every sink of the active mode.
    ///
    /// Symbols are fetched one after another. A failed symbol gets a
    /// placeholder and the loop moves on; nothing escapes the tick.
    pub async fn tick(&self, state: &mut DashboardState) -> TickReport {
        let mode = state.mode();
        let mut updated = 0;
        let mut unavailable = 0;

        for sink in state.sinks_mut().iter_mut() {
            let update = match mode {
                DisplayMode::Stocks => self.stock_update(&sink.symbol).await,
                DisplayMode::Crypto => self.ticker_update(&sink.symbol).await,
                DisplayMode::Currencies => self.currency_update(&sink.symbol).await,
            };
            match update {
                CellUpdate::Value(_) => updated += 1,
                CellUpdate::Unavailable(_) => unavailable += 1,
            }
            sink.cell.write(update.into_text());
        }

        if unavailable > 0 {
            log::warn!(
                "{} tick finished with {} of {} symbols unavailable",
                mode,
                unavailable,
                updated + unavailable
            );
        } else {
            log::debug!("{} tick updated {} symbols", mode, updated);
        }

        let report = TickReport {
            mode,
            updated,
            unavailable,
            finished_at: Utc::now(),
        };
        state.record_tick(report.clone());
        report
    }

    async fn stock_update(&self, symbol: &str) -> CellUpdate {
        match self.quotes.get_stock_quote(symbol).await {
            Ok(quote) => CellUpdate::Value(format!(
                "{}: ${} | Market Cap: ${}",
                symbol,
                quote.latest_price.normalize(),
                quote.market_cap.normalize()
            )),
            Err(e) => {
                log::warn!("Failed to fetch quote for {} from {}: {}", symbol, self.quotes.id(), e);
                CellUpdate::Unavailable(format!("{}: {}", symbol, UNAVAILABLE_PLACEHOLDER))
            }
        }
    }

    async fn ticker_update(&self, symbol: &str) -> CellUpdate {
        let pair: CryptoPair = match symbol.parse() {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("Skipping ticker lookup: {}", e);
                return CellUpdate::Unavailable(format!("Price: {}", UNAVAILABLE_PLACEHOLDER));
            }
        };

        match self.tickers.get_ticker(&pair).await {
            Ok(ticker) => CellUpdate::Value(format!("Price: {}", ticker.ask)),
            Err(e) => {
                log::warn!("Failed to fetch ticker for {} from {}: {}", pair, self.tickers.id(), e);
                CellUpdate::Unavailable(format!("Price: {}", UNAVAILABLE_PLACEHOLDER))
            }
        }
    }

    async fn currency_update(&self, code: &str) -> CellUpdate {
        match self.rates.convert(code, Decimal::ONE).await {
            Ok(value) => CellUpdate::Value(format!("{} {}", value, self.rates.base_currency())),
            Err(e) => {
                log::warn!("Failed to convert 1 {}: {}", code, e);
                CellUpdate::Unavailable(e.to_string())
            }
        }
    }

    /// Converts an already validated request.
    pub async fn convert(&self, request: ConversionRequest) -> ConversionOutcome {
        let result = self
            .rates
            .convert(&request.currency_code, request.amount)
            .await;
        ConversionOutcome {
            request,
            base_currency: self.rates.base_currency().to_string(),
            result,
        }
    }

    /// Validates the converter form, then converts.
    ///
    /// Invalid input is rejected before any rate is fetched.
    pub async fn submit_conversion(
        &self,
        form: &ConverterForm,
    ) -> Result<ConversionOutcome, ValidationError> {
        let request = form.request()?;
        Ok(self.convert(request).await)
    }
}
