use std::borrow::Cow;
use std::sync::{Arc, RwLock};

use finanzas_market_data::{RateSource, RateTable};
use rust_decimal::Decimal;

use super::currency::normalize_currency_code;
use super::fx_errors::ConversionError;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Holds the latest rate table for one base currency and converts amounts into it.
///
/// The table lives for the whole process. It is only fetched when asked for
/// (`refresh`) or when a conversion finds it empty.
#[derive(Clone)]
pub struct RateProvider {
    source: Arc<dyn RateSource>,
    base_currency: String,
    table: Arc<RwLock<RateTable>>,
}

impl RateProvider {
    pub fn new(source: Arc<dyn RateSource>, base_currency: impl Into<String>) -> Self {
        let base_currency: String = base_currency.into();
        let base_currency = normalize_currency_code(&base_currency);
        let table = RateTable::new(Cow::Owned(base_currency.clone()), Default::default());
        Self {
            source,
            base_currency,
            table: Arc::new(RwLock::new(table)),
        }
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// True once a fetch has populated at least one rate.
    pub fn is_loaded(&self) -> bool {
        self.table.read().map(|t| !t.is_empty()).unwrap_or(false)
    }

    /// Snapshot of the current table.
    pub fn table(&self) -> RateTable {
        self.table
            .read()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    /// Fetches a fresh table and replaces the held one wholesale.
    ///
    /// Failures are logged and leave the previous table in place.
    pub async fn refresh(&self) {
        match self.source.get_rates(&self.base_currency).await {
            Ok(fresh) => match self.table.write() {
                Ok(mut table) => {
                    log::debug!(
                        "Loaded {} exchange rates for {} from {}",
                        fresh.len(),
                        self.base_currency,
                        self.source.id()
                    );
                    *table = fresh;
                }
                Err(e) => log::error!("Rate table lock poisoned: {}", e),
            },
            Err(e) => {
                log::warn!(
                    "Failed to fetch exchange rates for {} from {}: {}",
                    self.base_currency,
                    self.source.id(),
                    e
                );
            }
        }
    }

    /// Converts `amount` of `currency_code` into the base currency.
    ///
    /// Computes `amount / rate` rounded to two decimals, where `rate` is the
    /// table entry for `currency_code`. An empty table is refreshed first.
    pub async fn convert(
        &self,
        currency_code: &str,
        amount: Decimal,
    ) -> Result<Decimal, ConversionError> {
        if !self.is_loaded() {
            self.refresh().await;
        }

        let code = normalize_currency_code(currency_code);
        let rate = self
            .table
            .read()
            .map_err(|e| ConversionError::CacheError(e.to_string()))?
            .get(&code)
            .ok_or_else(|| ConversionError::InvalidCurrencyCode(code.clone()))?;

        amount
            .checked_div(rate)
            .map(|value| value.round_dp(DISPLAY_DECIMAL_PRECISION))
            .ok_or_else(|| ConversionError::Arithmetic {
                code,
                rate: rate.to_string(),
            })
    }
}
