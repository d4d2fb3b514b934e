use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::ValidationError;
use crate::fx::{ConversionError, CurrencyInfo, TRACKED_CURRENCIES};

/// One conversion asked for by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub currency_code: String,
    pub amount: Decimal,
}

/// Parses free-text amount input. Accepts plain and scientific notation.
///
/// Finite numbers that `Decimal` cannot hold are reported as out of range
/// rather than as non-numeric.
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => ValidationError::AmountOutOfRange(input.to_string()),
            _ => ValidationError::InvalidAmount(input.to_string()),
        })
}

/// Input state of the converter panel.
#[derive(Debug, Clone)]
pub struct ConverterForm {
    currencies: &'static [CurrencyInfo],
    selected: usize,
    amount_input: String,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new(TRACKED_CURRENCIES)
    }
}

impl ConverterForm {
    /// Form over `currencies`, with the first one selected.
    pub fn new(currencies: &'static [CurrencyInfo]) -> Self {
        Self {
            currencies,
            selected: 0,
            amount_input: String::new(),
        }
    }

    pub fn currencies(&self) -> &'static [CurrencyInfo] {
        self.currencies
    }

    pub fn selected_currency(&self) -> Option<&'static CurrencyInfo> {
        self.currencies.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.currencies.is_empty() {
            self.selected = (self.selected + 1) % self.currencies.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.currencies.is_empty() {
            self.selected = (self.selected + self.currencies.len() - 1) % self.currencies.len();
        }
    }

    /// Selects `code` if the form offers it.
    pub fn select_code(&mut self, code: &str) -> Result<(), ValidationError> {
        let index = self
            .currencies
            .iter()
            .position(|c| c.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| ValidationError::UnsupportedCurrency(code.to_string()))?;
        self.selected = index;
        Ok(())
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn set_amount_input(&mut self, text: impl Into<String>) {
        self.amount_input = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.amount_input.push(c);
    }

    pub fn backspace(&mut self) {
        self.amount_input.pop();
    }

    /// Validates the form into a request. Touches nothing but the form.
    pub fn request(&self) -> Result<ConversionRequest, ValidationError> {
        let amount = parse_amount(&self.amount_input)?;
        let currency = self
            .selected_currency()
            .ok_or_else(|| ValidationError::UnsupportedCurrency(String::new()))?;
        Ok(ConversionRequest {
            currency_code: currency.code.to_string(),
            amount,
        })
    }
}

/// Result of a submitted conversion, ready to show in a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub request: ConversionRequest,
    pub base_currency: String,
    pub result: Result<Decimal, ConversionError>,
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn title(&self) -> &'static str {
        if self.is_success() {
            "Conversion result"
        } else {
            "Error"
        }
    }

    pub fn message(&self) -> String {
        match &self.result {
            Ok(value) => format!(
                "{} {} = {} {}",
                self.request.amount, self.request.currency_code, value, self.base_currency
            ),
            Err(e) => e.to_string(),
        }
    }
}
