use std::collections::HashMap;

use rust_decimal::Decimal;

use super::types::Currency;

/// Exchange rates for one base currency, keyed by ISO 4217 code.
///
/// A table is always built from a single response; there is no way to merge
/// or patch individual entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateTable {
    base: Currency,
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new(base: Currency, rates: HashMap<String, Decimal>) -> Self {
        Self { base, rates }
    }

    /// Builds a table from wire values. Non-finite numbers are dropped.
    pub fn from_f64(base: Currency, rates: HashMap<String, f64>) -> Self {
        let rates = rates
            .into_iter()
            .filter_map(|(code, rate)| Decimal::from_f64_retain(rate).map(|r| (code, r)))
            .collect();
        Self { base, rates }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::borrow::Cow;

    #[test]
    fn test_from_f64_drops_non_finite() {
        let mut raw = HashMap::new();
        raw.insert("USD".to_string(), 58.5);
        raw.insert("BAD".to_string(), f64::NAN);

        let table = RateTable::from_f64(Cow::Borrowed("DOP"), raw);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("USD"), Some(dec!(58.5)));
        assert_eq!(table.get("BAD"), None);
        assert_eq!(table.base(), "DOP");
    }

    #[test]
    fn test_default_is_empty() {
        let table = RateTable::default();
        assert!(table.is_empty());
        assert_eq!(table.get("USD"), None);
    }
}
