//! Static currency catalog.

/// Display metadata for a currency shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub display_name: &'static str,
}

/// Dominican peso. All displayed rates and conversions are expressed in it.
pub const BASE_CURRENCY: CurrencyInfo = CurrencyInfo {
    code: "DOP",
    display_name: "Dominican Peso",
};

/// Currencies listed in Currencies mode and offered by the converter, in display order.
pub const TRACKED_CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo {
        code: "USD",
        display_name: "US Dollar",
    },
    CurrencyInfo {
        code: "EUR",
        display_name: "Euro",
    },
    CurrencyInfo {
        code: "CNY",
        display_name: "Chinese Yuan",
    },
    CurrencyInfo {
        code: "GBP",
        display_name: "Pound Sterling",
    },
    CurrencyInfo {
        code: "CHF",
        display_name: "Swiss Franc",
    },
    CurrencyInfo {
        code: "JPY",
        display_name: "Japanese Yen",
    },
];

/// Normalizes user-typed codes to the upper-case form rate tables use.
pub fn normalize_currency_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_codes_are_unique() {
        for (i, a) in TRACKED_CURRENCIES.iter().enumerate() {
            for b in &TRACKED_CURRENCIES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn test_normalize_currency_code() {
        assert_eq!(normalize_currency_code(" usd "), "USD");
    }
}
