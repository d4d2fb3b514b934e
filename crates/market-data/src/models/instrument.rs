use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::MarketDataError;

/// Cryptocurrency pair as displayed, e.g. `BTC/USDT`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CryptoPair {
    pub base: Arc<str>,
    pub quote: Arc<str>,
}

impl CryptoPair {
    pub fn new(base: &str, quote: &str) -> Self {
        Self {
            base: Arc::from(base.to_ascii_uppercase()),
            quote: Arc::from(quote.to_ascii_uppercase()),
        }
    }

    /// Symbol as exchanges spell it, without separator (`BTCUSDT`).
    pub fn exchange_symbol(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }
}

impl fmt::Display for CryptoPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for CryptoPair {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((base, quote)) if !base.is_empty() && !quote.is_empty() => {
                Ok(Self::new(base.trim(), quote.trim()))
            }
            _ => Err(MarketDataError::InvalidSymbol(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let pair: CryptoPair = "btc/usdt".parse().unwrap();
        assert_eq!(&*pair.base, "BTC");
        assert_eq!(&*pair.quote, "USDT");
        assert_eq!(pair.to_string(), "BTC/USDT");
    }

    #[test]
    fn test_exchange_symbol() {
        let pair = CryptoPair::new("SOL", "USDT");
        assert_eq!(pair.exchange_symbol(), "SOLUSDT");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!(matches!(
            "BTCUSDT".parse::<CryptoPair>(),
            Err(MarketDataError::InvalidSymbol(_))
        ));
        assert!("BTC/".parse::<CryptoPair>().is_err());
    }
}
