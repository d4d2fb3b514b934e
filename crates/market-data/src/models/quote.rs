use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest stock quote
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Ticker symbol (e.g., "AAPL")
    pub symbol: String,

    /// Last traded price
    pub latest_price: Decimal,

    /// Market capitalization in the quote currency
    pub market_cap: Decimal,
}

impl StockQuote {
    pub fn new(symbol: String, latest_price: Decimal, market_cap: Decimal) -> Self {
        Self {
            symbol,
            latest_price,
            market_cap,
        }
    }
}

/// Exchange order-book ticker, reduced to the fields the dashboard shows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Display pair (e.g., "BTC/USDT")
    pub symbol: String,

    /// Best ask price
    pub ask: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_stock_quote_new() {
        let quote = StockQuote::new("AAPL".to_string(), dec!(189.25), dec!(2950000000000));
        assert_eq!(quote.latest_price, dec!(189.25));
        assert_eq!(quote.symbol, "AAPL");
    }
}
