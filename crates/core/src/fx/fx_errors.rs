use thiserror::Error;

/// Failure of a single conversion.
///
/// These are values meant to be shown to the user as-is; a conversion never
/// panics and never aborts the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid currency code")]
    InvalidCurrencyCode(String),

    #[error("Error: cannot convert {code} at rate {rate}")]
    Arithmetic { code: String, rate: String },

    #[error("Error: rate cache unavailable: {0}")]
    CacheError(String),
}
