//! Core error types for the Finanzas dashboard.
//!
//! Refresh-path failures are never raised from this crate: they become
//! placeholder text in a display cell. What remains are the two user-facing
//! error values below.

use thiserror::Error;

pub use crate::fx::ConversionError;

/// Rejection of user input before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid numeric value")]
    InvalidAmount(String),

    #[error("Amount is out of range")]
    AmountOutOfRange(String),

    #[error("Currency '{0}' is not offered by the converter")]
    UnsupportedCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ValidationError::InvalidAmount("abc".to_string());
        assert_eq!(error.to_string(), "Please enter a valid numeric value");

        let error = ValidationError::AmountOutOfRange("1e30".to_string());
        assert_eq!(error.to_string(), "Amount is out of range");

        let error = ValidationError::UnsupportedCurrency("XYZ".to_string());
        assert_eq!(
            error.to_string(),
            "Currency 'XYZ' is not offered by the converter"
        );
    }
}
