// src/error.rs
//! Domain errors raised by the calculation layer

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveDenominator { field: &'static str, value: f64 },

    #[error("Invalid market data: {0}")]
    InvalidMarketData(String),

    #[error("Invalid offer: {0}")]
    InvalidOffer(String),
}

pub type CompResult<T> = Result<T, CompError>;

/// Reject zero or negative values that a formula divides by.
pub(crate) fn require_positive(field: &'static str, value: f64) -> CompResult<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(CompError::NonPositiveDenominator { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("gross_income", 10.0), Ok(10.0));
        assert!(require_positive("gross_income", 0.0).is_err());
        assert!(require_positive("gross_income", -5.0).is_err());
        assert!(require_positive("gross_income", f64::NAN).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = require_positive("current_salary", 0.0).unwrap_err();
        assert_eq!(err.to_string(), "current_salary must be greater than zero (got 0)");
    }
}
