// src/compensation/tax.rs
//! Rough take-home pay estimate (2024, single filer). Not tax advice.

use tracing::debug;

use crate::error::{require_positive, CompResult};
use crate::types::TakeHomePay;
use crate::utils::round_to;

/// (threshold, rate, base tax owed at the threshold), highest bracket first
const FEDERAL_BRACKETS: [(f64, f64, f64); 6] = [
    (578_125.0, 0.37, 174_238.0),
    (231_250.0, 0.35, 52_832.0),
    (182_100.0, 0.32, 35_664.0),
    (95_375.0, 0.24, 16_290.0),
    (44_725.0, 0.22, 5_147.0),
    (11_000.0, 0.12, 1_100.0),
];
const FEDERAL_BOTTOM_RATE: f64 = 0.10;

pub const SOCIAL_SECURITY_WAGE_BASE: f64 = 160_200.0;
const SOCIAL_SECURITY_RATE: f64 = 0.062;
const MEDICARE_RATE: f64 = 0.0145;
const ADDITIONAL_MEDICARE_THRESHOLD: f64 = 200_000.0;
const ADDITIONAL_MEDICARE_RATE: f64 = 0.009;

pub fn federal_tax(gross: f64) -> f64 {
    FEDERAL_BRACKETS
        .iter()
        .find(|(threshold, _, _)| gross > *threshold)
        .map(|(threshold, rate, base)| base + rate * (gross - threshold))
        .unwrap_or(gross * FEDERAL_BOTTOM_RATE)
}

/// Simplified flat rates; unknown states fall back to 5%
pub fn state_tax(gross: f64, state: &str) -> f64 {
    let rate = match state.trim().to_uppercase().as_str() {
        "CA" => {
            if gross > 61_214.0 {
                0.093
            } else {
                0.06
            }
        }
        "NY" => {
            if gross > 25_000.0 {
                0.065
            } else {
                0.04
            }
        }
        "WA" | "TX" => 0.0,
        other => {
            debug!("No state table for '{}', using the 5% default", other);
            0.05
        }
    };
    gross * rate
}

pub fn fica(gross: f64) -> f64 {
    let social_security = gross.min(SOCIAL_SECURITY_WAGE_BASE) * SOCIAL_SECURITY_RATE;
    let medicare = gross * MEDICARE_RATE;
    let additional = if gross > ADDITIONAL_MEDICARE_THRESHOLD {
        (gross - ADDITIONAL_MEDICARE_THRESHOLD) * ADDITIONAL_MEDICARE_RATE
    } else {
        0.0
    };
    social_security + medicare + additional
}

pub fn calculate_take_home_pay(gross_income: f64, state: &str) -> CompResult<TakeHomePay> {
    let gross = require_positive("gross_income", gross_income)?;

    let federal = federal_tax(gross);
    let state_tax = state_tax(gross, state);
    let fica = fica(gross);
    let take_home = gross - federal - state_tax - fica;

    Ok(TakeHomePay {
        federal: federal.round(),
        state_tax: state_tax.round(),
        fica: fica.round(),
        take_home: take_home.round(),
        effective_rate: round_to((gross - take_home) / gross * 100.0, 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompError;

    #[test]
    fn test_texas_150k() {
        let pay = calculate_take_home_pay(150_000.0, "TX").unwrap();
        assert_eq!(pay.federal, 29_400.0);
        assert_eq!(pay.state_tax, 0.0);
        assert_eq!(pay.fica, 11_475.0);
        assert_eq!(pay.take_home, 109_125.0);
        assert!((pay.effective_rate - 27.3).abs() < 0.05);
    }

    #[test]
    fn test_federal_brackets() {
        assert_eq!(federal_tax(10_000.0), 1_000.0);
        assert_eq!(federal_tax(11_000.0), 1_100.0);
        assert!((federal_tax(50_000.0) - (5_147.0 + 0.22 * 5_275.0)).abs() < 1e-6);
        assert!((federal_tax(600_000.0) - (174_238.0 + 0.37 * 21_875.0)).abs() < 1e-6);
    }

    #[test]
    fn test_state_rates() {
        assert!((state_tax(100_000.0, "CA") - 9_300.0).abs() < 1e-6);
        assert!((state_tax(50_000.0, "ca") - 3_000.0).abs() < 1e-6);
        assert!((state_tax(100_000.0, "NY") - 6_500.0).abs() < 1e-6);
        assert!((state_tax(20_000.0, "NY") - 800.0).abs() < 1e-6);
        assert_eq!(state_tax(100_000.0, "WA"), 0.0);
        assert!((state_tax(100_000.0, "OR") - 5_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_fica_caps() {
        // SS capped at the wage base, additional Medicare above 200k
        let expected = 160_200.0 * 0.062 + 250_000.0 * 0.0145 + 50_000.0 * 0.009;
        assert!((fica(250_000.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_zero_gross_is_an_error() {
        let err = calculate_take_home_pay(0.0, "CA").unwrap_err();
        assert!(matches!(
            err,
            CompError::NonPositiveDenominator {
                field: "gross_income",
                ..
            }
        ));
    }
}
