// src/compensation/raise.rs
use crate::error::{require_positive, CompResult};
use crate::types::RequiredRaise;
use crate::utils::round_to;

pub const DEFAULT_YEARS_TO_MATCH: u32 = 2;

/// Annual raise the current employer would need to give to catch up with a
/// competing offer within `years_to_match` years
pub fn calculate_required_raise(
    current_salary: f64,
    competing_offer_total: f64,
    years_to_match: u32,
) -> CompResult<RequiredRaise> {
    let current = require_positive("current_salary", current_salary)?;
    let years = require_positive("years_to_match", f64::from(years_to_match))?;

    let multiplier = (competing_offer_total / current).powf(1.0 / years);
    let total_after_years = current * multiplier.powf(years);

    Ok(RequiredRaise {
        annual_raise_percent: round_to((multiplier - 1.0) * 100.0, 2),
        annual_raise_amount: (current * (multiplier - 1.0)).round(),
        total_after_years: total_after_years.round(),
        still_short_by: (competing_offer_total - total_after_years).round(),
    })
}
