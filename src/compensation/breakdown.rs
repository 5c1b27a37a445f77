// src/compensation/breakdown.rs
use tracing::debug;

use super::benefits::calculate_benefits_value;
use crate::types::{CompensationBreakdown, JobOffer};

pub const VESTING_YEARS: usize = 4;

/// Nominal equity value credited to each vesting year.
///
/// A cliff only changes when the first tranche becomes realizable, so both
/// branches credit equal quarters of the grant.
fn equity_by_year(offer: &JobOffer) -> [f64; VESTING_YEARS] {
    if offer.has_cliff() {
        debug!(
            "{} vests with a cliff, crediting equal annual tranches",
            offer.company
        );
        [0.25 * offer.equity_value; VESTING_YEARS]
    } else {
        [offer.equity_value / VESTING_YEARS as f64; VESTING_YEARS]
    }
}

pub fn calculate_compensation_breakdown(offer: &JobOffer) -> CompensationBreakdown {
    let equity = equity_by_year(offer);

    let mut years = [0.0; VESTING_YEARS];
    for (i, year) in years.iter_mut().enumerate() {
        *year = offer.base_salary + offer.performance_bonus + equity[i];
    }
    years[0] += offer.signing_bonus;

    let total_4_year: f64 = years.iter().sum();

    CompensationBreakdown {
        year1: years[0],
        year2: years[1],
        year3: years[2],
        year4: years[3],
        total_4_year,
        average_annual: total_4_year / VESTING_YEARS as f64,
        base_salary: offer.base_salary,
        equity_value: offer.equity_value,
        bonuses: offer.signing_bonus + offer.performance_bonus,
        benefits_value: calculate_benefits_value(offer),
    }
}
