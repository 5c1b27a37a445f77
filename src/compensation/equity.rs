// src/compensation/equity.rs
//! Equity growth projections and what is forfeited when leaving early

use crate::error::{require_positive, CompResult};
use crate::types::{EquityProjection, GrowthScenarios, UnvestedEquityLoss};
use crate::utils::round_to;

pub const DEFAULT_PROJECTION_YEARS: u32 = 4;
/// Standard four-year schedule
pub const VESTING_MONTHS: f64 = 48.0;
pub const CLIFF_MONTHS: u32 = 12;

/// Compound `current_value` at each scenario's annual rate
pub fn project_equity_value(
    current_value: f64,
    scenarios: &GrowthScenarios,
    years: u32,
) -> EquityProjection {
    let grow = |rate: f64| (current_value * (1.0 + rate).powf(f64::from(years))).round();

    EquityProjection {
        conservative: grow(scenarios.conservative),
        moderate: grow(scenarios.moderate),
        optimistic: grow(scenarios.optimistic),
    }
}

fn has_one_year_cliff(vesting_schedule: &str) -> bool {
    let schedule = vesting_schedule.to_lowercase();
    schedule.contains("1-year cliff") || schedule.contains("1 year cliff")
}

/// Split a grant into vested and forfeited value after `months_worked`.
///
/// With a one-year cliff nothing vests before month 12; after that, and for
/// schedules without a cliff, vesting is `months / 48` of the grant.
pub fn calculate_unvested_equity_loss(
    total_equity_grant: f64,
    vesting_schedule: &str,
    months_worked: u32,
) -> CompResult<UnvestedEquityLoss> {
    let grant = require_positive("total_equity_grant", total_equity_grant)?;

    let vested = if has_one_year_cliff(vesting_schedule) && months_worked < CLIFF_MONTHS {
        0.0
    } else {
        (f64::from(months_worked) / VESTING_MONTHS * grant).min(grant)
    };

    let vested = vested.round();
    let unvested = grant - vested;

    Ok(UnvestedEquityLoss {
        vested,
        unvested,
        percentage_lost: round_to(unvested / grant * 100.0, 1),
    })
}
