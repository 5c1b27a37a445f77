// src/market/comparator.rs
//! Position an offer inside a market distribution

use crate::error::CompResult;
use crate::types::{MarketComparisonResult, MarketData, MarketPosition, PercentileDistribution};
use crate::utils::round_to;

pub const BELOW_MARKET_PERCENTILE: f64 = 40.0;
pub const ABOVE_MARKET_PERCENTILE: f64 = 60.0;

/// Piecewise-linear percentile of `value`, clamped to [0, 100]
pub fn percentile_of(value: f64, distribution: &PercentileDistribution) -> f64 {
    let anchors = distribution.anchors();
    let (min, _) = anchors[0];
    let (max, _) = anchors[anchors.len() - 1];

    if value <= min {
        return 0.0;
    }
    if value >= max {
        return 100.0;
    }

    for pair in anchors.windows(2) {
        let (low, low_pct) = pair[0];
        let (high, high_pct) = pair[1];
        if value <= high {
            if high <= low {
                return high_pct;
            }
            return low_pct + (value - low) / (high - low) * (high_pct - low_pct);
        }
    }

    100.0
}

/// Signed percentage difference of `value` from `reference`
fn delta(value: f64, reference: f64) -> f64 {
    round_to((value - reference) / reference * 100.0, 1)
}

pub fn classify(total_comp_percentile: f64) -> MarketPosition {
    if total_comp_percentile < BELOW_MARKET_PERCENTILE {
        MarketPosition::Below
    } else if total_comp_percentile > ABOVE_MARKET_PERCENTILE {
        MarketPosition::Above
    } else {
        MarketPosition::At
    }
}

pub fn compare_to_market(
    offer_base_salary: f64,
    offer_total_comp: f64,
    market_data: &MarketData,
) -> CompResult<MarketComparisonResult> {
    market_data.validate()?;

    let base = &market_data.base_salary;
    let total = &market_data.total_comp;

    let base_salary_percentile = round_to(percentile_of(offer_base_salary, base), 1);
    let total_comp_percentile = round_to(percentile_of(offer_total_comp, total), 1);

    Ok(MarketComparisonResult {
        base_salary_percentile,
        total_comp_percentile,
        vs_median_base: delta(offer_base_salary, base.median),
        vs_median_total: delta(offer_total_comp, total.median),
        vs_p75_base: delta(offer_base_salary, base.p75),
        vs_p75_total: delta(offer_total_comp, total.p75),
        market_position: classify(total_comp_percentile),
    })
}
