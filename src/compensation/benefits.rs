// src/compensation/benefits.rs
//! Annual dollar estimate of an offer's benefits package

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::types::JobOffer;

pub const HEALTH_INSURANCE_VALUE: f64 = 8_000.0;
pub const DENTAL_VISION_VALUE: f64 = 1_500.0;
pub const REMOTE_WORK_VALUE: f64 = 5_000.0;
pub const GYM_VALUE: f64 = 600.0;
pub const COMMUTER_VALUE: f64 = 1_200.0;
/// Working days per year used to value a single day of leave
pub const WORKING_DAYS_PER_YEAR: f64 = 260.0;
/// Parental leave is not always taken, so only a fraction of it counts
pub const PARENTAL_LEAVE_USAGE: f64 = 0.20;

/// Employer 401k match, as fractions: `rate` of contributions up to `cap` of salary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchFormula {
    pub rate: f64,
    pub cap: f64,
}

impl MatchFormula {
    pub fn annual_contribution(&self, base_salary: f64) -> f64 {
        base_salary * self.cap * self.rate
    }
}

fn match_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*%.*?(\d+(?:\.\d+)?)\s*%").expect("401k match pattern is valid")
    })
}

/// Parse text like "50% up to 6%" into a match formula.
/// Returns `None` for anything that doesn't carry two percentages.
pub fn parse_401k_match(text: &str) -> Option<MatchFormula> {
    let caps = match_pattern().captures(text)?;
    let rate: f64 = caps.get(1)?.as_str().parse().ok()?;
    let cap: f64 = caps.get(2)?.as_str().parse().ok()?;

    Some(MatchFormula {
        rate: rate / 100.0,
        cap: cap / 100.0,
    })
}

pub fn calculate_benefits_value(offer: &JobOffer) -> f64 {
    let benefits = &offer.benefits;
    let daily_rate = offer.base_salary / WORKING_DAYS_PER_YEAR;
    let mut value = 0.0;

    if benefits.health_insurance {
        value += HEALTH_INSURANCE_VALUE;
    }
    if benefits.dental_vision {
        value += DENTAL_VISION_VALUE;
    }

    if benefits.retirement_401k {
        match parse_401k_match(&benefits.retirement_401k_match) {
            Some(formula) => value += formula.annual_contribution(offer.base_salary),
            None => debug!(
                "Unrecognised 401k match '{}' for {}, counting no contribution",
                benefits.retirement_401k_match, offer.company
            ),
        }
    }

    value += daily_rate * f64::from(benefits.pto);
    value += daily_rate * f64::from(benefits.parental_leave) * PARENTAL_LEAVE_USAGE;

    if benefits.remote_work {
        value += REMOTE_WORK_VALUE;
    }
    value += benefits.learning_budget.max(0.0);
    if benefits.gym_membership {
        value += GYM_VALUE;
    }
    if benefits.commuter_benefits {
        value += COMMUTER_VALUE;
    }

    value.round()
}
