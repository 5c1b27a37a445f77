// src/compensation/mod.rs
//! Offer math: multi-year breakdown, benefits, taxes, equity, raises

pub mod benefits;
pub mod breakdown;
pub mod comparison;
pub mod equity;
pub mod raise;
pub mod tax;

pub use benefits::{calculate_benefits_value, parse_401k_match, MatchFormula};
pub use breakdown::calculate_compensation_breakdown;
pub use comparison::compare_offers;
pub use equity::{
    calculate_unvested_equity_loss, project_equity_value, DEFAULT_PROJECTION_YEARS,
};
pub use raise::{calculate_required_raise, DEFAULT_YEARS_TO_MATCH};
pub use tax::calculate_take_home_pay;
