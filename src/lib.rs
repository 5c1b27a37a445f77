//! Compensation analysis for job offers.
//!
//! Turns a raw offer into a four-year cash and equity breakdown, positions it
//! against a market salary distribution, and scores how much leverage the
//! candidate has to negotiate.
//!
//! ```rust,ignore
//! use comp_analyzer::{analyze_negotiation_leverage, calculate_compensation_breakdown, get_market_data};
//!
//! let breakdown = calculate_compensation_breakdown(&offer);
//! if let Some(market) = get_market_data(&offer.role, &offer.level, &offer.location) {
//!     let leverage = analyze_negotiation_leverage(
//!         offer.base_salary,
//!         breakdown.average_annual,
//!         &market,
//!         true,
//!         7,
//!     )?;
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod compensation;
pub mod core;
pub mod error;
pub mod market;
pub mod negotiation;
pub mod types;
pub mod utils;

pub use analysis::{CandidateContext, MarketInsight, OfferAnalysis, OfferAnalyzer};
pub use compensation::{
    calculate_benefits_value, calculate_compensation_breakdown, calculate_required_raise,
    calculate_take_home_pay, calculate_unvested_equity_loss, compare_offers, parse_401k_match,
    project_equity_value,
};
pub use error::{CompError, CompResult};
pub use market::{compare_to_market, get_market_data, MarketCatalog, MarketDataRepository};
pub use negotiation::analyze_negotiation_leverage;
pub use types::*;
