// src/types/results.rs
//! Derived results returned by the calculators

use serde::{Deserialize, Serialize};
use std::fmt;

// ===== Compensation =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationBreakdown {
    pub year1: f64,
    pub year2: f64,
    pub year3: f64,
    pub year4: f64,
    #[serde(rename = "total4Year")]
    pub total_4_year: f64,
    pub average_annual: f64,
    pub base_salary: f64,
    pub equity_value: f64,
    /// Signing plus performance bonus
    pub bonuses: f64,
    /// Informational only, never included in the yearly totals
    pub benefits_value: f64,
}

impl CompensationBreakdown {
    pub fn years(&self) -> [f64; 4] {
        [self.year1, self.year2, self.year3, self.year4]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferComparison {
    pub breakdown: Vec<CompensationBreakdown>,
    /// Company of the offer with the highest four-year total, empty when there are no offers
    pub winner: String,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeHomePay {
    pub federal: f64,
    pub state_tax: f64,
    pub fica: f64,
    pub take_home: f64,
    pub effective_rate: f64,
}

/// Annual growth rates, e.g. 0.1 for 10%
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthScenarios {
    pub conservative: f64,
    pub moderate: f64,
    pub optimistic: f64,
}

impl Default for GrowthScenarios {
    fn default() -> Self {
        Self {
            conservative: 0.10,
            moderate: 0.20,
            optimistic: 0.30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityProjection {
    pub conservative: f64,
    pub moderate: f64,
    pub optimistic: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnvestedEquityLoss {
    pub vested: f64,
    pub unvested: f64,
    pub percentage_lost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredRaise {
    pub annual_raise_percent: f64,
    pub annual_raise_amount: f64,
    pub total_after_years: f64,
    pub still_short_by: f64,
}

// ===== Market =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketPosition {
    Below,
    At,
    Above,
}

impl fmt::Display for MarketPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarketPosition::Below => "below",
            MarketPosition::At => "at",
            MarketPosition::Above => "above",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketComparisonResult {
    pub base_salary_percentile: f64,
    pub total_comp_percentile: f64,
    pub vs_median_base: f64,
    pub vs_median_total: f64,
    #[serde(rename = "vsP75Base")]
    pub vs_p75_base: f64,
    #[serde(rename = "vsP75Total")]
    pub vs_p75_total: f64,
    pub market_position: MarketPosition,
}

// ===== Negotiation =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegotiationStrategy {
    Aggressive,
    Moderate,
    Conservative,
}

impl fmt::Display for NegotiationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NegotiationStrategy::Aggressive => "aggressive",
            NegotiationStrategy::Moderate => "moderate",
            NegotiationStrategy::Conservative => "conservative",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationLeverage {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub target_increase: f64,
    /// 0 to 95
    pub confidence_score: u32,
    pub strategy: NegotiationStrategy,
    pub talking_points: Vec<String>,
}
