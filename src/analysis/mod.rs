// src/analysis/mod.rs
use serde::{Deserialize, Serialize};

use crate::types::{
    CompensationBreakdown, MarketComparisonResult, MarketData, NegotiationLeverage, TakeHomePay,
};

pub mod offer_analyzer;

pub use offer_analyzer::OfferAnalyzer;

/// What the candidate brings to the table besides the offer itself
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateContext {
    pub has_competing_offers: bool,
    pub years_experience: u32,
    /// Two-letter state code used for the take-home estimate
    pub state: String,
}

impl Default for CandidateContext {
    fn default() -> Self {
        Self {
            has_competing_offers: false,
            years_experience: 0,
            state: "CA".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferAnalysis {
    pub company: String,
    pub breakdown: CompensationBreakdown,
    /// Estimate on year-one cash; absent when there is no cash to tax
    pub take_home: Option<TakeHomePay>,
    pub market: MarketInsight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MarketInsight {
    #[serde(rename_all = "camelCase")]
    Available {
        market_data: MarketData,
        comparison: MarketComparisonResult,
        leverage: NegotiationLeverage,
    },
    /// The catalog had nothing usable for this offer
    InsufficientData { key: String, reason: String },
}

impl MarketInsight {
    /// No catalog entry resolved for `key`
    pub fn missing(key: impl Into<String>) -> Self {
        MarketInsight::InsufficientData {
            key: key.into(),
            reason: "No market data for this role, level or location".to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MarketInsight::Available { .. })
    }
}
