// src/analysis/offer_analyzer.rs
use tracing::{debug, info, warn};

use super::{CandidateContext, MarketInsight, OfferAnalysis};
use crate::compensation::{calculate_compensation_breakdown, calculate_take_home_pay};
use crate::error::CompResult;
use crate::market::{compare_to_market, MarketDataRepository, MarketKey};
use crate::negotiation::analyze_negotiation_leverage;
use crate::types::{
    CompensationBreakdown, JobOffer, MarketComparisonResult, MarketData, NegotiationLeverage,
};
use crate::utils::format_currency;

/// Runs an offer through breakdown, market lookup, comparison and leverage scoring
pub struct OfferAnalyzer<'a> {
    repository: &'a dyn MarketDataRepository,
}

impl<'a> OfferAnalyzer<'a> {
    pub fn new(repository: &'a dyn MarketDataRepository) -> Self {
        Self { repository }
    }

    pub fn analyze(&self, offer: &JobOffer, context: &CandidateContext) -> OfferAnalysis {
        info!(
            "Analyzing {} offer for {} ({}, {})",
            offer.company, offer.role, offer.level, offer.location
        );

        let breakdown = calculate_compensation_breakdown(offer);

        let take_home = match calculate_take_home_pay(offer.first_year_cash(), &context.state) {
            Ok(pay) => Some(pay),
            Err(e) => {
                debug!("Skipping take-home estimate for {}: {}", offer.company, e);
                None
            }
        };

        let market = self.market_insight(offer, &breakdown, context);

        info!(
            "Analysis for {} complete: {} average annual, market data {}",
            offer.company,
            format_currency(breakdown.average_annual),
            if market.is_available() { "available" } else { "unavailable" }
        );

        OfferAnalysis {
            company: offer.company.clone(),
            breakdown,
            take_home,
            market,
        }
    }

    pub fn analyze_all(&self, offers: &[JobOffer], context: &CandidateContext) -> Vec<OfferAnalysis> {
        offers.iter().map(|offer| self.analyze(offer, context)).collect()
    }

    fn market_insight(
        &self,
        offer: &JobOffer,
        breakdown: &CompensationBreakdown,
        context: &CandidateContext,
    ) -> MarketInsight {
        let key = MarketKey::normalize(&offer.role, &offer.level, &offer.location).to_string();

        let Some(market_data) = self.repository.find(&offer.role, &offer.level, &offer.location)
        else {
            warn!("No market data for {}, skipping comparison", key);
            return MarketInsight::missing(key);
        };

        match Self::position(offer, breakdown, &market_data, context) {
            Ok((comparison, leverage)) => MarketInsight::Available {
                market_data,
                comparison,
                leverage,
            },
            Err(e) => {
                warn!("Market data for {} is unusable: {}", key, e);
                MarketInsight::InsufficientData {
                    key,
                    reason: e.to_string(),
                }
            }
        }
    }

    fn position(
        offer: &JobOffer,
        breakdown: &CompensationBreakdown,
        market_data: &MarketData,
        context: &CandidateContext,
    ) -> CompResult<(MarketComparisonResult, NegotiationLeverage)> {
        let comparison = compare_to_market(offer.base_salary, breakdown.average_annual, market_data)?;
        let leverage = analyze_negotiation_leverage(
            offer.base_salary,
            breakdown.average_annual,
            market_data,
            context.has_competing_offers,
            context.years_experience,
        )?;
        Ok((comparison, leverage))
    }
}
