// src/negotiation/leverage.rs
use tracing::debug;

use super::talking_points::{self, CLOSING_POINTS};
use crate::error::CompResult;
use crate::market::compare_to_market;
use crate::types::{MarketData, MarketPosition, NegotiationLeverage, NegotiationStrategy};
use crate::utils::format_currency;

const BASE_CONFIDENCE: u32 = 50;
const COMPETING_OFFER_BONUS: u32 = 20;
const BELOW_MARKET_BONUS: u32 = 15;
const MANY_STRENGTHS_BONUS: u32 = 10;
const MANY_STRENGTHS: usize = 3;
pub const MAX_CONFIDENCE: u32 = 95;

const AT_MARKET_ASK: f64 = 0.125;
const ABOVE_MARKET_ASK: f64 = 0.075;
/// Below market, aim for the 60th percentile: 40% of the way from median to p75
const SIXTIETH_PERCENTILE_SPAN: f64 = 0.4;

pub fn strategy_for(confidence: u32) -> NegotiationStrategy {
    if confidence >= 75 {
        NegotiationStrategy::Aggressive
    } else if confidence < 50 {
        NegotiationStrategy::Conservative
    } else {
        NegotiationStrategy::Moderate
    }
}

pub fn analyze_negotiation_leverage(
    offer_base_salary: f64,
    offer_total_comp: f64,
    market_data: &MarketData,
    has_competing_offers: bool,
    years_experience: u32,
) -> CompResult<NegotiationLeverage> {
    let comparison = compare_to_market(offer_base_salary, offer_total_comp, market_data)?;
    let total = &market_data.total_comp;

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut talking_points = Vec::new();

    if has_competing_offers {
        strengths.push("You have competing offers".to_string());
        talking_points.push(talking_points::competing_offer());
    } else {
        weaknesses.push("No competing offers to anchor the negotiation".to_string());
    }

    match market_data.expected_years() {
        Some(expected) if years_experience > expected => {
            strengths.push(format!(
                "Your {} years of experience exceed the {}+ typical for {}",
                years_experience, expected, market_data.level
            ));
            talking_points.push(talking_points::experience(
                years_experience,
                &market_data.level,
            ));
        }
        Some(_) => {}
        None => debug!(
            "Level '{}' has no year count, skipping the experience check",
            market_data.level
        ),
    }

    match comparison.market_position {
        MarketPosition::Below => {
            strengths.push(format!(
                "The offer sits at the {:.0}th percentile, below the market median of {}",
                comparison.total_comp_percentile,
                format_currency(total.median)
            ));
            talking_points.push(talking_points::below_market(
                total.median,
                comparison.vs_median_total,
            ));
        }
        MarketPosition::Above => {
            weaknesses.push(format!(
                "The offer is already above market ({:.0}th percentile)",
                comparison.total_comp_percentile
            ));
        }
        MarketPosition::At => {}
    }

    let target_increase = match comparison.market_position {
        MarketPosition::Below => {
            total.median + SIXTIETH_PERCENTILE_SPAN * (total.p75 - total.median) - offer_total_comp
        }
        MarketPosition::At => offer_total_comp * AT_MARKET_ASK,
        MarketPosition::Above => offer_total_comp * ABOVE_MARKET_ASK,
    }
    .round();

    let mut confidence = BASE_CONFIDENCE;
    if has_competing_offers {
        confidence += COMPETING_OFFER_BONUS;
    }
    if comparison.market_position == MarketPosition::Below {
        confidence += BELOW_MARKET_BONUS;
    }
    if strengths.len() >= MANY_STRENGTHS {
        confidence += MANY_STRENGTHS_BONUS;
    }
    let confidence_score = confidence.min(MAX_CONFIDENCE);

    talking_points.extend(CLOSING_POINTS.iter().map(|point| point.to_string()));

    debug!(
        "Leverage: {} strengths, {} weaknesses, confidence {}",
        strengths.len(),
        weaknesses.len(),
        confidence_score
    );

    Ok(NegotiationLeverage {
        strengths,
        weaknesses,
        target_increase,
        confidence_score,
        strategy: strategy_for(confidence_score),
        talking_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::compare_to_market;
    use crate::types::{PercentileDistribution, RangeSummary};
    use chrono::Utc;
    use proptest::prelude::*;

    fn market(level: &str) -> MarketData {
        MarketData {
            role: "Software Engineer".to_string(),
            level: level.to_string(),
            location: "San Francisco".to_string(),
            base_salary: PercentileDistribution::new(
                160_000.0, 180_000.0, 200_000.0, 220_000.0, 260_000.0,
            ),
            total_comp: PercentileDistribution::new(
                200_000.0, 250_000.0, 300_000.0, 350_000.0, 500_000.0,
            ),
            equity: RangeSummary::new(0.0, 80_000.0, 200_000.0),
            bonus: RangeSummary::new(0.0, 20_000.0, 50_000.0),
            sample_size: 500,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_below_market_with_everything_going_for_you() {
        let leverage =
            analyze_negotiation_leverage(180_000.0, 250_000.0, &market("Senior (5-8 years)"), true, 9)
                .unwrap();

        assert_eq!(leverage.strengths.len(), 3);
        assert!(leverage.weaknesses.is_empty());
        // 300k + 0.4 * 50k - 250k
        assert_eq!(leverage.target_increase, 70_000.0);
        // 50 + 20 + 15 + 10 = 95
        assert_eq!(leverage.confidence_score, 95);
        assert_eq!(leverage.strategy, NegotiationStrategy::Aggressive);
        assert_eq!(leverage.talking_points.len(), 6);
        assert_eq!(leverage.talking_points[3..], CLOSING_POINTS.map(String::from));
    }

    #[test]
    fn test_at_market_without_competing_offers() {
        let leverage =
            analyze_negotiation_leverage(200_000.0, 300_000.0, &market("Senior (5-8 years)"), false, 3)
                .unwrap();

        assert!(leverage.strengths.is_empty());
        assert_eq!(leverage.weaknesses.len(), 1);
        assert_eq!(leverage.target_increase, 37_500.0);
        assert_eq!(leverage.confidence_score, 50);
        assert_eq!(leverage.strategy, NegotiationStrategy::Moderate);
        assert_eq!(leverage.talking_points.len(), 3);
    }

    #[test]
    fn test_above_market() {
        let leverage =
            analyze_negotiation_leverage(240_000.0, 400_000.0, &market("Senior"), false, 20).unwrap();

        // No year count in the level text, so experience is never a strength
        assert!(leverage.strengths.is_empty());
        assert_eq!(leverage.weaknesses.len(), 2);
        assert_eq!(leverage.target_increase, 30_000.0);
        assert_eq!(leverage.confidence_score, 50);
    }

    #[test]
    fn test_competing_offer_at_market() {
        let leverage =
            analyze_negotiation_leverage(200_000.0, 300_000.0, &market("Senior (5-8 years)"), true, 5)
                .unwrap();
        // Five years does not exceed the expected five
        assert_eq!(leverage.strengths, vec!["You have competing offers".to_string()]);
        assert_eq!(leverage.confidence_score, 70);
        assert_eq!(leverage.strategy, NegotiationStrategy::Moderate);
    }

    #[test]
    fn test_strategy_thresholds() {
        assert_eq!(strategy_for(95), NegotiationStrategy::Aggressive);
        assert_eq!(strategy_for(75), NegotiationStrategy::Aggressive);
        assert_eq!(strategy_for(74), NegotiationStrategy::Moderate);
        assert_eq!(strategy_for(50), NegotiationStrategy::Moderate);
        assert_eq!(strategy_for(49), NegotiationStrategy::Conservative);
    }

    proptest! {
        #[test]
        fn prop_market_analysis_is_repeatable(
            base in 50_000u32..400_000,
            total in 50_000u32..800_000,
            competing in any::<bool>(),
            years in 0u32..30,
        ) {
            let market = market("Senior (5-8 years)");
            let (base, total) = (f64::from(base), f64::from(total));

            prop_assert_eq!(
                compare_to_market(base, total, &market).unwrap(),
                compare_to_market(base, total, &market).unwrap()
            );
            prop_assert_eq!(
                analyze_negotiation_leverage(base, total, &market, competing, years).unwrap(),
                analyze_negotiation_leverage(base, total, &market, competing, years).unwrap()
            );
        }
    }
}
