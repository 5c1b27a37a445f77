// src/types/mod.rs
pub mod market;
pub mod offer;
pub mod results;

pub use market::{MarketData, PercentileDistribution, RangeSummary};
pub use offer::{Benefits, JobOffer};
pub use results::{
    CompensationBreakdown, EquityProjection, GrowthScenarios, MarketComparisonResult,
    MarketPosition, NegotiationLeverage, NegotiationStrategy, OfferComparison, RequiredRaise,
    TakeHomePay, UnvestedEquityLoss,
};
