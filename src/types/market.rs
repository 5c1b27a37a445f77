// src/types/market.rs
//! Market salary distributions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CompError, CompResult};

/// Five-point summary of a salary distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileDistribution {
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSummary {
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub role: String,
    /// Display text such as "Senior (5-8 years)"
    pub level: String,
    pub location: String,
    pub base_salary: PercentileDistribution,
    pub total_comp: PercentileDistribution,
    pub equity: RangeSummary,
    pub bonus: RangeSummary,
    pub sample_size: u32,
    pub last_updated: DateTime<Utc>,
}

impl PercentileDistribution {
    pub const fn new(min: f64, p25: f64, median: f64, p75: f64, max: f64) -> Self {
        Self {
            min,
            p25,
            median,
            p75,
            max,
        }
    }

    /// Reference points paired with the percentile each one represents
    pub fn anchors(&self) -> [(f64, f64); 5] {
        [
            (self.min, 0.0),
            (self.p25, 25.0),
            (self.median, 50.0),
            (self.p75, 75.0),
            (self.max, 100.0),
        ]
    }

    /// `min <= p25 <= median <= p75 <= max`, no negatives, and non-zero median/p75
    pub fn validate(&self, label: &str) -> CompResult<()> {
        let points = [self.min, self.p25, self.median, self.p75, self.max];
        if points.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(CompError::InvalidMarketData(format!(
                "{} contains a negative or non-finite value",
                label
            )));
        }
        if points.windows(2).any(|w| w[0] > w[1]) {
            return Err(CompError::InvalidMarketData(format!(
                "{} must satisfy min <= p25 <= median <= p75 <= max",
                label
            )));
        }
        if self.median <= 0.0 || self.p75 <= 0.0 {
            return Err(CompError::InvalidMarketData(format!(
                "{} median and p75 must be greater than zero",
                label
            )));
        }
        Ok(())
    }
}

impl RangeSummary {
    pub const fn new(min: f64, median: f64, max: f64) -> Self {
        Self { min, median, max }
    }
}

impl MarketData {
    pub fn validate(&self) -> CompResult<()> {
        self.base_salary.validate("baseSalary")?;
        self.total_comp.validate("totalComp")?;
        Ok(())
    }

    /// First integer in the level text, read as the expected years of experience
    pub fn expected_years(&self) -> Option<u32> {
        let start = self.level.find(|c: char| c.is_ascii_digit())?;
        self.level[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(level: &str) -> MarketData {
        MarketData {
            role: "Software Engineer".to_string(),
            level: level.to_string(),
            location: "San Francisco".to_string(),
            base_salary: PercentileDistribution::new(150_000.0, 170_000.0, 185_000.0, 200_000.0, 230_000.0),
            total_comp: PercentileDistribution::new(220_000.0, 260_000.0, 300_000.0, 350_000.0, 450_000.0),
            equity: RangeSummary::new(40_000.0, 80_000.0, 150_000.0),
            bonus: RangeSummary::new(0.0, 20_000.0, 40_000.0),
            sample_size: 420,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_expected_years() {
        assert_eq!(sample("Senior (5-8 years)").expected_years(), Some(5));
        assert_eq!(sample("Staff 10+ yrs").expected_years(), Some(10));
        assert_eq!(sample("Senior").expected_years(), None);
    }

    #[test]
    fn test_validate_ordering() {
        assert!(sample("Senior").validate().is_ok());

        let mut broken = sample("Senior");
        broken.total_comp.p25 = 400_000.0;
        let err = broken.validate().unwrap_err();
        assert!(err.to_string().contains("totalComp"));
    }

    #[test]
    fn test_validate_zero_median() {
        let mut broken = sample("Senior");
        broken.base_salary = PercentileDistribution::new(0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(broken.validate().is_err());
    }
}
