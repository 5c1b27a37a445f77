// src/types/offer.rs
//! Job offer input structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CompError, CompResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobOffer {
    pub company: String,
    pub role: String,
    pub location: String,
    pub level: String,
    pub base_salary: f64,
    pub signing_bonus: f64,
    pub performance_bonus: f64,
    /// Total grant value over the whole vesting horizon, not per year
    pub equity_value: f64,
    /// Free text, e.g. "4 years, 1-year cliff, monthly after"
    pub vesting_schedule: String,
    pub benefits: Benefits,
    pub perks: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Benefits {
    pub health_insurance: bool,
    pub dental_vision: bool,
    #[serde(rename = "retirement401k")]
    pub retirement_401k: bool,
    /// Free text, e.g. "50% up to 6%"
    #[serde(rename = "retirement401kMatch")]
    pub retirement_401k_match: String,
    /// Paid time off in days
    pub pto: u32,
    /// Parental leave in days
    pub parental_leave: u32,
    pub remote_work: bool,
    pub learning_budget: f64,
    pub gym_membership: bool,
    pub commuter_benefits: bool,
}

impl JobOffer {
    pub fn new(company: &str, role: &str, level: &str, location: &str) -> Self {
        Self {
            company: company.to_string(),
            role: role.to_string(),
            level: level.to_string(),
            location: location.to_string(),
            ..Self::default()
        }
    }

    pub fn with_base_salary(mut self, amount: f64) -> Self {
        self.base_salary = amount;
        self
    }

    pub fn with_bonuses(mut self, signing: f64, performance: f64) -> Self {
        self.signing_bonus = signing;
        self.performance_bonus = performance;
        self
    }

    pub fn with_equity(mut self, total_grant: f64, vesting_schedule: &str) -> Self {
        self.equity_value = total_grant;
        self.vesting_schedule = vesting_schedule.to_string();
        self
    }

    pub fn with_benefits(mut self, benefits: Benefits) -> Self {
        self.benefits = benefits;
        self
    }

    /// Cash paid in the first year: base plus both bonuses
    pub fn first_year_cash(&self) -> f64 {
        self.base_salary + self.signing_bonus + self.performance_bonus
    }

    /// Whether the vesting text mentions a cliff at all
    pub fn has_cliff(&self) -> bool {
        self.vesting_schedule.to_lowercase().contains("cliff")
    }

    /// Check that every monetary field is a non-negative number
    pub fn validate(&self) -> CompResult<()> {
        if self.company.trim().is_empty() {
            return Err(CompError::InvalidOffer(
                "offer is missing a company name".to_string(),
            ));
        }

        let fields = [
            ("baseSalary", self.base_salary),
            ("signingBonus", self.signing_bonus),
            ("performanceBonus", self.performance_bonus),
            ("equityValue", self.equity_value),
            ("benefits.learningBudget", self.benefits.learning_budget),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CompError::InvalidOffer(format!(
                    "{} for {} must be a non-negative amount (got {})",
                    name, self.company, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_year_cash() {
        let offer = JobOffer::new("Acme", "Software Engineer", "Senior", "San Francisco")
            .with_base_salary(180_000.0)
            .with_bonuses(25_000.0, 18_000.0);
        assert_eq!(offer.first_year_cash(), 223_000.0);
    }

    #[test]
    fn test_has_cliff_is_case_insensitive() {
        let offer = JobOffer::default().with_equity(100_000.0, "4 years, 1-Year CLIFF");
        assert!(offer.has_cliff());
        let offer = JobOffer::default().with_equity(100_000.0, "monthly from day one");
        assert!(!offer.has_cliff());
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let offer = JobOffer::new("Acme", "Engineer", "Mid", "NYC").with_base_salary(-1.0);
        let err = offer.validate().unwrap_err();
        assert!(err.to_string().contains("baseSalary"));

        let offer = JobOffer::new("Acme", "Engineer", "Mid", "NYC").with_base_salary(120_000.0);
        assert!(offer.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_company() {
        let offer = JobOffer::default().with_base_salary(190_000.0);
        let err = offer.validate().unwrap_err();
        assert!(err.to_string().contains("company"));

        let offer = JobOffer::new("  ", "Engineer", "Mid", "NYC");
        assert!(offer.validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case_json() {
        let json = r#"{
            "company": "Globex",
            "role": "Data Scientist",
            "location": "Seattle, WA",
            "level": "Senior",
            "baseSalary": 170000,
            "equityValue": 200000,
            "vestingSchedule": "4 years, 1 year cliff",
            "benefits": { "healthInsurance": true, "retirement401k": true, "retirement401kMatch": "100% up to 4%", "pto": 20 },
            "startDate": "2025-03-01"
        }"#;

        let offer: JobOffer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.base_salary, 170_000.0);
        assert_eq!(offer.signing_bonus, 0.0);
        assert!(offer.benefits.retirement_401k);
        assert_eq!(offer.benefits.retirement_401k_match, "100% up to 4%");
        assert_eq!(offer.benefits.pto, 20);
        assert_eq!(offer.start_date, NaiveDate::from_ymd_opt(2025, 3, 1));
    }
}
