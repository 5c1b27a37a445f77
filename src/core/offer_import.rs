// src/core/offer_import.rs
//! Read job offers from TOML, JSON or CSV files

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::types::{Benefits, JobOffer};
use crate::utils::{get_file_extension, read_file_content};

#[derive(Debug, Deserialize)]
struct OfferFile {
    offers: Vec<JobOffer>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonOffers {
    List(Vec<JobOffer>),
    Wrapped(OfferFile),
    Single(Box<JobOffer>),
}

/// One CSV row; benefit columns are flattened
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OfferRecord {
    company: String,
    role: String,
    location: String,
    level: String,
    base_salary: f64,
    signing_bonus: f64,
    performance_bonus: f64,
    equity_value: f64,
    vesting_schedule: String,
    health_insurance: bool,
    dental_vision: bool,
    retirement_401k: bool,
    retirement_401k_match: String,
    pto: u32,
    parental_leave: u32,
    remote_work: bool,
    learning_budget: f64,
    gym_membership: bool,
    commuter_benefits: bool,
    /// Semicolon separated
    perks: String,
    start_date: Option<NaiveDate>,
    notes: Option<String>,
}

impl From<OfferRecord> for JobOffer {
    fn from(record: OfferRecord) -> Self {
        JobOffer {
            company: record.company,
            role: record.role,
            location: record.location,
            level: record.level,
            base_salary: record.base_salary,
            signing_bonus: record.signing_bonus,
            performance_bonus: record.performance_bonus,
            equity_value: record.equity_value,
            vesting_schedule: record.vesting_schedule,
            benefits: Benefits {
                health_insurance: record.health_insurance,
                dental_vision: record.dental_vision,
                retirement_401k: record.retirement_401k,
                retirement_401k_match: record.retirement_401k_match,
                pto: record.pto,
                parental_leave: record.parental_leave,
                remote_work: record.remote_work,
                learning_budget: record.learning_budget,
                gym_membership: record.gym_membership,
                commuter_benefits: record.commuter_benefits,
            },
            perks: record
                .perks
                .split(';')
                .map(str::trim)
                .filter(|perk| !perk.is_empty())
                .map(String::from)
                .collect(),
            start_date: record.start_date,
            notes: record.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

fn parse_csv(content: &str) -> Result<Vec<JobOffer>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut offers = Vec::new();
    for (line, record) in reader.deserialize::<OfferRecord>().enumerate() {
        let record = record.with_context(|| format!("Invalid offer on CSV row {}", line + 1))?;
        offers.push(JobOffer::from(record));
    }
    Ok(offers)
}

/// Parse offers from text in the given format (`toml`, `json` or `csv`)
pub fn parse_offers(content: &str, format: &str) -> Result<Vec<JobOffer>> {
    let offers = match format {
        "toml" => {
            let file: OfferFile = toml::from_str(content).context("Failed to parse TOML offers")?;
            file.offers
        }
        "json" => match serde_json::from_str::<JsonOffers>(content)
            .context("Failed to parse JSON offers")?
        {
            JsonOffers::List(offers) => offers,
            JsonOffers::Wrapped(file) => file.offers,
            JsonOffers::Single(offer) => vec![*offer],
        },
        "csv" => parse_csv(content)?,
        other => anyhow::bail!("Unsupported offer format: {}. Use toml, json or csv", other),
    };

    for offer in &offers {
        offer.validate()?;
    }

    if offers.is_empty() {
        warn!("Offer file contained no offers");
    }
    Ok(offers)
}

/// Load offers from a file, picking the format from its extension
pub async fn load_offers(path: &Path) -> Result<Vec<JobOffer>> {
    let format = get_file_extension(path)
        .ok_or_else(|| anyhow::anyhow!("Offer file has no extension: {}", path.display()))?;
    let content = read_file_content(path).await?;

    let offers = parse_offers(&content, &format)
        .with_context(|| format!("Failed to load offers from {}", path.display()))?;

    info!("Loaded {} offers from {}", offers.len(), path.display());
    Ok(offers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_toml_offers() {
        let toml = r#"
[[offers]]
company = "Acme"
role = "Software Engineer"
level = "Senior"
location = "San Francisco"
baseSalary = 190000
equityValue = 300000
vestingSchedule = "4 years, 1-year cliff"

[offers.benefits]
healthInsurance = true
pto = 20

[[offers]]
company = "Globex"
role = "Software Engineer"
level = "Senior"
location = "Remote"
baseSalary = 175000
"#;
        let offers = parse_offers(toml, "toml").unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].equity_value, 300_000.0);
        assert!(offers[0].benefits.health_insurance);
        assert_eq!(offers[1].company, "Globex");
        assert_eq!(offers[1].benefits.pto, 0);
    }

    #[test]
    fn test_demo_offers_parse() {
        let offers = parse_offers(include_str!("../../demos/offers.toml"), "toml").unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].benefits.parental_leave, 84);
        assert_eq!(offers[0].perks.len(), 2);
        assert!(offers[1].benefits.remote_work);
    }

    #[test]
    fn test_parse_json_shapes() {
        let list = r#"[{"company": "Acme", "baseSalary": 100000}]"#;
        assert_eq!(parse_offers(list, "json").unwrap().len(), 1);

        let wrapped = r#"{"offers": [{"company": "Acme"}, {"company": "Globex"}]}"#;
        assert_eq!(parse_offers(wrapped, "json").unwrap().len(), 2);

        let single = r#"{"company": "Initech", "baseSalary": 90000}"#;
        let offers = parse_offers(single, "json").unwrap();
        assert_eq!(offers[0].company, "Initech");
    }

    #[test]
    fn test_parse_csv_offers() {
        let csv = "\
company,role,level,location,base_salary,signing_bonus,equity_value,vesting_schedule,health_insurance,retirement_401k,retirement_401k_match,pto,perks,start_date,notes
Acme,Software Engineer,Senior,San Francisco,190000,25000,300000,1-year cliff,true,true,50% up to 6%,20,lunch; gym ,2025-02-03,
Globex,Software Engineer,Mid,Remote,150000,0,0,,false,false,,15,,,remote first
";
        let offers = parse_offers(csv, "csv").unwrap();
        assert_eq!(offers.len(), 2);

        let acme = &offers[0];
        assert_eq!(acme.signing_bonus, 25_000.0);
        assert_eq!(acme.benefits.retirement_401k_match, "50% up to 6%");
        assert_eq!(acme.perks, vec!["lunch".to_string(), "gym".to_string()]);
        assert_eq!(acme.start_date, NaiveDate::from_ymd_opt(2025, 2, 3));
        assert!(acme.notes.is_none());

        let globex = &offers[1];
        assert!(globex.perks.is_empty());
        assert_eq!(globex.notes.as_deref(), Some("remote first"));
    }

    #[test]
    fn test_json_without_offer_data_rejected() {
        assert!(parse_offers(r#"{"offer": []}"#, "json").is_err());
        assert!(parse_offers("{}", "json").is_err());

        let misspelled = r#"{"offer": [{"company": "Acme", "baseSalary": 190000}]}"#;
        assert!(parse_offers(misspelled, "json").is_err());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let json = r#"[{"company": "Acme", "baseSalary": -5}]"#;
        assert!(parse_offers(json, "json").is_err());
    }

    #[test]
    fn test_unknown_format() {
        assert!(parse_offers("", "xlsx").is_err());
    }

    #[tokio::test]
    async fn test_load_offers_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"[{"company": "Acme", "baseSalary": 120000}]"#)
            .unwrap();

        let offers = load_offers(file.path()).await.unwrap();
        assert_eq!(offers[0].base_salary, 120_000.0);
    }
}
