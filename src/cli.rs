// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::analysis::{CandidateContext, MarketInsight, OfferAnalysis, OfferAnalyzer};
use crate::compensation::{
    calculate_compensation_breakdown, calculate_required_raise, calculate_take_home_pay,
    calculate_unvested_equity_loss, compare_offers, project_equity_value,
};
use crate::core::{load_offers, ConfigManager};
use crate::market::{compare_to_market, MarketDataRepository, MarketKey};
use crate::negotiation::analyze_negotiation_leverage;
use crate::types::{
    CompensationBreakdown, JobOffer, MarketData, NegotiationLeverage, OfferComparison,
};
use crate::utils::{format_compact, format_currency, format_percent_delta};

#[derive(Parser)]
#[command(name = "offerwise")]
#[command(about = "Break down, benchmark and negotiate job offers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./offerwise.yaml)
    #[arg(long, global = true, env = "OFFERWISE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Market catalog file (toml, json or yaml) replacing the built-in data
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Four-year breakdown for every offer in a file
    Breakdown { offers: PathBuf },
    /// Compare all offers in a file and pick a winner
    Compare { offers: PathBuf },
    /// Estimate take-home pay for a gross income
    TakeHome {
        gross: f64,
        #[arg(long)]
        state: Option<String>,
    },
    /// Project equity value under the configured growth scenarios
    ProjectEquity {
        value: f64,
        #[arg(long)]
        years: Option<u32>,
    },
    /// Equity forfeited when leaving after some months
    VestingLoss {
        grant: f64,
        schedule: String,
        months: u32,
    },
    /// Raise needed for the current salary to catch up with a competing offer
    RequiredRaise {
        current: f64,
        competing: f64,
        #[arg(long)]
        years: Option<u32>,
    },
    /// Show market data, optionally positioning a salary against it
    Market {
        role: String,
        level: String,
        location: String,
        #[arg(long)]
        base: Option<f64>,
        #[arg(long)]
        total: Option<f64>,
        #[arg(long)]
        competing: bool,
        #[arg(long, default_value_t = 0)]
        experience: u32,
    },
    /// Full analysis: breakdown, take-home, market position and leverage
    Analyze {
        offers: PathBuf,
        /// You hold at least one other offer
        #[arg(long)]
        competing: bool,
        /// Years of relevant experience
        #[arg(long, default_value_t = 0)]
        experience: u32,
        #[arg(long)]
        state: Option<String>,
    },
}

pub async fn handle_command(cli: Cli, mut config: ConfigManager) -> Result<()> {
    if let Some(catalog) = cli.catalog {
        config.analysis.catalog_path = Some(catalog);
    }
    let format = cli.format;

    match cli.command {
        Command::Breakdown { offers } => {
            let offers = load_offers(&offers).await?;
            let breakdowns: Vec<CompensationBreakdown> =
                offers.iter().map(calculate_compensation_breakdown).collect();

            emit(format, &breakdowns, || {
                for (offer, breakdown) in offers.iter().zip(&breakdowns) {
                    println!("{} ({} {})", offer.company, offer.level, offer.role);
                    print_breakdown(breakdown);
                    println!();
                }
            })?;
        }

        Command::Compare { offers } => {
            let offers = load_offers(&offers).await?;
            let comparison = compare_offers(&offers);
            emit(format, &comparison, || print_comparison(&offers, &comparison))?;
        }

        Command::TakeHome { gross, state } => {
            let state = state.unwrap_or_else(|| config.analysis.default_state.clone());
            let pay = calculate_take_home_pay(gross, &state)?;
            emit(format, &pay, || {
                println!("Gross income:   {}", format_currency(gross));
                println!("Federal tax:    {}", format_currency(pay.federal));
                println!("State tax ({}): {}", state.to_uppercase(), format_currency(pay.state_tax));
                println!("FICA:           {}", format_currency(pay.fica));
                println!("Take-home:      {}", format_currency(pay.take_home));
                println!("Effective rate: {:.1}%", pay.effective_rate);
                println!("(Rough estimate, not tax advice)");
            })?;
        }

        Command::ProjectEquity { value, years } => {
            let years = years.unwrap_or(config.analysis.projection_years);
            let scenarios = config.analysis.growth_scenarios;
            let projection = project_equity_value(value, &scenarios, years);
            emit(format, &projection, || {
                println!("{} over {} years:", format_currency(value), years);
                println!(
                    "  conservative ({:.0}%/yr): {}",
                    scenarios.conservative * 100.0,
                    format_currency(projection.conservative)
                );
                println!(
                    "  moderate     ({:.0}%/yr): {}",
                    scenarios.moderate * 100.0,
                    format_currency(projection.moderate)
                );
                println!(
                    "  optimistic   ({:.0}%/yr): {}",
                    scenarios.optimistic * 100.0,
                    format_currency(projection.optimistic)
                );
            })?;
        }

        Command::VestingLoss {
            grant,
            schedule,
            months,
        } => {
            let loss = calculate_unvested_equity_loss(grant, &schedule, months)?;
            emit(format, &loss, || {
                println!("After {} months on \"{}\":", months, schedule);
                println!("  vested:   {}", format_currency(loss.vested));
                println!("  unvested: {}", format_currency(loss.unvested));
                println!("  lost:     {:.1}%", loss.percentage_lost);
            })?;
        }

        Command::RequiredRaise {
            current,
            competing,
            years,
        } => {
            let years = years.unwrap_or(config.analysis.years_to_match);
            let raise = calculate_required_raise(current, competing, years)?;
            emit(format, &raise, || {
                println!(
                    "To reach {} from {} in {} years:",
                    format_currency(competing),
                    format_currency(current),
                    years
                );
                println!(
                    "  {:.2}% per year ({} in the first year)",
                    raise.annual_raise_percent,
                    format_currency(raise.annual_raise_amount)
                );
                println!("  total after {} years: {}", years, format_currency(raise.total_after_years));
            })?;
        }

        Command::Market {
            role,
            level,
            location,
            base,
            total,
            competing,
            experience,
        } => {
            let catalog = config.market_catalog().await?;
            let Some(market) = catalog.find(&role, &level, &location) else {
                let key = MarketKey::normalize(&role, &level, &location);
                return emit(format, &MarketInsight::missing(key.to_string()), || {
                    println!("No market data for {} / {} / {}", role, level, location)
                });
            };

            match (base, total) {
                (Some(base), Some(total)) => {
                    let comparison = compare_to_market(base, total, &market)?;
                    let leverage =
                        analyze_negotiation_leverage(base, total, &market, competing, experience)?;
                    let report = serde_json::json!({
                        "marketData": market,
                        "comparison": comparison,
                        "leverage": leverage,
                    });
                    emit(format, &report, || {
                        print_market_header(&market);
                        println!(
                            "Base at {:.1}th percentile ({} vs median), total at {:.1}th ({} vs median): {} market",
                            comparison.base_salary_percentile,
                            format_percent_delta(comparison.vs_median_base),
                            comparison.total_comp_percentile,
                            format_percent_delta(comparison.vs_median_total),
                            comparison.market_position
                        );
                        print_leverage(&leverage);
                    })?;
                }
                _ => emit(format, &market, || print_market_header(&market))?,
            }
        }

        Command::Analyze {
            offers,
            competing,
            experience,
            state,
        } => {
            let offers = load_offers(&offers).await?;
            let catalog = config.market_catalog().await?;
            let context = CandidateContext {
                has_competing_offers: competing,
                years_experience: experience,
                state: state.unwrap_or_else(|| config.analysis.default_state.clone()),
            };

            let analyses = OfferAnalyzer::new(&catalog).analyze_all(&offers, &context);
            info!("Analyzed {} offers", analyses.len());
            emit(format, &analyses, || {
                for analysis in &analyses {
                    print_analysis(analysis);
                    println!();
                }
            })?;
        }
    }

    Ok(())
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce()) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(),
    }
    Ok(())
}

fn print_breakdown(breakdown: &CompensationBreakdown) {
    for (i, year) in breakdown.years().iter().enumerate() {
        println!("  Year {}: {}", i + 1, format_currency(*year));
    }
    println!(
        "  4-year total: {} (avg {}/yr)",
        format_currency(breakdown.total_4_year),
        format_compact(breakdown.average_annual)
    );
    println!(
        "  Benefits: ~{}/yr (not included above)",
        format_currency(breakdown.benefits_value)
    );
}

fn print_comparison(offers: &[JobOffer], comparison: &OfferComparison) {
    for (offer, breakdown) in offers.iter().zip(&comparison.breakdown) {
        println!(
            "{:<20} {:>12} total  {:>10}/yr",
            offer.company,
            format_currency(breakdown.total_4_year),
            format_compact(breakdown.average_annual)
        );
    }
    if !comparison.winner.is_empty() {
        println!("\nWinner: {}", comparison.winner);
    }
    for insight in &comparison.insights {
        println!("  - {}", insight);
    }
}

fn print_market_header(market: &MarketData) {
    println!(
        "{} / {} / {} ({} samples, updated {})",
        market.role,
        market.level,
        market.location,
        market.sample_size,
        market.last_updated.format("%Y-%m-%d")
    );
    let base = &market.base_salary;
    let total = &market.total_comp;
    println!(
        "  base:  p25 {}  median {}  p75 {}",
        format_compact(base.p25),
        format_compact(base.median),
        format_compact(base.p75)
    );
    println!(
        "  total: p25 {}  median {}  p75 {}",
        format_compact(total.p25),
        format_compact(total.median),
        format_compact(total.p75)
    );
}

fn print_leverage(leverage: &NegotiationLeverage) {
    println!(
        "Leverage: {} strategy, confidence {}/100, ask for about {} more",
        leverage.strategy,
        leverage.confidence_score,
        format_currency(leverage.target_increase)
    );
    for strength in &leverage.strengths {
        println!("  + {}", strength);
    }
    for weakness in &leverage.weaknesses {
        println!("  - {}", weakness);
    }
    println!("Talking points:");
    for point in &leverage.talking_points {
        println!("  \"{}\"", point);
    }
}

fn print_analysis(analysis: &OfferAnalysis) {
    println!("== {} ==", analysis.company);
    print_breakdown(&analysis.breakdown);
    if let Some(pay) = &analysis.take_home {
        println!(
            "  Year-one take-home: {} ({:.1}% effective)",
            format_currency(pay.take_home),
            pay.effective_rate
        );
    }

    match &analysis.market {
        MarketInsight::Available {
            market_data,
            comparison,
            leverage,
        } => {
            print_market_header(market_data);
            println!(
                "  Offer sits at the {:.1}th percentile ({} market)",
                comparison.total_comp_percentile, comparison.market_position
            );
            print_leverage(leverage);
        }
        MarketInsight::InsufficientData { key, reason } => {
            println!("  Market comparison unavailable for {}: {}", key, reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::try_parse_from([
            "offerwise",
            "analyze",
            "offers.toml",
            "--competing",
            "--experience",
            "7",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Command::Analyze {
                offers,
                competing,
                experience,
                state,
            } => {
                assert_eq!(offers, PathBuf::from("offers.toml"));
                assert!(competing);
                assert_eq!(experience, 7);
                assert!(state.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_parse_take_home_defaults() {
        let cli = Cli::try_parse_from(["offerwise", "take-home", "150000"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(matches!(
            cli.command,
            Command::TakeHome { gross, state: None } if gross == 150_000.0
        ));
    }

    #[test]
    fn test_vesting_loss_requires_months() {
        assert!(Cli::try_parse_from(["offerwise", "vesting-loss", "100000", "1-year cliff"]).is_err());
    }

    #[tokio::test]
    async fn test_handle_take_home() {
        let cli = Cli::try_parse_from(["offerwise", "take-home", "150000", "--state", "TX"]).unwrap();
        handle_command(cli, ConfigManager::defaults("local")).await.unwrap();
    }

    #[tokio::test]
    async fn test_handle_market_miss_as_json() {
        let cli = Cli::try_parse_from([
            "offerwise",
            "market",
            "Pilot",
            "Captain",
            "Paris",
            "--format",
            "json",
        ])
        .unwrap();
        handle_command(cli, ConfigManager::defaults("local")).await.unwrap();
    }

    #[tokio::test]
    async fn test_handle_rejects_zero_salary() {
        let cli = Cli::try_parse_from(["offerwise", "required-raise", "0", "150000"]).unwrap();
        assert!(handle_command(cli, ConfigManager::defaults("local")).await.is_err());
    }
}
