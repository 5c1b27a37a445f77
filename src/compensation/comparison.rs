// src/compensation/comparison.rs
//! Side-by-side comparison of several offers

use tracing::info;

use super::breakdown::calculate_compensation_breakdown;
use crate::types::{CompensationBreakdown, JobOffer, OfferComparison};
use crate::utils::format_currency;

/// Equity above this share of the four-year total marks an offer as equity-heavy
pub const EQUITY_HEAVY_SHARE: f64 = 0.40;
/// Benefits gap (dollars per year) needed before one package is called out
pub const BENEFITS_GAP_THRESHOLD: f64 = 3_000.0;

pub fn compare_offers(offers: &[JobOffer]) -> OfferComparison {
    if offers.is_empty() {
        return OfferComparison {
            breakdown: Vec::new(),
            winner: String::new(),
            insights: vec!["No offers to compare".to_string()],
        };
    }

    let breakdown: Vec<CompensationBreakdown> =
        offers.iter().map(calculate_compensation_breakdown).collect();

    let winner_idx = index_of_max(&breakdown, |b| b.total_4_year);
    let winner = offers[winner_idx].company.clone();

    let mut insights = Vec::new();

    if offers.len() >= 2 {
        insights.push(lead_insight(offers, &breakdown));
    }

    if let Some((offer, b)) = offers
        .iter()
        .zip(&breakdown)
        .find(|(o, b)| o.equity_value > EQUITY_HEAVY_SHARE * b.total_4_year)
    {
        insights.push(format!(
            "{} is equity-heavy: {:.0}% of its 4-year value is stock, so it carries more risk",
            offer.company,
            offer.equity_value / b.total_4_year * 100.0
        ));
    }

    let cash_idx = index_of_max(offers, JobOffer::first_year_cash);
    insights.push(format!(
        "{} pays the most cash in year one ({})",
        offers[cash_idx].company,
        format_currency(offers[cash_idx].first_year_cash())
    ));

    let best_benefits = index_of_max(&breakdown, |b| b.benefits_value);
    let weakest_benefits = breakdown
        .iter()
        .map(|b| b.benefits_value)
        .fold(f64::INFINITY, f64::min);
    let gap = breakdown[best_benefits].benefits_value - weakest_benefits;
    if gap > BENEFITS_GAP_THRESHOLD {
        insights.push(format!(
            "{} has the strongest benefits, worth about {} more per year than the weakest package",
            offers[best_benefits].company,
            format_currency(gap)
        ));
    }

    let cliffs: Vec<&str> = offers
        .iter()
        .filter(|o| o.has_cliff())
        .map(|o| o.company.as_str())
        .collect();
    if !cliffs.is_empty() {
        insights.push(format!(
            "Vesting cliff at {}: leaving before the cliff forfeits all equity",
            cliffs.join(", ")
        ));
    }

    info!(
        "Compared {} offers, {} leads with {}",
        offers.len(),
        winner,
        format_currency(breakdown[winner_idx].total_4_year)
    );

    OfferComparison {
        breakdown,
        winner,
        insights,
    }
}

/// Percentage gap between the two highest four-year totals
fn lead_insight(offers: &[JobOffer], breakdown: &[CompensationBreakdown]) -> String {
    let mut ranked: Vec<usize> = (0..breakdown.len()).collect();
    // Stable sort keeps first-seen order among equal totals
    ranked.sort_by(|&a, &b| {
        breakdown[b]
            .total_4_year
            .total_cmp(&breakdown[a].total_4_year)
    });
    let (top, second) = (ranked[0], ranked[1]);

    let top_total = breakdown[top].total_4_year;
    let second_total = breakdown[second].total_4_year;
    let gap_pct = if second_total > 0.0 {
        (top_total - second_total) / second_total * 100.0
    } else {
        0.0
    };

    format!(
        "{} leads {} by {:.1}% over 4 years ({} vs {})",
        offers[top].company,
        offers[second].company,
        gap_pct,
        format_currency(top_total),
        format_currency(second_total)
    )
}

/// Index of the largest key; the earliest element wins ties
fn index_of_max<T>(items: &[T], key: impl Fn(&T) -> f64) -> usize {
    let mut best = 0;
    for (i, item) in items.iter().enumerate().skip(1) {
        if key(item) > key(&items[best]) {
            best = i;
        }
    }
    best
}
