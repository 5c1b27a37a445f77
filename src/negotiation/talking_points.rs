// src/negotiation/talking_points.rs
//! Static script content the leverage analyzer picks from

use crate::utils::format_currency;

/// Closing lines appended to every script
pub const CLOSING_POINTS: [&str; 3] = [
    "I'm genuinely excited about this role and the team.",
    "I'm confident I can make a meaningful impact from day one.",
    "Is there flexibility in the package to reflect that?",
];

pub fn competing_offer() -> String {
    "I have another offer on the table, and I'd like to find a way to make this one work."
        .to_string()
}

pub fn experience(years: u32, level: &str) -> String {
    format!(
        "With {} years of experience, I bring more than is typical for a {} hire.",
        years, level
    )
}

pub fn below_market(market_median: f64, vs_median_pct: f64) -> String {
    format!(
        "Market data puts median total compensation for this role at {}, and this offer is {:.1}% below that.",
        format_currency(market_median),
        vs_median_pct.abs()
    )
}
