// src/market/seed.rs
//! Built-in market snapshot (US tech, fall 2024)

use chrono::{DateTime, TimeZone, Utc};

use super::catalog::CatalogEntry;
use crate::types::{MarketData, PercentileDistribution, RangeSummary};

struct Seed {
    key: &'static str,
    role: &'static str,
    level: &'static str,
    location: &'static str,
    base: [f64; 5],
    total: [f64; 5],
    equity: [f64; 3],
    bonus: [f64; 3],
    sample_size: u32,
}

// Order matters: fallback lookups take the first entry that matches.
const SEEDS: &[Seed] = &[
    Seed {
        key: "software-engineer-junior-sf",
        role: "Software Engineer",
        level: "Junior (0-2 years)",
        location: "San Francisco",
        base: [105_000.0, 120_000.0, 135_000.0, 150_000.0, 170_000.0],
        total: [120_000.0, 145_000.0, 165_000.0, 190_000.0, 230_000.0],
        equity: [0.0, 20_000.0, 60_000.0],
        bonus: [0.0, 8_000.0, 20_000.0],
        sample_size: 1_240,
    },
    Seed {
        key: "software-engineer-mid-sf",
        role: "Software Engineer",
        level: "Mid-Level (2-5 years)",
        location: "San Francisco",
        base: [135_000.0, 150_000.0, 165_000.0, 180_000.0, 205_000.0],
        total: [165_000.0, 195_000.0, 225_000.0, 260_000.0, 320_000.0],
        equity: [15_000.0, 45_000.0, 110_000.0],
        bonus: [0.0, 15_000.0, 30_000.0],
        sample_size: 2_310,
    },
    Seed {
        key: "software-engineer-senior-sf",
        role: "Software Engineer",
        level: "Senior (5-8 years)",
        location: "San Francisco",
        base: [165_000.0, 180_000.0, 195_000.0, 215_000.0, 245_000.0],
        total: [230_000.0, 275_000.0, 320_000.0, 375_000.0, 480_000.0],
        equity: [40_000.0, 95_000.0, 200_000.0],
        bonus: [0.0, 22_000.0, 45_000.0],
        sample_size: 2_875,
    },
    Seed {
        key: "software-engineer-staff-sf",
        role: "Software Engineer",
        level: "Staff (8+ years)",
        location: "San Francisco",
        base: [200_000.0, 220_000.0, 240_000.0, 260_000.0, 300_000.0],
        total: [320_000.0, 390_000.0, 450_000.0, 530_000.0, 700_000.0],
        equity: [90_000.0, 170_000.0, 380_000.0],
        bonus: [0.0, 35_000.0, 70_000.0],
        sample_size: 960,
    },
    Seed {
        key: "software-engineer-senior-nyc",
        role: "Software Engineer",
        level: "Senior (5-8 years)",
        location: "New York",
        base: [160_000.0, 175_000.0, 190_000.0, 210_000.0, 240_000.0],
        total: [220_000.0, 265_000.0, 305_000.0, 360_000.0, 460_000.0],
        equity: [35_000.0, 85_000.0, 180_000.0],
        bonus: [0.0, 25_000.0, 55_000.0],
        sample_size: 1_830,
    },
    Seed {
        key: "software-engineer-senior-seattle",
        role: "Software Engineer",
        level: "Senior (5-8 years)",
        location: "Seattle",
        base: [155_000.0, 170_000.0, 185_000.0, 200_000.0, 230_000.0],
        total: [215_000.0, 260_000.0, 300_000.0, 350_000.0, 450_000.0],
        equity: [40_000.0, 95_000.0, 190_000.0],
        bonus: [0.0, 18_000.0, 40_000.0],
        sample_size: 1_520,
    },
    Seed {
        key: "software-engineer-senior-remote",
        role: "Software Engineer",
        level: "Senior (5-8 years)",
        location: "Remote",
        base: [140_000.0, 155_000.0, 170_000.0, 185_000.0, 215_000.0],
        total: [170_000.0, 200_000.0, 235_000.0, 275_000.0, 350_000.0],
        equity: [10_000.0, 45_000.0, 120_000.0],
        bonus: [0.0, 12_000.0, 30_000.0],
        sample_size: 1_410,
    },
    Seed {
        key: "software-engineer-mid-remote",
        role: "Software Engineer",
        level: "Mid-Level (2-5 years)",
        location: "Remote",
        base: [115_000.0, 128_000.0, 140_000.0, 155_000.0, 180_000.0],
        total: [130_000.0, 150_000.0, 170_000.0, 195_000.0, 245_000.0],
        equity: [0.0, 20_000.0, 70_000.0],
        bonus: [0.0, 8_000.0, 20_000.0],
        sample_size: 1_120,
    },
    Seed {
        key: "product-manager-mid-sf",
        role: "Product Manager",
        level: "Mid-Level (3-5 years)",
        location: "San Francisco",
        base: [140_000.0, 155_000.0, 170_000.0, 185_000.0, 210_000.0],
        total: [170_000.0, 200_000.0, 230_000.0, 265_000.0, 330_000.0],
        equity: [15_000.0, 45_000.0, 110_000.0],
        bonus: [0.0, 15_000.0, 30_000.0],
        sample_size: 870,
    },
    Seed {
        key: "product-manager-senior-sf",
        role: "Product Manager",
        level: "Senior (5+ years)",
        location: "San Francisco",
        base: [170_000.0, 185_000.0, 200_000.0, 220_000.0, 250_000.0],
        total: [230_000.0, 270_000.0, 315_000.0, 365_000.0, 470_000.0],
        equity: [35_000.0, 90_000.0, 190_000.0],
        bonus: [0.0, 25_000.0, 50_000.0],
        sample_size: 1_040,
    },
    Seed {
        key: "product-manager-senior-nyc",
        role: "Product Manager",
        level: "Senior (5+ years)",
        location: "New York",
        base: [165_000.0, 180_000.0, 195_000.0, 215_000.0, 245_000.0],
        total: [220_000.0, 260_000.0, 300_000.0, 350_000.0, 450_000.0],
        equity: [30_000.0, 80_000.0, 170_000.0],
        bonus: [0.0, 28_000.0, 60_000.0],
        sample_size: 760,
    },
    Seed {
        key: "data-scientist-mid-seattle",
        role: "Data Scientist",
        level: "Mid-Level (2-5 years)",
        location: "Seattle",
        base: [120_000.0, 135_000.0, 150_000.0, 165_000.0, 190_000.0],
        total: [145_000.0, 170_000.0, 195_000.0, 225_000.0, 285_000.0],
        equity: [10_000.0, 35_000.0, 90_000.0],
        bonus: [0.0, 10_000.0, 25_000.0],
        sample_size: 640,
    },
    Seed {
        key: "data-scientist-senior-sf",
        role: "Data Scientist",
        level: "Senior (5-8 years)",
        location: "San Francisco",
        base: [155_000.0, 170_000.0, 185_000.0, 200_000.0, 230_000.0],
        total: [210_000.0, 250_000.0, 290_000.0, 340_000.0, 430_000.0],
        equity: [30_000.0, 80_000.0, 170_000.0],
        bonus: [0.0, 18_000.0, 40_000.0],
        sample_size: 710,
    },
    Seed {
        key: "engineering-manager-senior-sf",
        role: "Engineering Manager",
        level: "Senior (8+ years)",
        location: "San Francisco",
        base: [190_000.0, 210_000.0, 230_000.0, 250_000.0, 285_000.0],
        total: [290_000.0, 350_000.0, 410_000.0, 480_000.0, 620_000.0],
        equity: [70_000.0, 140_000.0, 300_000.0],
        bonus: [0.0, 30_000.0, 60_000.0],
        sample_size: 580,
    },
    Seed {
        key: "product-designer-senior-sf",
        role: "Product Designer",
        level: "Senior (5+ years)",
        location: "San Francisco",
        base: [140_000.0, 155_000.0, 170_000.0, 185_000.0, 210_000.0],
        total: [175_000.0, 210_000.0, 245_000.0, 285_000.0, 360_000.0],
        equity: [20_000.0, 55_000.0, 130_000.0],
        bonus: [0.0, 12_000.0, 28_000.0],
        sample_size: 490,
    },
];

fn snapshot_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn distribution(points: [f64; 5]) -> PercentileDistribution {
    let [min, p25, median, p75, max] = points;
    PercentileDistribution::new(min, p25, median, p75, max)
}

fn range(points: [f64; 3]) -> RangeSummary {
    let [min, median, max] = points;
    RangeSummary::new(min, median, max)
}

pub(crate) fn builtin_entries() -> Vec<CatalogEntry> {
    let last_updated = snapshot_date();

    SEEDS
        .iter()
        .map(|seed| CatalogEntry {
            key: seed.key.to_string(),
            data: MarketData {
                role: seed.role.to_string(),
                level: seed.level.to_string(),
                location: seed.location.to_string(),
                base_salary: distribution(seed.base),
                total_comp: distribution(seed.total),
                equity: range(seed.equity),
                bonus: range(seed.bonus),
                sample_size: seed.sample_size,
                last_updated,
            },
        })
        .collect()
}
