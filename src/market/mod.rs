// src/market/mod.rs
//! Market salary catalog and percentile positioning

pub mod catalog;
pub mod comparator;
mod seed;

pub use catalog::{
    get_market_data, location_bucket, CatalogEntry, MarketCatalog, MarketDataRepository,
    MarketKey,
};
pub use comparator::{compare_to_market, percentile_of};
