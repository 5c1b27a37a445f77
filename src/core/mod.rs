// src/core/mod.rs
//! I/O services around the calculation layer: configuration and offer files

pub mod config_manager;
pub mod offer_import;

pub use config_manager::{AnalysisConfig, ConfigManager, LoggingConfig};
pub use offer_import::{load_offers, parse_offers};
