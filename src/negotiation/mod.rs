// src/negotiation/mod.rs
//! Negotiation leverage scoring and script selection

pub mod leverage;
pub mod talking_points;

pub use leverage::{analyze_negotiation_leverage, strategy_for, MAX_CONFIDENCE};
