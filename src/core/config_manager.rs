// src/core/config_manager.rs
//! Configuration loading: offerwise.yaml plus environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::compensation::{DEFAULT_PROJECTION_YEARS, DEFAULT_YEARS_TO_MATCH};
use crate::market::MarketCatalog;
use crate::types::GrowthScenarios;

pub const DEFAULT_CONFIG_FILE: &str = "offerwise.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    /// File the settings were read from; `None` when running on defaults
    pub source: Option<PathBuf>,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// External catalog file; the built-in snapshot is used when unset
    pub catalog_path: Option<PathBuf>,
    pub default_state: String,
    pub projection_years: u32,
    pub years_to_match: u32,
    pub growth_scenarios: GrowthScenarios,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by RUST_LOG
    pub level: String,
    /// JSON log file; logs go to stderr when unset
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct EnvironmentSection {
    analysis: AnalysisConfig,
    logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: EnvironmentSection,
    production: EnvironmentSection,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_state: "CA".to_string(),
            projection_years: DEFAULT_PROJECTION_YEARS,
            years_to_match: DEFAULT_YEARS_TO_MATCH,
            growth_scenarios: GrowthScenarios::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl ConfigManager {
    /// Load from `OFFERWISE_CONFIG` or ./offerwise.yaml, then apply env overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var("OFFERWISE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let environment = Self::get_environment(|key| std::env::var(key).ok());
        info!("Loading configuration for environment: {}", environment);

        let mut config = Self::from_file(path, &environment)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn get_environment(lookup: impl Fn(&str) -> Option<String>) -> String {
        lookup("OFFERWISE_ENV")
            .or_else(|| lookup("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string())
    }

    fn from_file(path: &Path, environment: &str) -> Result<Self> {
        if !path.exists() {
            info!(
                "No config file at {}, using built-in defaults",
                path.display()
            );
            return Ok(Self::defaults(environment));
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::parse(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        Ok(Self {
            environment: environment.to_string(),
            source: None,
            analysis: section.analysis,
            logging: section.logging,
        })
    }

    pub fn defaults(environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
            source: None,
            analysis: AnalysisConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("OFFERWISE_CATALOG") {
            self.analysis.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(state) = lookup("OFFERWISE_STATE") {
            self.analysis.default_state = state;
        }
        if let Some(level) = lookup("OFFERWISE_LOG") {
            self.logging.level = level;
        }
    }

    /// Market catalog configured for this environment
    pub async fn market_catalog(&self) -> Result<MarketCatalog> {
        match &self.analysis.catalog_path {
            Some(path) => MarketCatalog::load(path).await,
            None => {
                info!("Using built-in market catalog");
                Ok(MarketCatalog::builtin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SAMPLE: &str = r#"
local:
  analysis:
    default_state: NY
    projection_years: 5
  logging:
    level: debug
production:
  analysis:
    catalog_path: /srv/offerwise/catalog.toml
    growth_scenarios:
      conservative: 0.05
      moderate: 0.1
      optimistic: 0.2
  logging:
    file: /var/log/offerwise.log
"#;

    #[test]
    fn test_parse_local_section() {
        let config = ConfigManager::parse(SAMPLE, "local").unwrap();
        assert_eq!(config.analysis.default_state, "NY");
        assert_eq!(config.analysis.projection_years, 5);
        assert_eq!(config.analysis.years_to_match, DEFAULT_YEARS_TO_MATCH);
        assert_eq!(config.logging.level, "debug");
        assert!(config.analysis.catalog_path.is_none());
    }

    #[test]
    fn test_parse_production_section() {
        let config = ConfigManager::parse(SAMPLE, "production").unwrap();
        assert_eq!(
            config.analysis.catalog_path,
            Some(PathBuf::from("/srv/offerwise/catalog.toml"))
        );
        assert_eq!(config.analysis.growth_scenarios.moderate, 0.1);
        assert_eq!(config.analysis.default_state, "CA");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_environment_selection() {
        let vars: HashMap<&str, &str> = [("ENVIRONMENT", "production")].into();
        let env = ConfigManager::get_environment(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(env, "production");

        let env = ConfigManager::get_environment(|_| None);
        assert_eq!(env, "local");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            [("OFFERWISE_STATE", "WA"), ("OFFERWISE_CATALOG", "market.json")].into();
        let mut config = ConfigManager::defaults("local");
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.analysis.default_state, "WA");
        assert_eq!(
            config.analysis.catalog_path,
            Some(PathBuf::from("market.json"))
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::from_file(&dir.path().join("absent.yaml"), "local").unwrap();
        assert_eq!(config.analysis.projection_years, DEFAULT_PROJECTION_YEARS);
        assert_eq!(config.analysis.growth_scenarios, GrowthScenarios::default());
        assert!(config.source.is_none());
    }

    #[test]
    fn test_file_source_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offerwise.yaml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = ConfigManager::from_file(&path, "production").unwrap();
        assert_eq!(config.source, Some(path));
        assert_eq!(config.environment, "production");
    }

    #[tokio::test]
    async fn test_builtin_catalog_when_unset() {
        let catalog = ConfigManager::defaults("local").market_catalog().await.unwrap();
        assert!(!catalog.is_empty());
    }
}
