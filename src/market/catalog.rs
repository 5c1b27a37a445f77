// src/market/catalog.rs
//! Market data lookup by (role, level, location)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use super::seed::builtin_entries;
use crate::types::MarketData;
use crate::utils::{get_file_extension, read_file_content, slugify};

/// Source of market salary distributions
pub trait MarketDataRepository: Send + Sync {
    fn find(&self, role: &str, level: &str, location: &str) -> Option<MarketData>;
}

/// Normalised catalog key, rendered as `{role}-{level}-{location}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketKey {
    pub role: String,
    pub level: String,
    pub location: &'static str,
}

impl MarketKey {
    pub fn normalize(role: &str, level: &str, location: &str) -> Self {
        Self {
            role: slugify(role),
            level: level
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_lowercase(),
            location: location_bucket(location),
        }
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.role, self.level, self.location)
    }
}

/// Map free-text locations onto the buckets the catalog is keyed by.
/// Anything unrecognised is treated as the Bay Area.
pub fn location_bucket(location: &str) -> &'static str {
    let location = location.to_lowercase();
    if location.contains("new york") || location.contains("nyc") {
        "nyc"
    } else if location.contains("seattle") {
        "seattle"
    } else if location.contains("remote") {
        "remote"
    } else {
        "sf"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: String,
    #[serde(flatten)]
    pub data: MarketData,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    entries: Vec<CatalogEntry>,
}

/// Ordered catalog. Fallback lookups scan entries in insertion order, so the
/// same catalog always resolves a miss to the same entry.
#[derive(Debug, Clone, Default)]
pub struct MarketCatalog {
    entries: Vec<CatalogEntry>,
}

impl MarketCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Catalog compiled into the crate
    pub fn builtin() -> Self {
        Self::new(builtin_entries())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a catalog document; the format follows the file extension
    /// (`toml`, `json`, `yaml`/`yml`)
    pub fn parse(content: &str, format: &str) -> Result<Self> {
        let file: CatalogFile = match format {
            "toml" => toml::from_str(content).context("Failed to parse TOML catalog")?,
            "json" => serde_json::from_str(content).context("Failed to parse JSON catalog")?,
            "yaml" | "yml" => {
                serde_yaml::from_str(content).context("Failed to parse YAML catalog")?
            }
            other => anyhow::bail!(
                "Unsupported catalog format: {}. Use toml, json or yaml",
                other
            ),
        };

        for entry in &file.entries {
            entry
                .data
                .validate()
                .with_context(|| format!("Invalid catalog entry '{}'", entry.key))?;
        }

        Ok(Self::new(file.entries))
    }

    /// Load a catalog file from disk
    pub async fn load(path: &Path) -> Result<Self> {
        let format = get_file_extension(path)
            .ok_or_else(|| anyhow::anyhow!("Catalog file has no extension: {}", path.display()))?;
        let content = read_file_content(path).await?;

        let catalog = Self::parse(&content, &format)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;

        info!(
            "Loaded {} market entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn get(&self, key: &str) -> Option<&MarketData> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.data)
    }

    /// Exact key first, then the first entry whose key mentions the role or level.
    ///
    /// Blank role and level tokens never match during the fallback scan, so a
    /// query with neither returns `None` instead of the first catalog entry.
    pub fn lookup(&self, key: &MarketKey) -> Option<&MarketData> {
        let composite = key.to_string();
        if let Some(data) = self.get(&composite) {
            debug!("Exact market data match for {}", composite);
            return Some(data);
        }

        let mentions = |entry: &CatalogEntry, needle: &str| {
            !needle.is_empty() && entry.key.contains(needle)
        };
        let fallback = self.entries.iter().find(|entry| {
            mentions(entry, key.role.as_str()) || mentions(entry, key.level.as_str())
        });

        match fallback {
            Some(entry) => {
                debug!("No entry for {}, falling back to {}", composite, entry.key);
                Some(&entry.data)
            }
            None => {
                warn!("No market data for {}", composite);
                None
            }
        }
    }
}

impl MarketDataRepository for MarketCatalog {
    fn find(&self, role: &str, level: &str, location: &str) -> Option<MarketData> {
        self.lookup(&MarketKey::normalize(role, level, location))
            .cloned()
    }
}

fn builtin_catalog() -> &'static MarketCatalog {
    static CATALOG: OnceLock<MarketCatalog> = OnceLock::new();
    CATALOG.get_or_init(MarketCatalog::builtin)
}

/// Look up the built-in catalog
pub fn get_market_data(role: &str, level: &str, location: &str) -> Option<MarketData> {
    builtin_catalog().find(role, level, location)
}
