//! Configuration management for the shelfmark CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the simulated unreliable channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlakySettings {
    /// Layer the flaky channel on every invocation (the `--flaky` flag
    /// turns it on for a single run instead).
    pub enabled: bool,
    /// Chance that a mutating call fails.
    pub probability: f64,
    /// Simulated round-trip latency in milliseconds.
    pub delay_ms: u64,
}

impl Default for FlakySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            probability: catalog_client::DEFAULT_FAULT_PROBABILITY,
            delay_ms: 1000,
        }
    }
}

/// Store configuration kept in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the remote catalog store.
    pub store_url: String,
    /// Percentage used for the discounted-price display column.
    pub discount_percent: f64,
    /// Flaky-channel settings.
    #[serde(default)]
    pub flaky: FlakySettings,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_url: "http://localhost:3000".to_string(),
            discount_percent: 10.0,
            flaky: FlakySettings::default(),
        }
    }
}

impl StoreConfig {
    /// Load the configuration from a directory.
    pub async fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("store.json");
        let contents = tokio::fs::read_to_string(&path)
            .await
            .context("Catalog not configured. Run 'shelfmark init' first.")?;
        serde_json::from_str(&contents).context("Invalid store configuration")
    }

    /// Load the configuration, falling back to defaults when none was
    /// written yet.
    pub async fn load_or_default(data_dir: &Path) -> Result<Self> {
        if Self::exists(data_dir).await {
            Self::load(data_dir).await
        } else {
            Ok(Self::default())
        }
    }

    /// Save the configuration to a directory.
    pub async fn save(&self, data_dir: &Path) -> Result<()> {
        let path = data_dir.join("store.json");
        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(&path, contents)
            .await
            .context("Failed to save store configuration")?;
        Ok(())
    }

    /// Check if a configuration was written.
    pub async fn exists(data_dir: &Path) -> bool {
        data_dir.join("store.json").exists()
    }
}
