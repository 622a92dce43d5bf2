//! Session configuration.
//!
//! Loaded from a TOML file; every section and key is optional and falls back to the
//! defaults below. Game rules (payout tables, fees, rates) are fixed and not
//! configurable, only session setup is.
//!
//! ```toml
//! [session]
//! starting_igc = 100
//! starting_resources = 0
//! marketplace_size = 8
//! # seed = 42
//!
//! [wallet]
//! simulation_delay_ms = 3000
//!
//! [ui]
//! tick_rate_ms = 200
//! default_bet = 10
//!
//! [logging]
//! level = "info"
//! # file = "cryptoidle.log"
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::economy::{EconomySettings, STARTING_IGC};
use crate::nft::MARKETPLACE_SIZE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub wallet: WalletConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub starting_igc: u64,
    pub starting_resources: u64,
    pub marketplace_size: usize,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_igc: STARTING_IGC,
            starting_resources: 0,
            marketplace_size: MARKETPLACE_SIZE,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn economy_settings(&self) -> EconomySettings {
        EconomySettings {
            starting_igc: self.starting_igc,
            starting_resources: self.starting_resources,
            marketplace_size: self.marketplace_size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub simulation_delay_ms: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            simulation_delay_ms: 3_000,
        }
    }
}

impl WalletConfig {
    pub fn simulation_delay(&self) -> Duration {
        Duration::from_millis(self.simulation_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    pub default_bet: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 200,
            default_bet: 10,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(16))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Loads `path` when it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn create_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content =
            toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
