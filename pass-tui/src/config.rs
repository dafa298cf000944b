use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassConfig {
    /// How often the countdown is recomputed, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Draw the duration in large block digits.
    #[serde(default = "default_large_timer")]
    pub large_timer: bool,

    /// Where committed timestamps are kept. Defaults to `state.json` next to
    /// the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_path: Option<PathBuf>,

    /// `tracing` filter used when `RUST_LOG` is unset, e.g. "info" or "pass_tui=debug".
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_tick_interval_ms() -> u64 {
    pass_window::DEFAULT_TICK_INTERVAL.as_millis() as u64
}

fn default_large_timer() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            large_timer: default_large_timer(),
            state_path: None,
            log_filter: default_log_filter(),
        }
    }
}

fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join("pass-tui"))
}

impl PassConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(root_path()?.join("config.toml"))
    }

    pub fn default_state_path() -> Result<PathBuf> {
        Ok(root_path()?.join("state.json"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(root_path()?.join("pass-tui.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        if config.tick_interval_ms == 0 {
            anyhow::bail!("tick_interval_ms in {} must be at least 1", path.display());
        }
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    pub fn state_path(&self) -> Result<PathBuf> {
        match &self.state_path {
            Some(path) => Ok(path.clone()),
            None => Self::default_state_path(),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
