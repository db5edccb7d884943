//! Configuration for the pixface watch face.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/pixface/config.toml` on Linux). The `PIXFACE_CONFIG`
//! environment variable points at a different file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::FixedOffset;
use color_eyre::eyre::{WrapErr, bail, eyre};
use directories::ProjectDirs;
use pixface_core::{ColorTheme, TimeFormat};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PIXFACE_CONFIG";

const CONFIG_FILE: &str = "config.toml";

/// Largest accepted UTC offset, in minutes (23:59).
const MAX_OFFSET_MINUTES: i32 = 23 * 60 + 59;

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ink colour theme.
    pub theme: ColorTheme,
    /// Hour format of the digital readout.
    pub time_format: TimeFormat,
    /// Show seconds in the digital readout while interactive.
    pub show_seconds: bool,
    /// Draw ambient mode in pure white on black.
    pub low_bit_ambient: bool,
    /// Enter ambient mode after this many idle seconds.
    pub ambient_timeout_secs: Option<u64>,
    /// Fixed UTC offset in minutes instead of the system zone.
    pub utc_offset_minutes: Option<i32>,
    /// Log filter in `env_logger` syntax.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            time_format: TimeFormat::default(),
            show_seconds: false,
            low_bit_ambient: false,
            ambient_timeout_secs: None,
            utc_offset_minutes: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a config from TOML text.
    pub fn from_toml(text: &str) -> color_eyre::Result<Self> {
        let config: Config = toml::from_str(text).wrap_err("invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> color_eyre::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text).wrap_err_with(|| format!("failed to load {}", path.display()))
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> color_eyre::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).wrap_err("failed to serialize config")?;
        fs::write(path, text).wrap_err_with(|| format!("failed to write {}", path.display()))
    }

    /// Reject values that parse but make no sense.
    pub fn validate(&self) -> color_eyre::Result<()> {
        if let Some(minutes) = self.utc_offset_minutes
            && !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes)
        {
            bail!("utc_offset_minutes {minutes} is outside ±{MAX_OFFSET_MINUTES}");
        }
        if self.ambient_timeout_secs == Some(0) {
            bail!("ambient_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// The configured fixed offset, if any.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes.and_then(|m| FixedOffset::east_opt(m.checked_mul(60)?))
    }

    pub fn ambient_timeout(&self) -> Option<Duration> {
        self.ambient_timeout_secs.map(Duration::from_secs)
    }
}

/// Resolve the config file path.
pub fn config_path() -> color_eyre::Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let dirs = project_dirs()?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}

/// Platform directories for the application.
pub fn project_dirs() -> color_eyre::Result<ProjectDirs> {
    ProjectDirs::from("", "", "pixface").ok_or_else(|| eyre!("no home directory found"))
}
