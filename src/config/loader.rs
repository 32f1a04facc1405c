//! Configuration file loading with precedence handling.
//!
//! Precedence, lowest to highest: built-in terminal defaults, config file,
//! environment, command line.

use crate::host::TextMetrics;
use crate::model::{FontKind, ListingStyle};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "RICHLIST_CONFIG";
/// Environment variable overriding the bullet margin glyph.
pub const MARGIN_TEXT_ENV: &str = "RICHLIST_MARGIN_TEXT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The config file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// The config file is not valid TOML or has unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// Every field is optional. Lives at `~/.config/richlist/config.toml` unless
/// overridden.
///
/// ```toml
/// spacing = 0
/// gap_height = 2
/// margin_text = " * "
/// title_font = "medium"
/// item_font = "small"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Gap added after every text row.
    #[serde(default)]
    pub spacing: Option<f32>,

    /// Height of separator bands.
    #[serde(default)]
    pub gap_height: Option<f32>,

    /// Bullet margin glyph.
    #[serde(default)]
    pub margin_text: Option<String>,

    /// Columns reserved for the scrollbar.
    #[serde(default)]
    pub scrollbar_width: Option<f32>,

    /// Font for titles.
    #[serde(default)]
    pub title_font: Option<FontKind>,

    /// Font for everything else.
    #[serde(default)]
    pub item_font: Option<FontKind>,

    /// Rows moved per line scroll.
    #[serde(default)]
    pub scroll_step: Option<f32>,

    /// Repaint interval in milliseconds.
    #[serde(default)]
    pub tick_millis: Option<u64>,

    /// Path to the log file.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Gap added after every text row.
    pub spacing: f32,
    /// Height of separator bands.
    pub gap_height: f32,
    /// Bullet margin glyph.
    pub margin_text: String,
    /// Columns reserved for the scrollbar.
    pub scrollbar_width: f32,
    /// Font for titles.
    pub title_font: FontKind,
    /// Font for everything else.
    pub item_font: FontKind,
    /// Rows moved per line scroll.
    pub scroll_step: f32,
    /// Repaint interval in milliseconds.
    pub tick_millis: u64,
    /// Path to the log file.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    /// Terminal defaults: one unit is one cell.
    fn default() -> Self {
        Self {
            spacing: 0.0,
            gap_height: 2.0,
            margin_text: crate::model::DEFAULT_MARGIN_TEXT.to_string(),
            scrollbar_width: 1.0,
            title_font: FontKind::Medium,
            item_font: FontKind::Small,
            scroll_step: 1.0,
            tick_millis: 100,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Listing style with the margin width measured by `metrics`.
    pub fn listing_style<M>(&self, metrics: &M) -> ListingStyle
    where
        M: TextMetrics + ?Sized,
    {
        ListingStyle {
            spacing: self.spacing,
            gap_height: self.gap_height,
            scrollbar_width: self.scrollbar_width,
            title_font: self.title_font,
            item_font: self.item_font,
            ..ListingStyle::default()
        }
        .with_margin_text(self.margin_text.clone(), metrics)
    }

    /// Repaint interval.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/richlist/richlist.log` where a state directory exists,
/// otherwise `richlist.log` in the current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("richlist").join("richlist.log"),
        None => PathBuf::from("richlist.log"),
    }
}

/// Resolve the default config file path, `~/.config/richlist/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("richlist").join("config.toml"))
}

/// Load a config file.
///
/// A missing file is `Ok(None)`, not an error.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` (the `--config` flag)
/// 2. `RICHLIST_CONFIG` environment variable
/// 3. Default path `~/.config/richlist/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is set but empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge a config file over the terminal defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        spacing: config.spacing.unwrap_or(defaults.spacing),
        gap_height: config.gap_height.unwrap_or(defaults.gap_height),
        margin_text: config.margin_text.unwrap_or(defaults.margin_text),
        scrollbar_width: config.scrollbar_width.unwrap_or(defaults.scrollbar_width),
        title_font: config.title_font.unwrap_or(defaults.title_font),
        item_font: config.item_font.unwrap_or(defaults.item_font),
        scroll_step: config.scroll_step.unwrap_or(defaults.scroll_step),
        tick_millis: config.tick_millis.unwrap_or(defaults.tick_millis),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment overrides.
///
/// - `RICHLIST_MARGIN_TEXT`: bullet margin glyph
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(margin) = std::env::var(MARGIN_TEXT_ENV) {
        config.margin_text = margin;
    }
    config
}

/// Apply command-line overrides. Only flags the user passed are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    spacing_override: Option<f32>,
    gap_height_override: Option<f32>,
) -> ResolvedConfig {
    if let Some(spacing) = spacing_override {
        config.spacing = spacing;
    }
    if let Some(gap_height) = gap_height_override {
        config.gap_height = gap_height;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
