//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by a user config file in the config directory; everything is
//! optional.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! data_file = "data.json"   # Relative to the config directory
//! fallback_month = "feb"    # /today uses this month when the current one has no entries
//! excerpt_length = 100      # Characters shown on article cards
//!
//! [site]
//! title = "Devotional"
//! footer = "© 2026 Christian Devotionals. May God bless you."
//! base_url = ""             # Prefix for share links, e.g. "https://example.org"
//!
//! [reader]
//! font_size = "large"       # small | normal | large | extra-large | maximum
//! language = "english"      # english | tamil
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#1c1917"
//! text_muted = "#78716c"
//! border = "#e7e5e4"
//! primary = "#7c2d12"
//! accent = "#f5f5f4"
//!
//! [colors.dark]
//! background = "#0c0a09"
//! text = "#f5f5f4"
//! text_muted = "#a8a29e"
//! border = "#292524"
//! primary = "#fdba74"
//! accent = "#1c1917"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::calendar::Month;
use crate::text::DEFAULT_EXCERPT_LENGTH;
use crate::types::{FontSize, Language};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name looked up in the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the JSON data file, relative to the config directory.
    pub data_file: String,
    /// Month `/today` falls back to when the current month has no entries.
    pub fallback_month: String,
    /// Excerpt length on article cards, in characters.
    pub excerpt_length: usize,
    pub site: SiteSection,
    pub reader: ReaderConfig,
    pub server: ServerConfig,
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_file: "data.json".to_string(),
            fallback_month: "feb".to_string(),
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            site: SiteSection::default(),
            reader: ReaderConfig::default(),
            server: ServerConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Month::from_key(&self.fallback_month).is_none() {
            return Err(ConfigError::Validation(format!(
                "fallback_month must be a three-letter month key (jan..dec), got {:?}",
                self.fallback_month
            )));
        }
        if self.excerpt_length == 0 {
            return Err(ConfigError::Validation(
                "excerpt_length must be greater than 0".into(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port must be non-zero".into()));
        }
        Ok(())
    }

    /// The validated fallback month.
    pub fn fallback(&self) -> Month {
        Month::from_key(&self.fallback_month).unwrap_or(Month::Feb)
    }

    /// Resolve the data file path against the config directory.
    pub fn data_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.data_file)
    }
}

/// Site identity shown in headers and footers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub title: String,
    pub footer: String,
    /// Absolute URL prefix for share links. Empty means share links are
    /// root-relative.
    pub base_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Devotional".to_string(),
            footer: "© 2026 Christian Devotionals. May God bless you.".to_string(),
            base_url: String::new(),
        }
    }
}

/// Initial reader preferences. Visitors can change both in the page; their
/// choice is kept in the browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    pub font_size: FontSize,
    pub language: Language,
}

/// Listen address for `serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Color configuration for light and dark themes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text: excerpts, footer, inactive tabs.
    pub text_muted: String,
    pub border: String,
    /// Headings, site title, active day.
    pub primary: String,
    /// Hover and selected-menu background.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1c1917".to_string(),
            text_muted: "#78716c".to_string(),
            border: "#e7e5e4".to_string(),
            primary: "#7c2d12".to_string(),
            accent: "#f5f5f4".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0c0a09".to_string(),
            text: "#f5f5f4".to_string(),
            text_muted: "#a8a29e".to_string(),
            border: "#292524".to_string(),
            primary: "#fdba74".to_string(),
            accent: "#1c1917".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(stock_defaults_value()?, overlay),
        None => stock_defaults_value()?,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Devotional Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# JSON data file, relative to the directory holding this config.
data_file = "data.json"

# Month used by /today when the current month has no devotionals.
fallback_month = "feb"

# Number of characters shown in article card excerpts.
excerpt_length = 100

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "Devotional"
footer = "© 2026 Christian Devotionals. May God bless you."

# Absolute URL prefix for share links, e.g. "https://devotional.example.org".
# Leave empty for root-relative links.
base_url = ""

# ---------------------------------------------------------------------------
# Reader defaults (visitors can change these in the page)
# ---------------------------------------------------------------------------
[reader]
# small | normal | large | extra-large | maximum
font_size = "large"
# english | tamil
language = "english"

# ---------------------------------------------------------------------------
# HTTP server (`devotional serve`)
# ---------------------------------------------------------------------------
[server]
host = "127.0.0.1"
port = 3000

# ---------------------------------------------------------------------------
# Colors - Light theme
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#1c1917"
text_muted = "#78716c"    # Excerpts, footer, inactive tabs
border = "#e7e5e4"
primary = "#7c2d12"       # Headings, site title, active day
accent = "#f5f5f4"        # Hover and selection backgrounds

# ---------------------------------------------------------------------------
# Colors - Dark theme
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0c0a09"
text = "#f5f5f4"
text_muted = "#a8a29e"
border = "#292524"
primary = "#fdba74"
accent = "#1c1917"
"##
}

/// Generate CSS custom properties from color config.
///
/// Dark colors apply both under `prefers-color-scheme: dark` and when the
/// reader has explicitly chosen the dark theme (`data-theme="dark"`); an
/// explicit light choice wins over the media query.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let vars = |scheme: &ColorScheme, indent: &str| {
        format!(
            "{indent}--color-bg: {};\n\
             {indent}--color-text: {};\n\
             {indent}--color-text-muted: {};\n\
             {indent}--color-border: {};\n\
             {indent}--color-primary: {};\n\
             {indent}--color-accent: {};",
            scheme.background,
            scheme.text,
            scheme.text_muted,
            scheme.border,
            scheme.primary,
            scheme.accent,
        )
    };
    format!(
        ":root {{\n{light}\n}}\n\n\
         @media (prefers-color-scheme: dark) {{\n    :root:not([data-theme=\"light\"]) {{\n{dark_media}\n    }}\n}}\n\n\
         :root[data-theme=\"dark\"] {{\n{dark}\n}}",
        light = vars(&colors.light, "    "),
        dark_media = vars(&colors.dark, "        "),
        dark = vars(&colors.dark, "    "),
    )
}
