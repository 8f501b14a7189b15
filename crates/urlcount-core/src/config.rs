use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How URL lists are read from files or stdin (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Strip leading/trailing whitespace from every line.
    pub trim_whitespace: bool,
    /// Ignore lines that are empty (after trimming, if enabled).
    pub skip_blank_lines: bool,
    /// Lines starting with this prefix are ignored (e.g. "#"). None = no comments.
    #[serde(default)]
    pub comment_prefix: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            skip_blank_lines: true,
            comment_prefix: None,
        }
    }
}

/// Output format for CLI results: plain text (default) or JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/urlcount/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlcountConfig {
    /// Default output format: "text" or "json". Per-command flags override it.
    #[serde(default)]
    pub output_format: Option<OutputFormat>,
    /// Input line handling; built-in defaults when the section is missing.
    #[serde(default)]
    pub input: InputConfig,
}

impl UrlcountConfig {
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcount")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlcountConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlcountConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<UrlcountConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlcountConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
