use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output defaults loaded from `~/.config/urlsplit/config.toml`.
///
/// Every key is optional in the file; command-line flags can only turn
/// these on, never off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlsplitConfig {
    /// Pretty-print the JSON record.
    pub pretty: bool,
    /// Skip schema post-processing of the record.
    pub raw: bool,
    /// Suppress platform compatibility warnings.
    pub quiet: bool,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsplit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`.
pub fn load_from(path: &Path) -> Result<UrlsplitConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: UrlsplitConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

/// Write `cfg` to `path`, creating parent directories.
pub fn save_to(path: &Path, cfg: &UrlsplitConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("writing config {}", path.display()))?;
    Ok(())
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlsplitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlsplitConfig::default();
        save_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}
