use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/rawget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawgetConfig {
    /// Terminate request lines with `\r\n` instead of the bare `\n` the
    /// original wire format used. Needed for strict HTTP/1.1 servers; the
    /// `--crlf` flag forces it on for a single run.
    #[serde(default)]
    pub crlf: bool,
}

impl Default for RawgetConfig {
    fn default() -> Self {
        Self { crlf: false }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rawget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RawgetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RawgetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RawgetConfig = toml::from_str(&data)?;
    Ok(cfg)
}
