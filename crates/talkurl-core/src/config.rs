use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::composer::DEFAULT_SPECIAL_ROOM_NAMES;

/// Composer configuration loaded from `~/.config/talkurl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Website URL of a session with one `%s` placeholder for its identifier.
    pub session_url_template: String,
    /// Backend that produced the schedule: "PENTABARF", "FRAB", "PRETALX" or "PRETALXDGWK".
    /// Other values fall back to the default URL strategy.
    pub server_backend_type: String,
    /// Rooms whose sessions never get a composed URL (default backend only).
    #[serde(default = "default_special_room_names")]
    pub special_room_names: Vec<String>,
}

fn default_special_room_names() -> Vec<String> {
    DEFAULT_SPECIAL_ROOM_NAMES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            session_url_template: "https://example.org/talk/%s".to_string(),
            server_backend_type: "FRAB".to_string(),
            special_room_names: default_special_room_names(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("talkurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ComposerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ComposerConfig::default();
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

/// Load configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<ComposerConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ComposerConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
