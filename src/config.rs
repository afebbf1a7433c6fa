//! Configuration management for vodcast
//!
//! Handles config file loading/saving and catalog URL resolution.
//! Config is stored at ~/.config/vodcast/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::playback::PlayerType;

/// Bundled catalog document URL (the public sample bucket)
pub const DEFAULT_CATALOG_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/cast-videos/f.json";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog document URL override
    pub catalog_url: Option<String>,
    /// Default player (vlc or mpv)
    pub player: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/vodcast/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vodcast").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Resolve the catalog URL with fallback chain:
    /// 1. Environment variable VODCAST_CATALOG_URL
    /// 2. Config file
    /// 3. Bundled default
    ///
    /// Every call site resolves through here, so one URL is pinned for the
    /// whole process; the single-slot catalog store relies on that.
    pub fn catalog_url(&self) -> String {
        if let Ok(url) = std::env::var("VODCAST_CATALOG_URL") {
            return url;
        }

        if let Some(ref url) = self.catalog_url {
            return url.clone();
        }

        DEFAULT_CATALOG_URL.to_string()
    }

    /// Resolve the configured player, defaulting to VLC
    pub fn player_type(&self) -> PlayerType {
        match self.player.as_deref() {
            Some("mpv") => PlayerType::Mpv,
            _ => PlayerType::Vlc,
        }
    }
}
