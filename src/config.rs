//! Application Configuration
//! Window, branding and badge settings loaded from a JSON file.

use crate::data::SubmitPolicy;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "APP_DOWNLOAD_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "app_download.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-tunable settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    /// Product name in the download banner.
    pub app_name: String,
    pub play_store_badge: PathBuf,
    pub app_store_badge: PathBuf,
    pub badge_height: f32,
    pub submit_policy: SubmitPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Tomato App".to_string(),
            window_size: [520.0, 760.0],
            app_name: "Tomato App".to_string(),
            play_store_badge: PathBuf::from("assets/play_store.png"),
            app_store_badge: PathBuf::from("assets/app_store.png"),
            badge_height: 48.0,
            submit_policy: SubmitPolicy::Permissive,
        }
    }
}

impl AppConfig {
    /// Config path from the environment, or the default file name.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load config from `path`. A missing file yields the defaults.
    ///
    /// Relative badge paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut config: AppConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(base) = path.parent() {
            config.play_store_badge = resolve(base, &config.play_store_badge);
            config.app_store_badge = resolve(base, &config.app_store_badge);
        }

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
