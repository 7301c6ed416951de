use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::pipeline::PAGE_SIZE;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "MOVIE_CATALOG_CONFIG";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub catalog: CatalogConfig,
    pub data: DataConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
}

/// Catalog source and paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Movies per page.
    pub page_size: usize,
    /// JSON file to load instead of the built-in catalog.
    pub catalog_file: Option<PathBuf>,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            mouse_enabled: false,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            catalog_file: None,
        }
    }
}

impl CatalogConfig {
    /// Configured page size, with 0 coerced to the default.
    pub fn effective_page_size(&self) -> usize {
        if self.page_size == 0 {
            PAGE_SIZE
        } else {
            self.page_size
        }
    }
}

impl AppConfig {
    /// Load configuration from `$MOVIE_CATALOG_CONFIG` or
    /// `~/.config/movie-catalog/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &std::path::Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("movie-catalog"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|d| d.join("movie-catalog").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
