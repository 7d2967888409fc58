use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for artistly.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (ARTISTLY_* prefix)
/// 3. Config file (~/.config/artistly/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file of artist records. The bundled catalog is used when unset.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/artists.json
    /// - ENV: ARTISTLY_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/artists.json"
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// JSON file with the category list. The bundled list is used when unset.
    #[serde(default)]
    pub categories_path: Option<PathBuf>,

    /// File holding the session and mock accounts.
    ///
    /// Can be set via:
    /// - CLI: --session /path/to/session.json
    /// - ENV: ARTISTLY_SESSION_PATH
    /// - Config: session_path = "/path/to/session.json"
    /// - Default: ~/.local/share/artistly/session.json
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,

    /// Log filter used when RUST_LOG is unset (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            categories_path: None,
            session_path: default_session_path(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("artistly");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_overrides(mut self, catalog: Option<PathBuf>, session: Option<PathBuf>) -> Self {
        if catalog.is_some() {
            self.catalog_path = catalog;
        }
        if let Some(session) = session {
            self.session_path = session;
        }
        self
    }
}

fn default_session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("artistly")
        .join("session.json")
}

fn default_log_level() -> String {
    String::from("warn")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/artistly/config.toml
/// - macOS: ~/Library/Application Support/artistly/config.toml
/// - Windows: %APPDATA%\artistly\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("artistly")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Artistly Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (ARTISTLY_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Artist catalog (JSON array of artist records)
#
# Can also be set via:
# - CLI: artistly --catalog /path/to/artists.json artists
# - Environment: ARTISTLY_CATALOG_PATH=/path/to/artists.json
#
# Default: the catalog bundled with artistly
#catalog_path = "/path/to/artists.json"

# Category list (JSON array of {id, name, icon, description})
#categories_path = "/path/to/categories.json"

# Session and mock account storage
#
# Default: Platform-specific data directory
#session_path = "/path/to/session.json"

# Log level when RUST_LOG is not set
log_level = "warn"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
