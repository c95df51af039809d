use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds; bounds the redraw cadence
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How long a toast stays on screen
    #[serde(default = "default_toast_ttl")]
    pub toast_ttl_ms: u64,
}

fn default_tick_rate() -> u64 {
    250
}

fn default_toast_ttl() -> u64 {
    3000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            toast_ttl_ms: default_toast_ttl(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the data directory; defaults to the platform data dir
    #[serde(default)]
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub on_submit: bool,
    #[serde(default)]
    pub sound: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            on_submit: true,
            sound: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: true,
        }
    }
}

impl Config {
    /// Load configuration with layered sources.
    ///
    /// Precedence, lowest to highest: embedded defaults, user config at
    /// `~/.config/enroll/config.toml`, an explicit `--config` file, and
    /// environment variables with the `ENROLL_` prefix (`__` separates
    /// nesting, e.g. `ENROLL_UI__TICK_RATE_MS`).
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let defaults = config::Config::try_from(&Config::default())
            .context("Failed to encode default config")?;

        let mut builder = config::Config::builder().add_source(defaults);

        // The user config may be absent; a file passed on the CLI may not
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("enroll").join("config.toml");
            builder = builder.add_source(config::File::from(user_config).required(false));
        }
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder
            .add_source(
                config::Environment::with_prefix("ENROLL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Failed to apply configuration")
    }

    /// Directory holding the submission store and logs
    pub fn data_path(&self) -> PathBuf {
        match &self.storage.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("enroll"),
        }
    }

    pub fn logs_path(&self) -> PathBuf {
        self.data_path().join("logs")
    }
}
