//! Application configuration
//!
//! Loaded once at startup from defaults, an optional `config` file, and
//! `TALEFORGE_`-prefixed environment variables, then passed by reference
//! into the services. Nothing reads the environment after startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use speech::SpeechConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Speech provider configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Audio cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Audio cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory cached artifacts are written to and served from
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    /// Artifacts older than this many days are swept
    #[serde(default = "default_retention_days")]
    pub retention_days: u64,

    /// How often the sweep runs, in seconds
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("public/audio")
}

const fn default_retention_days() -> u64 {
    7
}

const fn default_sweep_interval_secs() -> u64 {
    3600
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            retention_days: default_retention_days(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` when a source cannot be read or the
    /// assembled configuration does not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., TALEFORGE_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("TALEFORGE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
