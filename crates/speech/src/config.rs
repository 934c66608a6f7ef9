//! Configuration for speech synthesis
//!
//! All provider activation flags and credentials live here. The struct is
//! deserialized once at process start and never mutated afterwards; services
//! receive it by reference.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for speech synthesis backends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Run the local synthesis script instead of any cloud backend.
    /// When set, this wins over every other activation flag.
    #[serde(default)]
    pub use_local_tts: bool,

    /// Interpreter used to run the local synthesis script
    #[serde(default = "default_python_bin")]
    pub python_bin: PathBuf,

    /// Path to the local synthesis script
    #[serde(default = "default_local_script_path")]
    pub local_script_path: PathBuf,

    /// Use the Play.ht job-based API
    #[serde(default)]
    pub use_playht: bool,

    /// Play.ht API key
    #[serde(default)]
    pub playht_api_key: Option<String>,

    /// Play.ht user id (sent alongside the key)
    #[serde(default)]
    pub playht_user_id: Option<String>,

    /// Use the ElevenLabs low-latency API
    #[serde(default)]
    pub use_elevenlabs: bool,

    /// ElevenLabs API key
    #[serde(default)]
    pub elevenlabs_api_key: Option<String>,

    /// Hosted inference endpoint (fallback cloud backend)
    #[serde(default = "default_inference_url")]
    pub inference_url: String,

    /// Bearer token for the hosted inference endpoint
    #[serde(default)]
    pub inference_token: Option<String>,

    /// Default abstract voice when a request carries an unknown one
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Request timeout in milliseconds for network and subprocess backends
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Sample rate of the silent fallback artifact in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_python_bin() -> PathBuf {
    PathBuf::from("python3")
}

fn default_local_script_path() -> PathBuf {
    PathBuf::from("scripts/kokoro_tts.py")
}

fn default_inference_url() -> String {
    "https://api-inference.huggingface.co/models/hexgrad/Kokoro-82M".to_string()
}

fn default_voice() -> String {
    "am_michael".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_sample_rate() -> u32 {
    24000
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            use_local_tts: false,
            python_bin: default_python_bin(),
            local_script_path: default_local_script_path(),
            use_playht: false,
            playht_api_key: None,
            playht_user_id: None,
            use_elevenlabs: false,
            elevenlabs_api_key: None,
            inference_url: default_inference_url(),
            inference_token: None,
            default_voice: default_voice(),
            timeout_ms: default_timeout_ms(),
            sample_rate: default_sample_rate(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.sample_rate == 0 {
            return Err("Sample rate must be greater than 0".to_string());
        }

        if self.inference_url.is_empty() {
            return Err("Inference endpoint URL must not be empty".to_string());
        }

        Ok(())
    }
}
