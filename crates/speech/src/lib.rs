//! Speech - Text-to-Speech provider abstractions for Taleforge
//!
//! Turns narration and dialogue lines into audio bytes through one of
//! several interchangeable backends.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the synthesizer trait (port)
//! - `providers` module contains concrete implementations (adapters)
//! - `selection` picks exactly one adapter at startup from configuration
//!
//! # Supported Providers
//!
//! - Local synthesis subprocess (Kokoro script)
//! - Play.ht (job-based cloud API)
//! - ElevenLabs (low-latency cloud API)
//! - Hosted inference endpoint (Hugging Face style)
//! - Silent-audio fallback when nothing is configured
//!
//! # Example
//!
//! ```ignore
//! use speech::{SpeechConfig, select_provider};
//!
//! let config = SpeechConfig::default();
//! let synthesizer = select_provider(&config)?;
//! let audio = synthesizer.synthesize("The dragon stirs.", "am_michael", 1.0).await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod selection;
pub mod voices;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::SpeechSynthesizer;
pub use selection::select_provider;
pub use voices::{VoiceGender, VoicePreset};
