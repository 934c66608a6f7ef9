//! Application layer - narration request orchestration
//!
//! Ties the speech providers and the audio cache together: a request is
//! validated, answered from the cache when possible, synthesized and stored
//! otherwise. Identical `(text, voice)` pairs are synthesized at most once
//! for the lifetime of the cache.

pub mod error;
pub mod request;
pub mod service;

pub use error::ApplicationError;
pub use request::SpeechRequest;
pub use service::{NarrationOutcome, NarrationService};
