//! Audio cache - content-addressed artifact storage for Taleforge
//!
//! Synthesized audio is stored on disk keyed by a digest of the line text
//! and voice id, so a line that was already narrated is never synthesized
//! again. Storage is overwrite-idempotent: concurrent writers racing on the
//! same key are safe, merely wasteful.
//!
//! A periodic [`AudioCacheStore::sweep`] removes artifacts past a retention
//! age; it never aborts on a single bad file.

pub mod duration;
pub mod error;
pub mod store;

pub use duration::{estimate_duration_secs, format_duration};
pub use error::CacheError;
pub use store::AudioCacheStore;
