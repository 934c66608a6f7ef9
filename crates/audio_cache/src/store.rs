//! Content-addressed artifact store
//!
//! One WAV file per digest of `(text, voice)` under a fixed directory,
//! served statically at `/audio/{hash}.wav`.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tokio::fs;
use tracing::{debug, error, info, instrument, warn};

use crate::error::CacheError;

/// Public URL prefix artifacts are served under
const PUBLIC_PREFIX: &str = "/audio";

/// Content-addressed store for synthesized audio
#[derive(Debug, Clone)]
pub struct AudioCacheStore {
    root: PathBuf,
}

impl AudioCacheStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory artifacts live in
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Digest of a `(text, voice)` pair
    ///
    /// Deterministic: the same pair always yields the same artifact key,
    /// regardless of which provider produced the bytes. The separator keeps
    /// `("ab", "c")` and `("a", "bc")` apart.
    #[must_use]
    pub fn content_hash(text: &str, voice_id: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(text.as_bytes());
        hasher.update(b"|");
        hasher.update(voice_id.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    /// Public reference for a content hash
    #[must_use]
    pub fn reference(hash: &str) -> String {
        format!("{PUBLIC_PREFIX}/{hash}.wav")
    }

    fn artifact_path(&self, hash: &str) -> PathBuf {
        self.root.join(format!("{hash}.wav"))
    }

    /// Look up a previously stored artifact
    ///
    /// Returns the public reference when the artifact exists. Absence is a
    /// normal outcome, not an error.
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = voice_id))]
    pub async fn lookup(&self, text: &str, voice_id: &str) -> Option<String> {
        let hash = Self::content_hash(text, voice_id);
        let path = self.artifact_path(&hash);

        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {
                debug!(hash = %hash, "Audio cache hit");
                Some(Self::reference(&hash))
            },
            _ => None,
        }
    }

    /// Store audio bytes under the pair's content hash
    ///
    /// Directory creation and the keyed write are both idempotent;
    /// re-storing the same pair simply overwrites the artifact in place.
    #[instrument(skip(self, bytes, text), fields(audio_size = bytes.len(), voice = voice_id))]
    pub async fn store(
        &self,
        bytes: &[u8],
        text: &str,
        voice_id: &str,
    ) -> Result<String, CacheError> {
        let hash = Self::content_hash(text, voice_id);
        let path = self.artifact_path(&hash);

        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| CacheError::DirectoryCreation {
                path: self.root.display().to_string(),
                source,
            })?;

        fs::write(&path, bytes)
            .await
            .map_err(|source| CacheError::Write {
                path: path.display().to_string(),
                source,
            })?;

        debug!(hash = %hash, "Stored audio artifact");

        Ok(Self::reference(&hash))
    }

    /// Remove artifacts older than `max_age_days`
    ///
    /// Returns how many were deleted. A file that cannot be inspected or
    /// removed is logged and skipped; it never aborts the sweep. A missing
    /// cache directory sweeps nothing.
    #[instrument(skip(self))]
    pub async fn sweep(&self, max_age_days: u64) -> Result<usize, CacheError> {
        let max_age = Duration::from_secs(max_age_days * 24 * 60 * 60);
        let now = SystemTime::now();
        let mut removed = 0;

        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Cache directory does not exist yet; nothing to sweep");
                return Ok(0);
            },
            Err(source) => {
                return Err(CacheError::Scan {
                    path: self.root.display().to_string(),
                    source,
                });
            },
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    error!("Cache directory listing ended early: {e}");
                    break;
                },
            };

            let path = entry.path();

            let modified = match entry.metadata().await.and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(e) => {
                    error!(path = %path.display(), "Failed to stat cache entry, skipping: {e}");
                    continue;
                },
            };

            let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
            if age <= max_age {
                continue;
            }

            match fs::remove_file(&path).await {
                Ok(()) => {
                    debug!(path = %path.display(), "Removed stale audio artifact");
                    removed += 1;
                },
                Err(e) => {
                    warn!(path = %path.display(), "Failed to remove stale artifact, skipping: {e}");
                },
            }
        }

        if removed > 0 {
            info!(removed, max_age_days, "Audio cache sweep complete");
        }

        Ok(removed)
    }
}
