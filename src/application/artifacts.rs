//! Artifact store: Loads the model/scaler pair once per process.
//!
//! The first successful `get_or_load` reads and validates both files; every
//! later call returns the cached pair without touching the disk.

use std::sync::{Arc, OnceLock};

use crate::adapters::artifacts::{load_artifacts, ArtifactPaths, LoadedArtifacts};
use crate::domain::ArtifactError;

/// Process-lifetime cache for the loaded artifacts.
pub struct ArtifactStore {
    paths: ArtifactPaths,
    loaded: OnceLock<Arc<LoadedArtifacts>>,
}

impl ArtifactStore {
    /// Create an empty store for the given paths. Nothing is read yet.
    #[must_use]
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            paths,
            loaded: OnceLock::new(),
        }
    }

    /// Whether the artifacts have been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// Return the cached artifacts, loading them on first use.
    ///
    /// Failures are not cached; there is no retry either, callers treat an
    /// error here as fatal.
    ///
    /// # Errors
    /// Returns the `ArtifactError` from the first load attempt.
    pub fn get_or_load(&self) -> Result<Arc<LoadedArtifacts>, ArtifactError> {
        if let Some(loaded) = self.loaded.get() {
            return Ok(Arc::clone(loaded));
        }

        tracing::info!("Loading model artifacts...");
        let loaded = Arc::new(load_artifacts(&self.paths)?);

        // Single-threaded startup: if another caller won the race, keep theirs.
        Ok(Arc::clone(self.loaded.get_or_init(|| loaded)))
    }
}
