//! Artifact and inference error types.

use std::path::PathBuf;

/// Which exported artifact an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Model,
    Scaler,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::Scaler => write!(f, "scaler"),
        }
    }
}

/// Error type for loading the model and scaler.
///
/// Every variant is fatal for the process run.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("{kind} file not found: {path:?}")]
    Missing { kind: ArtifactKind, path: PathBuf },

    #[error("Failed to load {kind} from {path:?}: {reason}")]
    Deserialize {
        kind: ArtifactKind,
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid {kind} artifact: {reason}")]
    Invalid { kind: ArtifactKind, reason: String },
}

impl ArtifactError {
    /// The artifact this error is about.
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Missing { kind, .. }
            | Self::Deserialize { kind, .. }
            | Self::Invalid { kind, .. } => *kind,
        }
    }
}

/// Error type for a single prediction. Aborts that interaction only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("{stage} expected {expected} inputs, got {got}")]
    DimensionMismatch {
        stage: ArtifactKind,
        expected: usize,
        got: usize,
    },

    #[error("{stage} produced a non-finite value")]
    NonFinite { stage: ArtifactKind },
}
