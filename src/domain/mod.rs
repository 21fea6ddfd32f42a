//! Domain layer: Core types and logic.
//!
//! This module contains pure Rust types with no I/O.
//! All feature and result types are serializable.

mod applicant;
mod artifact;
mod prediction;

pub use applicant::{ApplicantFeatures, FEATURE_COUNT, FEATURE_NAMES};
pub use artifact::{ArtifactError, ArtifactKind, InferenceError};
pub use prediction::{Band, Prediction};
