//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! artifact loading and prediction.

mod artifacts;
mod prediction;

pub use artifacts::ArtifactStore;
pub use prediction::PredictionService;
