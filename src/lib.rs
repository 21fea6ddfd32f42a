//! # Admission Predictor
//!
//! Terminal form that scores graduate admission chances.
//!
//! This crate provides:
//! - Loading of an exported dense regression model and fitted feature scaler
//! - A pure prediction function mapping seven applicant features to a
//!   percentage and a qualitative band
//! - Terminal UI with sliders that re-scores on every change
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (ApplicantFeatures, Prediction, Band, errors)
//! - `ports`: Trait definitions for the scaler and the model
//! - `adapters`: JSON artifact formats implementing the ports
//! - `application`: Artifact caching and the prediction service
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{ApplicantFeatures, Band, Prediction};

/// Result type for predictor operations
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Main error type for the predictor
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("Artifact error: {0}")]
    Artifact(#[from] domain::ArtifactError),

    #[error("Inference failed: {0}")]
    Inference(#[from] domain::InferenceError),

    #[error("Invalid applicant data: {0}")]
    Validation(String),
}
