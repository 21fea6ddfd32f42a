//! Inference ports: Traits for the scaler and regression model.
//!
//! These traits abstract the exported artifact formats from the application
//! logic.

use crate::domain::InferenceError;

/// Forward transform fitted on the training data.
pub trait Scaler: Send + Sync {
    /// Number of features the scaler was fitted on.
    fn n_features(&self) -> usize;

    /// Transform a single raw row into the model's input space.
    ///
    /// # Errors
    /// Returns `InferenceError::DimensionMismatch` if the row width differs
    /// from `n_features()`.
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError>;
}

/// Trained regression model producing a single scalar.
pub trait Regressor: Send + Sync {
    /// Width of the input row the model accepts.
    fn input_dim(&self) -> usize;

    /// Run inference on one scaled row and return the first output.
    ///
    /// # Errors
    /// Returns `InferenceError::DimensionMismatch` on a wrong row width and
    /// `InferenceError::NonFinite` if the output is NaN or infinite.
    fn infer(&self, scaled: &[f64]) -> Result<f64, InferenceError>;
}
