//! Prediction service: Runs one applicant through scaler and model.
//!
//! This service coordinates:
//! - Building the feature row in training order
//! - The scaler's forward transform
//! - Model inference
//! - Conversion to a percentage and band

use std::sync::Arc;

use crate::adapters::artifacts::{DenseNetwork, FittedScaler, LoadedArtifacts};
use crate::domain::{ApplicantFeatures, InferenceError, Prediction};
use crate::ports::{Regressor, Scaler};

/// Service for scoring applicants against the loaded artifacts.
///
/// Holds shared, read-only handles; calling `predict` never mutates them, so
/// identical inputs always give identical outputs.
pub struct PredictionService<M, S>
where
    M: Regressor,
    S: Scaler,
{
    model: Arc<M>,
    scaler: Arc<S>,
}

impl<M, S> Clone for PredictionService<M, S>
where
    M: Regressor,
    S: Scaler,
{
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            scaler: Arc::clone(&self.scaler),
        }
    }
}

impl<M, S> PredictionService<M, S>
where
    M: Regressor,
    S: Scaler,
{
    /// Create a new prediction service.
    pub fn new(model: Arc<M>, scaler: Arc<S>) -> Self {
        Self { model, scaler }
    }

    /// Predict the admission probability for one applicant.
    ///
    /// No range checks are made here; the form controls bound the inputs.
    /// The percentage is not clamped.
    ///
    /// # Errors
    /// Returns `InferenceError` if the transform or inference fails. The
    /// artifacts are unaffected, so the next call can still succeed.
    pub fn predict(&self, features: &ApplicantFeatures) -> Result<Prediction, InferenceError> {
        let row = features.to_vec();
        let scaled = self.scaler.transform(&row)?;
        let raw = self.model.infer(&scaled)?;
        let prediction = Prediction::from_model_output(raw);

        tracing::debug!(
            "Prediction: raw={:.6}, percentage={:.2}, band={}",
            raw,
            prediction.percentage,
            prediction.band
        );

        Ok(prediction)
    }
}

impl LoadedArtifacts {
    /// Prediction service sharing this pair's handles.
    #[must_use]
    pub fn prediction_service(&self) -> PredictionService<DenseNetwork, FittedScaler> {
        PredictionService::new(Arc::clone(&self.model), Arc::clone(&self.scaler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::artifacts::{load_artifacts, ArtifactPaths};
    use crate::domain::{ArtifactKind, Band};
    use std::path::PathBuf;

    fn create_test_service() -> PredictionService<DenseNetwork, FittedScaler> {
        let loaded = load_artifacts(&ArtifactPaths {
            model: PathBuf::from("models/admission_model.json"),
            scaler: PathBuf::from("models/admission_scaler.json"),
        })
        .expect("sample artifacts should load");
        loaded.prediction_service()
    }

    /// Model returning a fixed raw value regardless of input.
    struct ConstantModel(f64);

    impl Regressor for ConstantModel {
        fn input_dim(&self) -> usize {
            7
        }

        fn infer(&self, _scaled: &[f64]) -> Result<f64, InferenceError> {
            if self.0.is_finite() {
                Ok(self.0)
            } else {
                Err(InferenceError::NonFinite {
                    stage: ArtifactKind::Model,
                })
            }
        }
    }

    struct PassThroughScaler;

    impl Scaler for PassThroughScaler {
        fn n_features(&self) -> usize {
            7
        }

        fn transform(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError> {
            Ok(row.to_vec())
        }
    }

    #[test]
    fn test_default_applicant_is_deterministic() {
        let service = create_test_service();
        let features = ApplicantFeatures::default();

        let first = service.predict(&features).expect("predict");
        let second = service.predict(&features).expect("predict");

        assert!(first.percentage.is_finite());
        assert_eq!(first.percentage.to_bits(), second.percentage.to_bits());
        assert_eq!(first.band, second.band);
    }

    #[test]
    fn test_bounds_of_every_input_give_finite_output() {
        let service = create_test_service();
        let lows = ApplicantFeatures {
            gre: 260.0,
            toefl: 0.0,
            rating: 1.0,
            sop: 1.0,
            lor: 1.0,
            cgpa: 6.8,
            research: 0.0,
        };
        let highs = ApplicantFeatures {
            gre: 340.0,
            toefl: 120.0,
            rating: 5.0,
            sop: 5.0,
            lor: 5.0,
            cgpa: 10.0,
            research: 1.0,
        };

        for features in [lows, ApplicantFeatures::default(), highs] {
            let prediction = service.predict(&features).expect("predict");
            assert!(prediction.percentage.is_finite());
            assert_eq!(prediction.band, Band::classify(prediction.percentage));
        }
    }

    #[test]
    fn test_stronger_profile_scores_higher() {
        let service = create_test_service();
        let weak = ApplicantFeatures {
            gre: 290.0,
            toefl: 95.0,
            rating: 1.0,
            sop: 2.0,
            lor: 2.0,
            cgpa: 7.2,
            research: 0.0,
        };
        let strong = ApplicantFeatures {
            gre: 338.0,
            toefl: 118.0,
            rating: 5.0,
            sop: 5.0,
            lor: 5.0,
            cgpa: 9.8,
            research: 1.0,
        };

        let weak = service.predict(&weak).expect("predict");
        let strong = service.predict(&strong).expect("predict");
        assert!(strong.percentage > weak.percentage);
    }

    #[test]
    fn test_raw_output_is_scaled_to_percentage_unclamped() {
        let service = PredictionService::new(
            Arc::new(ConstantModel(1.25)),
            Arc::new(PassThroughScaler),
        );
        let prediction = service
            .predict(&ApplicantFeatures::default())
            .expect("predict");
        assert!((prediction.percentage - 125.0).abs() < 1e-9);
        assert_eq!(prediction.band, Band::VeryHigh);
        assert!((prediction.progress_ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inference_error_propagates() {
        let service = PredictionService::new(
            Arc::new(ConstantModel(f64::NAN)),
            Arc::new(PassThroughScaler),
        );
        let err = service
            .predict(&ApplicantFeatures::default())
            .expect_err("must fail");
        assert_eq!(
            err,
            InferenceError::NonFinite {
                stage: ArtifactKind::Model
            }
        );
    }
}
