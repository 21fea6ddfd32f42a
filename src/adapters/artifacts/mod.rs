//! Artifact adapter: Loads the exported model and scaler from JSON.
//!
//! The training pipeline exports:
//! - `admission_model.json`: a dense feed-forward network, one entry per layer
//!   with a `[inputs][units]` kernel, a bias vector and an activation name
//! - `admission_scaler.json`: a fitted `standard` or `min_max` scaler
//!
//! Both files are read once; the parsed structures are validated here so that
//! inference never has to re-check shapes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{ArtifactError, ArtifactKind, InferenceError, FEATURE_COUNT, FEATURE_NAMES};
use crate::ports::{Regressor, Scaler};

/// Upper bound on layers in an exported network. Anything larger is not a
/// tabular regression export.
const MAX_LAYERS: usize = 64;

/// Activation applied after a dense layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Linear,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Relu => x.max(0.0),
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::Tanh => x.tanh(),
        }
    }
}

/// One dense layer as exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedDenseLayer {
    pub activation: Activation,
    /// Kernel in `[inputs][units]` layout.
    pub kernel: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
}

/// Network parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedNetwork {
    #[serde(default)]
    pub name: Option<String>,
    pub input_dim: usize,
    pub layers: Vec<ExportedDenseLayer>,
}

/// Validated dense network ready for inference.
#[derive(Debug, Clone)]
pub struct DenseNetwork {
    input_dim: usize,
    layers: Vec<ExportedDenseLayer>,
}

impl DenseNetwork {
    /// Validate exported parameters.
    ///
    /// # Errors
    /// Returns `ArtifactError::Invalid` if shapes are inconsistent or any
    /// parameter is non-finite.
    pub fn from_exported(exported: ExportedNetwork) -> Result<Self, ArtifactError> {
        let invalid = |reason: String| ArtifactError::Invalid {
            kind: ArtifactKind::Model,
            reason,
        };

        if exported.input_dim == 0 {
            return Err(invalid("input_dim must be positive".into()));
        }
        if exported.layers.is_empty() || exported.layers.len() > MAX_LAYERS {
            return Err(invalid(format!(
                "expected 1..={MAX_LAYERS} layers, got {}",
                exported.layers.len()
            )));
        }

        let mut width = exported.input_dim;
        for (idx, layer) in exported.layers.iter().enumerate() {
            if layer.kernel.len() != width {
                return Err(invalid(format!(
                    "layer {idx}: kernel has {} rows, expected {width}",
                    layer.kernel.len()
                )));
            }
            let units = layer.bias.len();
            if units == 0 {
                return Err(invalid(format!("layer {idx}: bias is empty")));
            }
            if let Some(row) = layer.kernel.iter().position(|r| r.len() != units) {
                return Err(invalid(format!(
                    "layer {idx}: kernel row {row} has {} units, expected {units}",
                    layer.kernel[row].len()
                )));
            }
            let all_finite = layer.bias.iter().all(|v| v.is_finite())
                && layer.kernel.iter().flatten().all(|v| v.is_finite());
            if !all_finite {
                return Err(invalid(format!("layer {idx}: non-finite parameter")));
            }
            width = units;
        }

        Ok(Self {
            input_dim: exported.input_dim,
            layers: exported.layers,
        })
    }

    /// Number of dense layers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            let mut out = layer.bias.clone();
            for (x, row) in activations.iter().zip(&layer.kernel) {
                for (o, w) in out.iter_mut().zip(row) {
                    *o += x * w;
                }
            }
            for o in out.iter_mut() {
                *o = layer.activation.apply(*o);
            }
            activations = out;
        }
        activations
    }
}

impl Regressor for DenseNetwork {
    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn infer(&self, scaled: &[f64]) -> Result<f64, InferenceError> {
        if scaled.len() != self.input_dim {
            return Err(InferenceError::DimensionMismatch {
                stage: ArtifactKind::Model,
                expected: self.input_dim,
                got: scaled.len(),
            });
        }

        // Validation guarantees a non-empty last layer.
        let output = self
            .forward(scaled)
            .first()
            .copied()
            .unwrap_or(f64::NAN);

        if !output.is_finite() {
            return Err(InferenceError::NonFinite {
                stage: ArtifactKind::Model,
            });
        }
        Ok(output)
    }
}

/// Scaler parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportedScaler {
    /// `(x - mean) / scale`
    Standard {
        mean: Vec<f64>,
        scale: Vec<f64>,
        #[serde(default)]
        feature_names: Option<Vec<String>>,
    },
    /// `x * scale + min`
    MinMax {
        min: Vec<f64>,
        scale: Vec<f64>,
        #[serde(default)]
        feature_names: Option<Vec<String>>,
    },
}

/// Validated scaler ready for transforms.
#[derive(Debug, Clone)]
pub struct FittedScaler {
    params: ExportedScaler,
}

impl FittedScaler {
    /// Validate exported parameters.
    ///
    /// # Errors
    /// Returns `ArtifactError::Invalid` on length mismatch, a zero standard
    /// deviation, or non-finite values.
    pub fn from_exported(params: ExportedScaler) -> Result<Self, ArtifactError> {
        let invalid = |reason: String| ArtifactError::Invalid {
            kind: ArtifactKind::Scaler,
            reason,
        };

        let (offset, scale, names) = match &params {
            ExportedScaler::Standard {
                mean,
                scale,
                feature_names,
            } => (mean, scale, feature_names),
            ExportedScaler::MinMax {
                min,
                scale,
                feature_names,
            } => (min, scale, feature_names),
        };

        if offset.is_empty() || offset.len() != scale.len() {
            return Err(invalid(format!(
                "offset/scale lengths {} and {} must match and be non-empty",
                offset.len(),
                scale.len()
            )));
        }
        if !offset.iter().chain(scale).all(|v| v.is_finite()) {
            return Err(invalid("non-finite parameter".into()));
        }
        if matches!(params, ExportedScaler::Standard { .. }) && scale.iter().any(|s| *s == 0.0) {
            return Err(invalid("standard scaler has a zero scale".into()));
        }
        if let Some(names) = names {
            if names.len() != offset.len() {
                return Err(invalid(format!(
                    "{} feature names for {} features",
                    names.len(),
                    offset.len()
                )));
            }
        }

        Ok(Self { params })
    }

    /// Feature names recorded at fit time, if exported.
    #[must_use]
    pub fn feature_names(&self) -> Option<&[String]> {
        match &self.params {
            ExportedScaler::Standard { feature_names, .. }
            | ExportedScaler::MinMax { feature_names, .. } => feature_names.as_deref(),
        }
    }

    /// Short name of the scaler kind, for logs.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self.params {
            ExportedScaler::Standard { .. } => "standard",
            ExportedScaler::MinMax { .. } => "min_max",
        }
    }
}

impl Scaler for FittedScaler {
    fn n_features(&self) -> usize {
        match &self.params {
            ExportedScaler::Standard { mean, .. } => mean.len(),
            ExportedScaler::MinMax { min, .. } => min.len(),
        }
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if row.len() != self.n_features() {
            return Err(InferenceError::DimensionMismatch {
                stage: ArtifactKind::Scaler,
                expected: self.n_features(),
                got: row.len(),
            });
        }

        let scaled: Vec<f64> = match &self.params {
            ExportedScaler::Standard { mean, scale, .. } => row
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(x, (m, s))| (x - m) / s)
                .collect(),
            ExportedScaler::MinMax { min, scale, .. } => row
                .iter()
                .zip(min.iter().zip(scale))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        };

        if scaled.iter().any(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite {
                stage: ArtifactKind::Scaler,
            });
        }
        Ok(scaled)
    }
}

/// Locations of the two artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
}

/// The loaded model/scaler pair with file fingerprints.
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub model: Arc<DenseNetwork>,
    pub scaler: Arc<FittedScaler>,
    /// SHA-256 of the model file
    pub model_fingerprint: String,
    /// SHA-256 of the scaler file
    pub scaler_fingerprint: String,
}

fn sha256_hex_bytes(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn read_artifact(kind: ArtifactKind, path: &Path) -> Result<Vec<u8>, ArtifactError> {
    std::fs::read(path).map_err(|e| ArtifactError::Deserialize {
        kind,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn parse_artifact<T: for<'de> Deserialize<'de>>(
    kind: ArtifactKind,
    path: &Path,
    bytes: &[u8],
) -> Result<T, ArtifactError> {
    serde_json::from_slice(bytes).map_err(|e| ArtifactError::Deserialize {
        kind,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load and validate both artifacts.
///
/// Both files are checked for existence before either is parsed, model first,
/// so a missing model is reported even when the scaler is missing too.
///
/// # Errors
/// - `ArtifactError::Missing` if a file does not exist
/// - `ArtifactError::Deserialize` if a file cannot be read or parsed
/// - `ArtifactError::Invalid` if the parameters are inconsistent, or their
///   widths do not match the seven applicant features
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<LoadedArtifacts, ArtifactError> {
    for (kind, path) in [
        (ArtifactKind::Model, &paths.model),
        (ArtifactKind::Scaler, &paths.scaler),
    ] {
        if !path.exists() {
            tracing::error!("{kind} file not found at {:?}", path);
            return Err(ArtifactError::Missing {
                kind,
                path: path.clone(),
            });
        }
    }

    let model_bytes = read_artifact(ArtifactKind::Model, &paths.model)?;
    let exported: ExportedNetwork = parse_artifact(ArtifactKind::Model, &paths.model, &model_bytes)?;
    let model_name = exported
        .name
        .clone()
        .unwrap_or_else(|| "unnamed".to_string());
    let model = DenseNetwork::from_exported(exported)?;

    let scaler_bytes = read_artifact(ArtifactKind::Scaler, &paths.scaler)?;
    let exported: ExportedScaler =
        parse_artifact(ArtifactKind::Scaler, &paths.scaler, &scaler_bytes)?;
    let scaler = FittedScaler::from_exported(exported)?;

    if scaler.n_features() != FEATURE_COUNT {
        return Err(ArtifactError::Invalid {
            kind: ArtifactKind::Scaler,
            reason: format!(
                "fitted on {} features, expected {FEATURE_COUNT}",
                scaler.n_features()
            ),
        });
    }
    if let Some(names) = scaler.feature_names() {
        if names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(ArtifactError::Invalid {
                kind: ArtifactKind::Scaler,
                reason: format!("feature order {names:?} does not match {FEATURE_NAMES:?}"),
            });
        }
    }
    if model.input_dim() != FEATURE_COUNT {
        return Err(ArtifactError::Invalid {
            kind: ArtifactKind::Model,
            reason: format!(
                "input_dim is {}, expected {FEATURE_COUNT}",
                model.input_dim()
            ),
        });
    }

    let loaded = LoadedArtifacts {
        model: Arc::new(model),
        scaler: Arc::new(scaler),
        model_fingerprint: sha256_hex_bytes(&model_bytes),
        scaler_fingerprint: sha256_hex_bytes(&scaler_bytes),
    };

    tracing::info!(
        "Loaded model '{}' from {:?} (layers={}, sha256={})",
        model_name,
        paths.model,
        loaded.model.depth(),
        loaded.model_fingerprint
    );
    tracing::info!(
        "Loaded {} scaler from {:?} (n_features={}, sha256={})",
        loaded.scaler.kind_name(),
        paths.scaler,
        loaded.scaler.n_features(),
        loaded.scaler_fingerprint
    );

    Ok(loaded)
}
