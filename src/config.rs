//! Runtime configuration read from the environment.
//!
//! Every setting has a fixed default so the binary runs with no environment
//! at all, reading the artifacts relative to the working directory.
//! The defaults are fixed relative paths (`models/admission_model.json`,
//! `models/admission_scaler.json`); the variables below only override them.

use std::path::PathBuf;

use crate::adapters::artifacts::ArtifactPaths;

pub const DEFAULT_MODEL_PATH: &str = "models/admission_model.json";
pub const DEFAULT_SCALER_PATH: &str = "models/admission_scaler.json";
pub const DEFAULT_LOG_FILE: &str = "admission-predictor.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// File when stdout is a terminal, stdout otherwise
    Auto,
    File,
    Stdout,
}

impl LogMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }

    /// Resolve `Auto` against whether stdout is interactive.
    #[must_use]
    pub fn use_file(self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub scaler_path: PathBuf,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            scaler_path: PathBuf::from(DEFAULT_SCALER_PATH),
            log_mode: LogMode::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Read `ADMISSION_MODEL_PATH`, `ADMISSION_SCALER_PATH`,
    /// `ADMISSION_LOG_MODE` and `ADMISSION_LOG_FILE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            model_path: non_empty("ADMISSION_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            scaler_path: non_empty("ADMISSION_SCALER_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.scaler_path),
            log_mode: non_empty("ADMISSION_LOG_MODE")
                .map(|v| LogMode::parse(&v))
                .unwrap_or(defaults.log_mode),
            log_file: non_empty("ADMISSION_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
        }
    }

    #[must_use]
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            model: self.model_path.clone(),
            scaler: self.scaler_path.clone(),
        }
    }
}
