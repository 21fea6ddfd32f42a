//! Score one applicant without the terminal UI.
//!
//! Usage: score_applicant [GRE TOEFL RATING SOP LOR CGPA RESEARCH]
//!
//! With no arguments the form defaults are scored.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use admission_predictor::application::ArtifactStore;
use admission_predictor::config::AppConfig;
use admission_predictor::domain::{FEATURE_COUNT, FEATURE_NAMES};
use admission_predictor::{ApplicantFeatures, PredictorError};

fn usage() -> String {
    format!(
        "Usage: score_applicant [{}]",
        FEATURE_NAMES
            .iter()
            .map(|n| n.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(" ")
    )
}

fn parse_args(args: &[String]) -> Result<ApplicantFeatures> {
    if args.is_empty() {
        return Ok(ApplicantFeatures::default());
    }
    if args.len() != FEATURE_COUNT {
        bail!("expected {FEATURE_COUNT} values, got {}", args.len());
    }

    let values = args
        .iter()
        .zip(FEATURE_NAMES)
        .map(|(raw, name)| {
            raw.parse::<f64>()
                .with_context(|| format!("{name}: '{raw}' is not a number"))
        })
        .collect::<Result<Vec<f64>>>()?;

    ApplicantFeatures::from_vec(&values).map_err(anyhow::Error::msg)
}

fn score(features: &ApplicantFeatures) -> Result<()> {
    features
        .validate()
        .map_err(|problems| PredictorError::Validation(problems.join("; ")))?;

    let config = AppConfig::from_env();
    let store = ArtifactStore::new(config.artifact_paths());
    let artifacts = store.get_or_load().map_err(PredictorError::from)?;
    let prediction = artifacts
        .prediction_service()
        .predict(features)
        .map_err(PredictorError::from)?;

    println!("{:.1}%", prediction.percentage);
    println!("band: {}", prediction.band);
    println!("model sha256: {}", artifacts.model_fingerprint);
    println!("scaler sha256: {}", artifacts.scaler_fingerprint);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let features = match parse_args(&args) {
        Ok(features) => features,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("{}", usage());
            return ExitCode::from(2);
        }
    };

    match score(&features) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
