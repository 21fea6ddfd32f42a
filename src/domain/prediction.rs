//! Prediction result types.
//!
//! Represents the output of the admission model and its qualitative band.

use serde::{Deserialize, Serialize};

/// Qualitative band for an admission probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// 80% and above
    VeryHigh,
    /// 60% up to 80%
    High,
    /// 40% up to 60%
    Medium,
    /// Below 40%
    Low,
}

impl Band {
    /// Classify a percentage. Boundaries are closed above, so exactly 80.0
    /// is `VeryHigh`, exactly 60.0 is `High` and exactly 40.0 is `Medium`.
    #[must_use]
    pub fn classify(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::VeryHigh
        } else if percentage >= 60.0 {
            Self::High
        } else if percentage >= 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Get the associated color for display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::VeryHigh => (40, 167, 69), // Green (#28A745)
            Self::High => (255, 193, 7),     // Yellow (#FFC107)
            Self::Medium => (253, 126, 20),  // Orange (#FD7E14)
            Self::Low => (220, 53, 69),      // Red (#DC3545)
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Model output times 100. Not clamped: extrapolating models may land
    /// outside [0, 100].
    pub percentage: f64,

    /// Band derived from `percentage`
    pub band: Band,
}

impl Prediction {
    /// Create a prediction from a raw model output in [0, 1] (nominally).
    #[must_use]
    pub fn from_model_output(raw: f64) -> Self {
        Self::from_percentage(raw * 100.0)
    }

    /// Create a prediction from a percentage.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        Self {
            percentage,
            band: Band::classify(percentage),
        }
    }

    /// Fraction for a progress bar: percentage / 100, clamped to [0, 1].
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_closed_above() {
        assert_eq!(Band::classify(100.0), Band::VeryHigh);
        assert_eq!(Band::classify(80.0), Band::VeryHigh);
        assert_eq!(Band::classify(79.99), Band::High);
        assert_eq!(Band::classify(60.0), Band::High);
        assert_eq!(Band::classify(59.99), Band::Medium);
        assert_eq!(Band::classify(40.0), Band::Medium);
        assert_eq!(Band::classify(39.99), Band::Low);
        assert_eq!(Band::classify(0.0), Band::Low);
        assert_eq!(Band::classify(-5.0), Band::Low);
    }

    #[test]
    fn test_prediction_keeps_out_of_range_percentage() {
        let prediction = Prediction::from_model_output(1.07);
        assert!((prediction.percentage - 107.0).abs() < 1e-9);
        assert_eq!(prediction.band, Band::VeryHigh);
        assert!((prediction.progress_ratio() - 1.0).abs() < f64::EPSILON);

        let negative = Prediction::from_percentage(-3.0);
        assert!((negative.progress_ratio() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_ratio_tracks_percentage() {
        let prediction = Prediction::from_percentage(72.5);
        assert!((prediction.progress_ratio() - 0.725).abs() < 1e-12);
        assert_eq!(prediction.band, Band::High);
    }

    #[test]
    fn test_band_display() {
        assert_eq!(Band::VeryHigh.to_string(), "Very High");
        assert_eq!(Band::Low.to_string(), "Low");
    }
}
