//! Applicant feature types for admission probability prediction.
//!
//! Based on the Graduate Admissions dataset columns the exported model was
//! trained on.

use serde::{Deserialize, Serialize};

/// Number of features the model and scaler expect.
pub const FEATURE_COUNT: usize = 7;

/// Feature names in training order.
/// Order: GRE, TOEFL, University Rating, SOP, LOR, CGPA, Research
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "gre_score",
    "toefl_score",
    "university_rating",
    "sop",
    "lor",
    "cgpa",
    "research",
];

/// Applicant profile read from the form controls.
///
/// Built fresh on every interaction and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplicantFeatures {
    /// GRE score (260-340)
    pub gre: f64,

    /// TOEFL score (0-120)
    pub toefl: f64,

    /// University rating (1-5)
    pub rating: f64,

    /// Statement of purpose strength (1.0-5.0, half points)
    pub sop: f64,

    /// Letter of recommendation strength (1.0-5.0, half points)
    pub lor: f64,

    /// Undergraduate CGPA (6.8-10.0)
    pub cgpa: f64,

    /// Research experience: 0 = no, 1 = yes
    pub research: f64,
}

impl Default for ApplicantFeatures {
    fn default() -> Self {
        Self {
            gre: 320.0,
            toefl: 110.0,
            rating: 3.0,
            sop: 4.0,
            lor: 4.0,
            cgpa: 8.5,
            research: 1.0,
        }
    }
}

impl ApplicantFeatures {
    /// Convert features to a row for the scaler, in training order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.gre,
            self.toefl,
            self.rating,
            self.sop,
            self.lor,
            self.cgpa,
            self.research,
        ]
    }

    /// Create features from a row in training order.
    ///
    /// # Errors
    /// Returns error if the row does not have exactly seven values.
    pub fn from_vec(v: &[f64]) -> Result<Self, String> {
        if v.len() != FEATURE_COUNT {
            return Err(format!(
                "Expected {FEATURE_COUNT} features, got {}",
                v.len()
            ));
        }

        Ok(Self {
            gre: v[0],
            toefl: v[1],
            rating: v[2],
            sop: v[3],
            lor: v[4],
            cgpa: v[5],
            research: v[6],
        })
    }

    /// Validate that all features are within the form's bounds.
    ///
    /// The interactive controls cannot produce out-of-range values; this is
    /// for values arriving from the command line.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(260.0..=340.0).contains(&self.gre) {
            errors.push(format!("GRE score {} out of range [260, 340]", self.gre));
        }
        if !(0.0..=120.0).contains(&self.toefl) {
            errors.push(format!("TOEFL score {} out of range [0, 120]", self.toefl));
        }
        if !(1.0..=5.0).contains(&self.rating) {
            errors.push(format!(
                "University rating {} out of range [1, 5]",
                self.rating
            ));
        }
        if !(1.0..=5.0).contains(&self.sop) {
            errors.push(format!("SOP {} out of range [1.0, 5.0]", self.sop));
        }
        if !(1.0..=5.0).contains(&self.lor) {
            errors.push(format!("LOR {} out of range [1.0, 5.0]", self.lor));
        }
        if !(6.8..=10.0).contains(&self.cgpa) {
            errors.push(format!("CGPA {} out of range [6.8, 10.0]", self.cgpa));
        }
        if self.research != 0.0 && self.research != 1.0 {
            errors.push(format!("Research {} must be 0 or 1", self.research));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
