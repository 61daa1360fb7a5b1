//! # Career Models
//!
//! The [`CareerModel`] trait is the seam where a real recommender would
//! plug in. The shipped [`MockCareerModel`] always answers with the same
//! three careers.

use super::form::CareerProfile;
use serde::{Deserialize, Serialize};

/// One recommended career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPrediction {
    pub career: String,
    /// Match probability in `0.0..=1.0`.
    pub probability: f32,
    pub description: String,
    pub skills_needed: Vec<String>,
    pub growth_rate: String,
}

impl CareerPrediction {
    /// Probability as a whole percentage, e.g. `0.85` -> `85`.
    pub fn match_percent(&self) -> u8 {
        let percent = (self.probability.clamp(0.0, 1.0) * 100.0).round();
        // Clamped above, so the cast cannot truncate.
        percent as u8
    }
}

/// Produces career recommendations for a profile.
pub trait CareerModel: Send + Sync {
    fn predict(&self, profile: &CareerProfile) -> Vec<CareerPrediction>;
}

/// Returns the fixed demo predictions regardless of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCareerModel;

impl CareerModel for MockCareerModel {
    fn predict(&self, _profile: &CareerProfile) -> Vec<CareerPrediction> {
        mock_predictions()
    }
}

pub fn mock_predictions() -> Vec<CareerPrediction> {
    vec![
        prediction(
            "Data Scientist",
            0.85,
            "High aptitude for analytical thinking and problem-solving",
            &["Python", "Machine Learning", "Statistics", "SQL"],
            "22%",
        ),
        prediction(
            "Software Engineer",
            0.78,
            "Strong coding skills and logical reasoning abilities",
            &["Programming", "Algorithms", "System Design", "Databases"],
            "18%",
        ),
        prediction(
            "Product Manager",
            0.72,
            "Good balance of technical and management skills",
            &["Leadership", "Strategic Thinking", "Communication", "Analytics"],
            "15%",
        ),
    ]
}

fn prediction(
    career: &str,
    probability: f32,
    description: &str,
    skills: &[&str],
    growth_rate: &str,
) -> CareerPrediction {
    CareerPrediction {
        career: career.to_string(),
        probability,
        description: description.to_string(),
        skills_needed: skills.iter().map(|s| (*s).to_string()).collect(),
        growth_rate: growth_rate.to_string(),
    }
}
