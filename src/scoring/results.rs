use serde::Serialize;
use std::fmt;

/// The six WISCAR career-readiness dimensions, each scored 0..=100.
///
/// Serde names match the original assessment's report fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WiscarScores {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognitive: f64,
    #[serde(rename = "abilityToLearn")]
    pub ability_to_learn: f64,
    #[serde(rename = "realWorldFit")]
    pub real_world_fit: f64,
}

impl WiscarScores {
    pub fn values(&self) -> [f64; 6] {
        [
            self.will,
            self.interest,
            self.skill,
            self.cognitive,
            self.ability_to_learn,
            self.real_world_fit,
        ]
    }

    /// Mean across the six dimensions, rounded to the nearest integer.
    pub fn mean(&self) -> f64 {
        (self.values().iter().sum::<f64>() / 6.0).round()
    }
}

/// Overall verdict on career fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recommendation::Yes => "Yes",
            Recommendation::Maybe => "Maybe",
            Recommendation::No => "No",
        };
        f.write_str(s)
    }
}

/// The complete scored assessment, produced once and consumed for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub psych_fit_score: f64,
    pub tech_ready_score: f64,
    pub wiscar_scores: WiscarScores,
    pub overall_confidence: f64,
    pub recommendation: Recommendation,
    pub career_matches: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub learning_path: Vec<String>,
    pub next_steps: Vec<String>,
}
