use serde::{Deserialize, Serialize};

/// How a question is answered.
///
/// Scenario questions are multiple-choice questions framed with narrative
/// context; they are scored the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Slider,
    MultipleChoice,
    Scenario,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Slider => "slider",
            QuestionKind::MultipleChoice => "multiple-choice",
            QuestionKind::Scenario => "scenario",
        }
    }
}

/// Section of the assessment a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Psychometric => "Psychometric",
            Category::Technical => "Technical",
            Category::Wiscar => "WISCAR",
        }
    }
}

/// Finer-grained trait a question probes. The six WISCAR dimensions are a
/// subset; the rest only appear on psychometric questions.
///
/// Serde names match the ids used in the question data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Subcategory {
    #[serde(rename = "interest")]
    Interest,
    #[serde(rename = "personality")]
    Personality,
    #[serde(rename = "motivation")]
    Motivation,
    #[serde(rename = "work_style")]
    WorkStyle,
    #[serde(rename = "analytical")]
    Analytical,
    #[serde(rename = "will")]
    Will,
    #[serde(rename = "skill")]
    Skill,
    #[serde(rename = "cognitive")]
    Cognitive,
    #[serde(rename = "abilityToLearn")]
    AbilityToLearn,
    #[serde(rename = "realWorldFit")]
    RealWorldFit,
}

/// A single assessment question.
///
/// Example YAML:
/// ```yaml
/// - id: tech_1
///   kind: multiple-choice
///   category: technical
///   prompt: "What is a conversion rate in affiliate marketing?"
///   options:
///     - "The rate at which you convert visitors into subscribers"
///     - "The percentage of clicks that result in a desired action"
///   correct_answer: 1
///   weight: 1.5
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    /// Stable unique identifier; answers reference questions by this id.
    pub id: String,

    pub kind: QuestionKind,

    pub category: Category,

    #[serde(default)]
    pub subcategory: Option<Subcategory>,

    pub prompt: String,

    /// Narrative context shown before the prompt (scenario questions only).
    #[serde(default)]
    pub scenario: Option<String>,

    /// Ordered answer options. Present iff the question is not a slider.
    #[serde(default)]
    pub options: Option<Vec<String>>,

    /// Slider lower bound (default 1).
    #[serde(default)]
    pub min: Option<i64>,

    /// Slider upper bound (default 10).
    #[serde(default)]
    pub max: Option<i64>,

    /// Index of the objectively correct option, for knowledge questions.
    #[serde(default)]
    pub correct_answer: Option<usize>,

    /// Contribution weight within the question's aggregation group (default 1).
    #[serde(default)]
    pub weight: Option<f64>,
}

impl Question {
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    /// Declared slider bounds, with the 1..=10 defaults applied.
    pub fn slider_bounds(&self) -> (i64, i64) {
        (self.min.unwrap_or(1), self.max.unwrap_or(10))
    }

    pub fn option_count(&self) -> usize {
        self.options.as_ref().map(|o| o.len()).unwrap_or(0)
    }
}
