use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use crate::catalog::{Catalog, QuestionKind};

/// One respondent answer.
///
/// `value` is the slider value for slider questions and the 0-based option
/// index for choice questions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    #[serde(rename = "question")]
    pub question_id: String,
    pub value: i64,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: i64) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

/// On-disk answers file.
///
/// Example YAML:
/// ```yaml
/// answers:
///   - question: psych_1
///     value: 7
///   - question: tech_1
///     value: 1
/// ```
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerFile {
    pub answers: Vec<Answer>,
}

/// Load answers from a YAML file.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is not
/// valid answers YAML.
pub fn load_answers(path: &Path) -> Result<Vec<Answer>> {
    if !path.exists() {
        anyhow::bail!(
            "Answers file not found at {}. Generate a skeleton with `fitcheck template`",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;

    let file: AnswerFile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse answers: invalid YAML in {}", path.display()))?;

    Ok(file.answers)
}

/// Render an answers-file skeleton covering every catalog question.
///
/// Sliders are pre-filled with their lower bound, choice questions with
/// option index 0; each entry carries the prompt and the valid range as a
/// comment so the file can be filled in by hand.
pub fn template(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("# fitcheck answers file. Fill in one value per question.\n");
    out.push_str("# Choice questions take a 0-based option index.\n");
    out.push_str("answers:\n");

    for question in catalog.questions() {
        let hint = match question.kind {
            QuestionKind::Slider => {
                let (min, max) = question.slider_bounds();
                format!("slider {}..={}", min, max)
            }
            QuestionKind::MultipleChoice | QuestionKind::Scenario => {
                format!("option 0..={}", question.option_count().saturating_sub(1))
            }
        };
        let value = match question.kind {
            QuestionKind::Slider => question.slider_bounds().0,
            _ => 0,
        };
        let _ = writeln!(out, "  # {} ({})", question.prompt, hint);
        let _ = writeln!(out, "  - question: {}", question.id);
        let _ = writeln!(out, "    value: {}", value);
    }

    out
}

/// Write the answers template to a file atomically.
pub fn write_template(path: &Path, catalog: &Catalog) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(template(catalog).as_bytes())
        .with_context(|| format!("Failed to write answers template to {}", path.display()))?;

    file.commit().context("Failed to save answers template")?;

    Ok(())
}
