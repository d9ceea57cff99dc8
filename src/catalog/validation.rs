use std::collections::HashSet;

use super::{Catalog, QuestionKind};

/// Validate the question catalog at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, question) in catalog.questions().iter().enumerate() {
        let place = format!("questions[{}] ({})", i, question.id);

        if !seen_ids.insert(question.id.as_str()) {
            errors.push(format!("{}: duplicate question id", place));
        }

        if question.effective_weight() <= 0.0 {
            errors.push(format!(
                "{}: weight must be positive, got {}",
                place,
                question.effective_weight()
            ));
        }

        match question.kind {
            QuestionKind::Slider => {
                if question.options.is_some() {
                    errors.push(format!("{}: slider questions must not have options", place));
                }
                if question.correct_answer.is_some() {
                    errors.push(format!(
                        "{}: slider questions must not have a correct answer",
                        place
                    ));
                }
                let (min, max) = question.slider_bounds();
                if min >= max {
                    errors.push(format!(
                        "{}: slider bounds must satisfy min < max, got {}..={}",
                        place, min, max
                    ));
                }
            }
            QuestionKind::MultipleChoice | QuestionKind::Scenario => {
                let count = question.option_count();
                if count == 0 {
                    errors.push(format!("{}: choice questions need at least one option", place));
                }
                if let Some(correct) = question.correct_answer {
                    if correct >= count {
                        errors.push(format!(
                            "{}: correct answer index {} out of range for {} options",
                            place, correct, count
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
