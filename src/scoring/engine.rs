use std::collections::HashMap;

use anyhow::{bail, Result};

use super::guidance;
use super::results::{AssessmentResults, WiscarScores};
use crate::answers::Answer;
use crate::catalog::{Catalog, Category, Question, QuestionKind, Subcategory};

/// Score used when a WISCAR dimension has no answers, and when a tuned table
/// is hit with an index outside its range.
const DEFAULT_SCORE: f64 = 50.0;

/// Score the complete answer set.
///
/// Pure and deterministic: the result depends only on the catalog and the
/// answers, not on answer order. Answers referencing unknown question ids are
/// silently dropped; when the same question id appears more than once, the
/// last occurrence wins.
///
/// # Errors
///
/// Returns an error when the psychometric or technical section has no
/// resolvable answers at all, since a weighted average over an empty group
/// is undefined and a made-up default would distort the overall confidence.
pub fn compute_results(catalog: &Catalog, answers: &[Answer]) -> Result<AssessmentResults> {
    let mut latest: HashMap<&str, i64> = HashMap::new();
    for answer in answers {
        latest.insert(answer.question_id.as_str(), answer.value);
    }

    let mut psychometric: Vec<(&Question, i64)> = Vec::new();
    let mut technical: Vec<(&Question, i64)> = Vec::new();
    let mut wiscar: Vec<(&Question, i64)> = Vec::new();

    for (id, value) in &latest {
        let Some(question) = catalog.find(id) else {
            continue;
        };
        match question.category {
            Category::Psychometric => psychometric.push((question, *value)),
            Category::Technical => technical.push((question, *value)),
            Category::Wiscar => wiscar.push((question, *value)),
        }
    }

    let Some(psych_fit_score) = weighted_average(&psychometric, psychometric_raw) else {
        bail!("no answers for any psychometric question; the psychometric section cannot be scored");
    };
    let Some(tech_ready_score) = weighted_average(&technical, technical_raw) else {
        bail!("no answers for any technical question; the technical section cannot be scored");
    };
    let wiscar_scores = wiscar_breakdown(&wiscar);

    let overall_confidence =
        ((psych_fit_score + tech_ready_score + wiscar_scores.mean()) / 3.0).round();

    let recommendation = guidance::recommendation(overall_confidence);
    let skill_gaps = guidance::skill_gaps(tech_ready_score, &wiscar_scores);

    Ok(AssessmentResults {
        psych_fit_score,
        tech_ready_score,
        career_matches: guidance::career_matches(overall_confidence, &wiscar_scores),
        learning_path: guidance::learning_path(overall_confidence),
        next_steps: guidance::next_steps(recommendation, &skill_gaps),
        skill_gaps,
        wiscar_scores,
        overall_confidence,
        recommendation,
    })
}

/// Weighted average of raw scores, rounded to the nearest integer.
/// None for an empty group; the caller decides whether that is an error
/// (psychometric/technical) or a default (WISCAR dimensions).
fn weighted_average(group: &[(&Question, i64)], raw: fn(&Question, i64) -> f64) -> Option<f64> {
    if group.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut weight_sum = 0.0;
    for (question, value) in group {
        total += raw(question, *value) * question.effective_weight();
        weight_sum += question.effective_weight();
    }

    Some((total / weight_sum).round())
}

/// Linear rescale of a slider value from its declared bounds to 0..=100.
fn slider_rescale(question: &Question, value: i64) -> f64 {
    let (min, max) = question.slider_bounds();
    ((value - min) as f64 / (max - min) as f64) * 100.0
}

/// Hand-tuned score for a choice index on questions with no objectively
/// correct option. Returns None when the subcategory carries no table, so the
/// caller can fall through to its own default; an index outside a table
/// scores 50.
fn tuned_choice_score(subcategory: Subcategory, index: i64) -> Option<f64> {
    let score = match subcategory {
        // Planned approach scores highest
        Subcategory::Personality => match index {
            0 => 90.0,
            1 => 70.0,
            2 => 40.0,
            3 => 85.0,
            _ => DEFAULT_SCORE,
        },
        // Independent work scores highest
        Subcategory::WorkStyle => match index {
            0 => 85.0,
            1 => 75.0,
            2 => 55.0,
            3 => 80.0,
            _ => DEFAULT_SCORE,
        },
        // "Analyze and try a different approach" scores highest
        Subcategory::Will => match index {
            0 => 20.0,
            1 => 90.0,
            2 => 40.0,
            3 => 85.0,
            _ => DEFAULT_SCORE,
        },
        // "Analyze the landing page" scores highest
        Subcategory::Cognitive => match index {
            0 => 30.0,
            1 => 40.0,
            2 => 95.0,
            3 => 20.0,
            _ => DEFAULT_SCORE,
        },
        // "Pick a product you believe in" scores highest
        Subcategory::RealWorldFit => match index {
            0 => 40.0,
            1 => 95.0,
            2 => 30.0,
            3 => 60.0,
            _ => DEFAULT_SCORE,
        },
        _ => return None,
    };
    Some(score)
}

fn psychometric_raw(question: &Question, value: i64) -> f64 {
    match question.kind {
        QuestionKind::Slider => slider_rescale(question, value),
        QuestionKind::MultipleChoice => match question.subcategory {
            Some(sub @ (Subcategory::Personality | Subcategory::WorkStyle)) => {
                tuned_choice_score(sub, value).unwrap_or(DEFAULT_SCORE)
            }
            _ => 0.0,
        },
        QuestionKind::Scenario => 0.0,
    }
}

fn technical_raw(question: &Question, value: i64) -> f64 {
    match question.kind {
        QuestionKind::Slider => slider_rescale(question, value),
        QuestionKind::MultipleChoice | QuestionKind::Scenario => match question.correct_answer {
            Some(correct) => {
                let chose_correct = usize::try_from(value).map(|v| v == correct).unwrap_or(false);
                if chose_correct {
                    100.0
                } else {
                    0.0
                }
            }
            None => 0.0,
        },
    }
}

fn wiscar_raw(question: &Question, value: i64) -> f64 {
    match question.kind {
        QuestionKind::Slider => slider_rescale(question, value),
        QuestionKind::MultipleChoice | QuestionKind::Scenario => {
            match question.subcategory.and_then(|sub| tuned_choice_score(sub, value)) {
                Some(score) => score,
                // Dimensions without a tuned table score linearly by index.
                None => ((value + 1) as f64 / 4.0) * 100.0,
            }
        }
    }
}

fn wiscar_breakdown(group: &[(&Question, i64)]) -> WiscarScores {
    WiscarScores {
        will: dimension_score(group, Subcategory::Will),
        interest: dimension_score(group, Subcategory::Interest),
        skill: dimension_score(group, Subcategory::Skill),
        cognitive: dimension_score(group, Subcategory::Cognitive),
        ability_to_learn: dimension_score(group, Subcategory::AbilityToLearn),
        real_world_fit: dimension_score(group, Subcategory::RealWorldFit),
    }
}

fn dimension_score(group: &[(&Question, i64)], dimension: Subcategory) -> f64 {
    let members: Vec<(&Question, i64)> = group
        .iter()
        .filter(|(question, _)| question.subcategory == Some(dimension))
        .copied()
        .collect();
    weighted_average(&members, wiscar_raw).unwrap_or(DEFAULT_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Recommendation;

    fn answer(id: &str, value: i64) -> Answer {
        Answer::new(id, value)
    }

    /// Every question answered at its highest-scoring option.
    fn best_answers() -> Vec<Answer> {
        vec![
            answer("psych_1", 10),
            answer("psych_2", 0),
            answer("psych_3", 10),
            answer("psych_4", 0),
            answer("psych_5", 10),
            answer("tech_1", 1),
            answer("tech_2", 10),
            answer("tech_3", 1),
            answer("tech_4", 0),
            answer("tech_5", 10),
            answer("wiscar_will_1", 1),
            answer("wiscar_interest_1", 3),
            answer("wiscar_skill_1", 10),
            answer("wiscar_cognitive_1", 2),
            answer("wiscar_learn_1", 10),
            answer("wiscar_fit_1", 1),
        ]
    }

    fn slider_question() -> Question {
        Catalog::builtin().find("psych_1").unwrap().clone()
    }

    #[test]
    fn test_slider_rescale_endpoints() {
        let question = slider_question();
        assert_eq!(slider_rescale(&question, 1), 0.0);
        assert_eq!(slider_rescale(&question, 10), 100.0);
    }

    #[test]
    fn test_slider_rescale_monotonic() {
        let question = slider_question();
        let mut previous = f64::NEG_INFINITY;
        for value in 1..=10 {
            let score = slider_rescale(&question, value);
            assert!(score > previous);
            previous = score;
        }
    }

    #[test]
    fn test_slider_rescale_linear_midpoint() {
        let question = slider_question();
        // (6 - 1) / 9 * 100
        assert!((slider_rescale(&question, 6) - 55.555).abs() < 0.01);
    }

    #[test]
    fn test_slider_rescale_custom_bounds() {
        let mut question = slider_question();
        question.min = Some(0);
        question.max = Some(4);
        assert_eq!(slider_rescale(&question, 0), 0.0);
        assert_eq!(slider_rescale(&question, 2), 50.0);
        assert_eq!(slider_rescale(&question, 4), 100.0);
    }

    #[test]
    fn test_technical_correct_answer_rule() {
        let question = Catalog::builtin().find("tech_1").unwrap();
        assert_eq!(technical_raw(question, 1), 100.0);
        assert_eq!(technical_raw(question, 0), 0.0);
        assert_eq!(technical_raw(question, -1), 0.0);
    }

    #[test]
    fn test_tuned_table_out_of_range_index() {
        assert_eq!(tuned_choice_score(Subcategory::Will, 9), Some(50.0));
        assert_eq!(tuned_choice_score(Subcategory::Will, -1), Some(50.0));
    }

    #[test]
    fn test_untabled_subcategory_falls_through() {
        assert_eq!(tuned_choice_score(Subcategory::Interest, 1), None);
        let question = Catalog::builtin().find("wiscar_interest_1").unwrap();
        // ((3 + 1) / 4) * 100
        assert_eq!(wiscar_raw(question, 3), 100.0);
        assert_eq!(wiscar_raw(question, 1), 50.0);
    }

    #[test]
    fn test_weighted_aggregation() {
        let catalog = Catalog::builtin();
        let group: Vec<(&Question, i64)> = vec![
            (catalog.find("psych_1").unwrap(), 10), // raw 100, weight 2
            (catalog.find("psych_2").unwrap(), 2),  // raw 40, weight 1.5
        ];
        // (100*2 + 40*1.5) / 3.5 = 74.28.. -> 74
        assert_eq!(weighted_average(&group, psychometric_raw), Some(74.0));
    }

    #[test]
    fn test_best_answers_yield_yes() {
        let results = compute_results(Catalog::builtin(), &best_answers()).unwrap();

        // Psychometric: (100*2 + 90*1.5 + 100*2 + 85*1 + 100*2) / 8.5 = 96.47 -> 96
        assert_eq!(results.psych_fit_score, 96.0);
        assert_eq!(results.tech_ready_score, 100.0);
        assert_eq!(results.wiscar_scores.will, 90.0);
        assert_eq!(results.wiscar_scores.interest, 100.0);
        assert_eq!(results.wiscar_scores.skill, 100.0);
        assert_eq!(results.wiscar_scores.cognitive, 95.0);
        assert_eq!(results.wiscar_scores.ability_to_learn, 100.0);
        assert_eq!(results.wiscar_scores.real_world_fit, 95.0);
        // (96 + 100 + 97) / 3 = 97.67 -> 98
        assert_eq!(results.overall_confidence, 98.0);
        assert_eq!(results.recommendation, Recommendation::Yes);
        assert_eq!(results.career_matches.len(), 4);
        assert_eq!(results.career_matches[0], "Affiliate Marketing Specialist");
        assert!(results.skill_gaps.is_empty());
        assert_eq!(results.learning_path[0], "Advanced Strategies");
        assert_eq!(results.next_steps.len(), 3);
    }

    #[test]
    fn test_mixed_answers_yield_maybe() {
        let mut answers = best_answers();
        let set = |answers: &mut Vec<Answer>, id: &str, value: i64| {
            answers.iter_mut().find(|a| a.question_id == id).unwrap().value = value;
        };
        set(&mut answers, "wiscar_will_1", 3); // 85
        set(&mut answers, "wiscar_interest_1", 1); // 50
        set(&mut answers, "wiscar_skill_1", 6); // 55.55 -> 56
        set(&mut answers, "wiscar_cognitive_1", 1); // 40
        set(&mut answers, "wiscar_learn_1", 6); // 56
        set(&mut answers, "wiscar_fit_1", 2); // 30

        let results = compute_results(Catalog::builtin(), &answers).unwrap();

        // Wiscar mean: (85+50+56+40+56+30)/6 = 52.83 -> 53
        assert_eq!(results.wiscar_scores.mean(), 53.0);
        // (96 + 100 + 53) / 3 = 83
        assert_eq!(results.overall_confidence, 83.0);
        assert_eq!(results.recommendation, Recommendation::Maybe);
        assert_eq!(results.career_matches.len(), 3);
        assert_eq!(
            results.skill_gaps,
            vec![
                "Content creation".to_string(),
                "Analytics and optimization".to_string(),
                "Campaign strategy".to_string(),
            ]
        );
        assert_eq!(
            results.next_steps,
            vec![
                "Complete foundational training courses".to_string(),
                "Practice content writing and video creation".to_string(),
            ]
        );
        assert_eq!(results.learning_path[0], "Intermediate Skills");
    }

    #[test]
    fn test_order_independence() {
        let answers = best_answers();
        let mut reversed = answers.clone();
        reversed.reverse();

        let a = compute_results(Catalog::builtin(), &answers).unwrap();
        let b = compute_results(Catalog::builtin(), &reversed).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_answers_last_wins() {
        let mut answers = best_answers();
        // First a wrong tech answer, later the correct one: later entry wins.
        answers.retain(|a| a.question_id != "tech_1");
        answers.push(answer("tech_1", 3));
        answers.push(answer("tech_1", 1));

        let results = compute_results(Catalog::builtin(), &answers).unwrap();
        assert_eq!(results.tech_ready_score, 100.0);
    }

    #[test]
    fn test_unknown_question_id_ignored() {
        let mut answers = best_answers();
        answers.push(answer("psych_99", 7));

        let with_unknown = compute_results(Catalog::builtin(), &answers).unwrap();
        let without = compute_results(Catalog::builtin(), &best_answers()).unwrap();
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_missing_wiscar_dimension_defaults() {
        let mut answers = best_answers();
        answers.retain(|a| a.question_id != "wiscar_interest_1");

        let results = compute_results(Catalog::builtin(), &answers).unwrap();
        assert_eq!(results.wiscar_scores.interest, 50.0);
    }

    #[test]
    fn test_empty_psychometric_section_errors() {
        let answers: Vec<Answer> = best_answers()
            .into_iter()
            .filter(|a| !a.question_id.starts_with("psych_"))
            .collect();

        let err = compute_results(Catalog::builtin(), &answers).unwrap_err();
        assert!(err.to_string().contains("psychometric"));
    }

    #[test]
    fn test_empty_technical_section_errors() {
        let answers: Vec<Answer> = best_answers()
            .into_iter()
            .filter(|a| !a.question_id.starts_with("tech_"))
            .collect();

        let err = compute_results(Catalog::builtin(), &answers).unwrap_err();
        assert!(err.to_string().contains("technical"));
    }

    #[test]
    fn test_only_unknown_ids_is_an_empty_section() {
        let answers = vec![answer("ghost_1", 5), answer("ghost_2", 5)];
        assert!(compute_results(Catalog::builtin(), &answers).is_err());
    }
}
