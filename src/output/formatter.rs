use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::catalog::Catalog;
use crate::scoring::{AssessmentResults, Recommendation};

const BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
pub fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Word-wrap text to the given width, preserving existing line breaks.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut wrapped = Vec::new();
    for line in text.lines() {
        let mut current = String::new();
        for word in line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.len() + 1 + word.len() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                wrapped.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        wrapped.push(current);
    }
    wrapped.join("\n")
}

/// Render a 0..=100 score as an ASCII progress bar
/// Format: "[########------------]"
pub fn score_bar(score: f64) -> String {
    let clamped = score.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Qualitative label for a 0..=100 score
pub fn score_label(score: f64) -> &'static str {
    if score >= 85.0 {
        "Excellent"
    } else if score >= 65.0 {
        "Good"
    } else {
        "Needs Development"
    }
}

pub fn recommendation_headline(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Yes => "Excellent Match!",
        Recommendation::Maybe => "Promising Potential",
        Recommendation::No => "Consider Alternatives",
    }
}

/// Format the full results report for terminal display.
pub fn format_results(results: &AssessmentResults, use_colors: bool) -> String {
    let mut out = String::new();

    out.push_str("Your Assessment Results\n");
    out.push_str("=======================\n\n");

    let headline = recommendation_headline(results.recommendation);
    if use_colors {
        let colored = match results.recommendation {
            Recommendation::Yes => headline.green().bold().to_string(),
            Recommendation::Maybe => headline.yellow().bold().to_string(),
            Recommendation::No => headline.red().bold().to_string(),
        };
        out.push_str(&colored);
    } else {
        out.push_str(headline);
    }
    out.push('\n');
    out.push_str(&format!(
        "Overall Confidence: {:.0}/100\n{}\n\n",
        results.overall_confidence,
        score_bar(results.overall_confidence)
    ));

    out.push_str(&section_header("Section Scores", use_colors));
    out.push_str(&score_line("Psychological Fit", results.psych_fit_score, use_colors));
    out.push_str(&score_line("Technical Readiness", results.tech_ready_score, use_colors));
    out.push('\n');

    out.push_str(&section_header("WISCAR Breakdown", use_colors));
    let wiscar = &results.wiscar_scores;
    for (name, score) in [
        ("Will", wiscar.will),
        ("Interest", wiscar.interest),
        ("Skill", wiscar.skill),
        ("Cognitive", wiscar.cognitive),
        ("Ability to Learn", wiscar.ability_to_learn),
        ("Real-world Fit", wiscar.real_world_fit),
    ] {
        out.push_str(&format!("  {:<18} {:>3.0}/100  {}\n", name, score, score_bar(score)));
    }
    out.push('\n');

    out.push_str(&section_header("Career Matches", use_colors));
    out.push_str(&bullet_list(&results.career_matches));
    out.push('\n');

    out.push_str(&section_header("Skill Gaps", use_colors));
    if results.skill_gaps.is_empty() {
        out.push_str("  (none)\n");
    } else {
        out.push_str(&bullet_list(&results.skill_gaps));
    }
    out.push('\n');

    out.push_str(&section_header("Learning Path", use_colors));
    out.push_str(&bullet_list(&results.learning_path));
    out.push('\n');

    out.push_str(&section_header("Next Steps", use_colors));
    for (i, step) in results.next_steps.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, step));
    }

    out
}

/// Format results as pretty-printed JSON for scripting.
pub fn format_results_json(results: &AssessmentResults) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize results to JSON")
}

/// Format the question catalog as one line per question.
/// Columns: id, kind, category, weight.
pub fn format_question_list(catalog: &Catalog, use_colors: bool) -> String {
    catalog
        .questions()
        .iter()
        .map(|q| {
            if use_colors {
                format!(
                    "{:<18} {:<16} {:<13} w={}",
                    q.id.bold(),
                    q.kind.label(),
                    q.category.label().cyan(),
                    q.effective_weight()
                )
            } else {
                format!(
                    "{:<18} {:<16} {:<13} w={}",
                    q.id,
                    q.kind.label(),
                    q.category.label(),
                    q.effective_weight()
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn section_header(title: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", title.bold())
    } else {
        format!("{}\n", title)
    }
}

fn score_line(name: &str, score: f64, use_colors: bool) -> String {
    let label = score_label(score);
    let label = if use_colors {
        if score >= 85.0 {
            label.green().to_string()
        } else if score >= 65.0 {
            label.yellow().to_string()
        } else {
            label.red().to_string()
        }
    } else {
        label.to_string()
    };
    format!(
        "  {:<18} {:>3.0}/100  {}  {}\n",
        name,
        score,
        score_bar(score),
        label
    )
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}\n", item))
        .collect()
}
