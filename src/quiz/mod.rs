//! Interactive question driver: one question at a time, with back
//! navigation and answer replacement.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

use crate::answers::Answer;
use crate::catalog::{Catalog, Question, QuestionKind};
use crate::output;

/// Outcome of a single question prompt.
#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Value(i64),
    Back,
}

/// Run the interactive assessment and collect one answer per question.
///
/// Navigating back and re-answering replaces the prior answer for that
/// question; the returned list never contains duplicates.
pub fn run_quiz(catalog: &Catalog, use_colors: bool) -> Result<Vec<Answer>> {
    print_intro(catalog, use_colors);
    prompt("Press Enter to start")?;

    let mut answers: Vec<Answer> = Vec::new();
    let mut index = 0;
    while index < catalog.len() {
        let question = &catalog.questions()[index];
        print_question(question, index + 1, catalog.len(), index > 0, use_colors);
        match read_reply(question, index > 0)? {
            Reply::Value(value) => {
                record_answer(&mut answers, &question.id, value);
                index += 1;
            }
            Reply::Back => index -= 1,
        }
    }

    Ok(answers)
}

fn print_intro(catalog: &Catalog, use_colors: bool) {
    let title = "Is Affiliate Marketing Specialist Right for You?";
    println!();
    if use_colors {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
    println!();
    println!(
        "{}",
        wrap_for_terminal(
            "This assessment evaluates your suitability for the affiliate marketing \
             specialist role across three sections: psychometric fit, technical \
             readiness, and the six WISCAR career-readiness dimensions (Will, \
             Interest, Skill, Cognitive ability, Ability to learn, Real-world fit).",
        )
    );
    println!();
    println!(
        "{} questions. Answer sliders with a number in the shown range and choice \
         questions with an option number; enter 'b' to revisit the previous question.",
        catalog.len()
    );
    println!();
}

fn print_question(
    question: &Question,
    number: usize,
    total: usize,
    can_go_back: bool,
    use_colors: bool,
) {
    println!();
    let progress = format!("[{}/{}] {}", number, total, question.category.label());
    if use_colors {
        println!("{}", progress.dimmed());
    } else {
        println!("{}", progress);
    }

    if let Some(ref scenario) = question.scenario {
        println!("{}", wrap_for_terminal(scenario));
    }
    if use_colors {
        println!("{}", wrap_for_terminal(&question.prompt).bold());
    } else {
        println!("{}", wrap_for_terminal(&question.prompt));
    }

    match question.kind {
        QuestionKind::Slider => {
            let (min, max) = question.slider_bounds();
            println!("  (enter a number from {} to {})", min, max);
        }
        QuestionKind::MultipleChoice | QuestionKind::Scenario => {
            if let Some(ref options) = question.options {
                for (i, option) in options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option);
                }
            }
        }
    }
    if can_go_back {
        println!("  (b = previous question)");
    }
}

fn read_reply(question: &Question, can_go_back: bool) -> Result<Reply> {
    loop {
        let input = prompt("> ")?;
        match parse_reply(question, &input, can_go_back) {
            Ok(reply) => return Ok(reply),
            Err(message) => println!("  {}. Try again.", message),
        }
    }
}

/// Parse a line of user input for the given question.
/// Choice questions are entered 1-based and stored 0-based.
fn parse_reply(question: &Question, input: &str, can_go_back: bool) -> Result<Reply, String> {
    let input = input.trim();
    if can_go_back && input.eq_ignore_ascii_case("b") {
        return Ok(Reply::Back);
    }

    match question.kind {
        QuestionKind::Slider => {
            let (min, max) = question.slider_bounds();
            let hint = format!("Enter a number from {} to {}", min, max);
            let value: i64 = input.parse().map_err(|_| hint.clone())?;
            if value < min || value > max {
                return Err(hint);
            }
            Ok(Reply::Value(value))
        }
        QuestionKind::MultipleChoice | QuestionKind::Scenario => {
            let count = question.option_count() as i64;
            let hint = format!("Enter a choice from 1 to {}", count);
            let choice: i64 = input.parse().map_err(|_| hint.clone())?;
            if choice < 1 || choice > count {
                return Err(hint);
            }
            Ok(Reply::Value(choice - 1))
        }
    }
}

/// Replace a prior answer for the question id, or append a new one.
fn record_answer(answers: &mut Vec<Answer>, id: &str, value: i64) {
    match answers.iter_mut().find(|a| a.question_id == id) {
        Some(existing) => existing.value = value,
        None => answers.push(Answer::new(id, value)),
    }
}

/// Prompt with a message and return the trimmed input line.
fn prompt(message: &str) -> Result<String> {
    print!("{} ", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let bytes = std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    if bytes == 0 {
        anyhow::bail!("Input stream closed before the assessment was finished");
    }
    Ok(input.trim().to_string())
}

fn wrap_for_terminal(text: &str) -> String {
    let width = output::get_terminal_width().unwrap_or(78).min(78);
    output::wrap_text(text, width)
}
