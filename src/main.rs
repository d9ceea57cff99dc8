use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use fitcheck::answers::Answer;
use fitcheck::catalog::Catalog;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CATALOG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive assessment (default if no subcommand)
    Run {
        /// Print results as JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },
    /// Score a YAML answers file without the interactive flow
    Score {
        /// Path to the answers file
        #[arg(short, long)]
        answers: PathBuf,

        /// Print results as JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },
    /// List the question catalog
    Questions,
    /// Write an answers-file skeleton (stdout if no path is given)
    Template {
        /// Destination file
        path: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "fitcheck")]
#[command(about = "Career-fit self-assessment quiz", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run { json: false });
    let start_time = Instant::now();

    // Validate the embedded catalog at startup
    let catalog = Catalog::builtin();
    if let Err(errors) = fitcheck::catalog::validate_catalog(catalog) {
        eprintln!("Question catalog errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CATALOG);
    }

    if cli.verbose {
        eprintln!("Catalog: {} questions", catalog.len());
    }

    match command {
        Commands::Run { json } => {
            let use_colors = fitcheck::output::should_use_colors();
            let answers = match fitcheck::quiz::run_quiz(catalog, use_colors) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Assessment aborted: {}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            if cli.verbose {
                eprintln!("Collected {} answers in {:?}", answers.len(), start_time.elapsed());
            }

            report(catalog, &answers, json, use_colors, cli.verbose);
        }
        Commands::Score { answers, json } => {
            let loaded = match fitcheck::answers::load_answers(&answers) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Answers error: {}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            if cli.verbose {
                eprintln!("Loaded {} answers from {}", loaded.len(), answers.display());
            }

            let use_colors = fitcheck::output::should_use_colors();
            report(catalog, &loaded, json, use_colors, cli.verbose);
        }
        Commands::Questions => {
            let use_colors = fitcheck::output::should_use_colors();
            println!("{}", fitcheck::output::format_question_list(catalog, use_colors));
        }
        Commands::Template { path } => match path {
            Some(path) => {
                if let Err(e) = fitcheck::answers::write_template(&path, catalog) {
                    eprintln!("Template error: {}", e);
                    std::process::exit(EXIT_IO);
                }
                println!("Wrote answers template to {}", path.display());
            }
            None => {
                print!("{}", fitcheck::answers::template(catalog));
            }
        },
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Score the answers and print the results in the requested format.
fn report(catalog: &Catalog, answers: &[Answer], json: bool, use_colors: bool, verbose: bool) {
    let results = match fitcheck::scoring::compute_results(catalog, answers) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Scoring error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if verbose {
        eprintln!(
            "Scores: psych={:.0} tech={:.0} wiscar-mean={:.0} overall={:.0}",
            results.psych_fit_score,
            results.tech_ready_score,
            results.wiscar_scores.mean(),
            results.overall_confidence
        );
    }

    if json {
        match fitcheck::output::format_results_json(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {}", e);
                std::process::exit(EXIT_IO);
            }
        }
    } else {
        println!();
        println!("{}", fitcheck::output::format_results(&results, use_colors));
    }
}
