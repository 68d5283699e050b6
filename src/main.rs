#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # quizgen
//!
//! Turn textbook pages into quizzes: extract study text from an image,
//! generate questions from it, and grade free-text answers. Run `serve` for
//! the HTTP API, or use the one-shot subcommands from a terminal.

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use quizgen::{
    config,
    gemini::GeminiClient,
    grade::{self, QuestionType},
    quiz, server, vision,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run the HTTP API
    Serve,
    /// Grade one answer against a reference answer
    Check(String, String),
    /// Generate a quiz from a text file
    Quiz(String, String),
    /// Extract study text from an image URL
    Extract(String),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the submitted answer
    fn user() -> impl Parser<String> {
        positional("ANSWER").help("The submitted answer")
    }

    /// parses the reference answer
    fn correct() -> impl Parser<String> {
        positional("CORRECT").help("The reference correct answer")
    }

    /// parses a path to a text file
    fn file() -> impl Parser<String> {
        positional("FILE").help("Path to a file of study text")
    }

    /// parses a quiz type name
    fn quiz_type() -> impl Parser<String> {
        positional("TYPE").help("Quiz type: vocabulary, word-order, translation, or reading")
    }

    /// parses an image URL or data URL
    fn image() -> impl Parser<String> {
        positional("URL").help("Image URL or data URL of a textbook page")
    }

    let serve = pure(Cmd::Serve)
        .to_options()
        .command("serve")
        .help("Run the quizgen HTTP API");

    let check = construct!(Cmd::Check(user(), correct()))
        .to_options()
        .command("check")
        .help("Grade an answer with the offline similarity scorer");

    let quiz = construct!(Cmd::Quiz(file(), quiz_type()))
        .to_options()
        .command("quiz")
        .help("Generate a quiz from a file of study text");

    let extract = construct!(Cmd::Extract(image()))
        .to_options()
        .command("extract")
        .help("Extract study text from a textbook image");

    let cmd = construct!([serve, check, quiz, extract]);

    cmd.to_options()
        .descr("Textbook-to-quiz toolkit")
        .run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let config = config::ensure_initialized()?;

    match options() {
        Cmd::Serve => server::serve(config).await?,
        Cmd::Check(user_answer, correct_answer) => {
            let result = grade::evaluate(&user_answer, &correct_answer)?;
            println!("{result}");
        }
        Cmd::Quiz(file, quiz_type) => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Could not read {file}"))?;
            let quiz_type: QuestionType = quiz_type.parse()?;

            let quiz = match GeminiClient::from_handle(&config) {
                Some(client) => {
                    quiz::generate::generate_quiz(&client, config.prompts(), &text, quiz_type, None)
                        .await?
                }
                None => quiz::heuristic::generate_quiz(&text, quiz_type)?,
            };
            println!("{}", serde_json::to_string_pretty(&quiz)?);
        }
        Cmd::Extract(image_url) => {
            let client = GeminiClient::from_handle(&config)
                .context("Set GEMINI_API_KEY to extract text from images")?;
            let text =
                vision::extract_text(&client, &config.http_client(), config.prompts(), &image_url)
                    .await?;
            println!("{text}");
        }
    };

    Ok(())
}
