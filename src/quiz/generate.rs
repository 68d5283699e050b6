#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! AI-backed quiz generation: per-type prompt formatting, model dispatch,
//! and parsing of the model's JSON reply.

use anyhow::{Context, Result, bail, ensure};

use super::{Question, Quiz};
use crate::{
    gemini::{GeminiClient, parse_json_reply},
    grade::QuestionType,
    prompts::PromptBundle,
};

/// Generates a quiz of the given type from extracted study text.
///
/// `language` is the language of the source text; it only affects the
/// translation direction ("ja" translates toward English, anything else
/// toward Japanese).
pub async fn generate_quiz(
    client: &GeminiClient,
    prompts: &PromptBundle,
    text: &str,
    quiz_type: QuestionType,
    language: Option<&str>,
) -> Result<Quiz> {
    ensure!(!text.is_empty(), "Source text is required to generate a quiz");

    let prompt = format_prompt(prompts, text, quiz_type, language);
    let reply = client
        .generate_text(prompt)
        .await
        .context("Quiz generation request to the model failed")?;

    let quiz: Quiz =
        parse_json_reply(&reply).context("Model quiz reply was not a valid question list")?;
    validate_quiz(&quiz, quiz_type)?;
    Ok(quiz)
}

/// Fills in the per-type template and wraps it in the system prompt.
fn format_prompt(
    prompts: &PromptBundle,
    text: &str,
    quiz_type: QuestionType,
    language: Option<&str>,
) -> String {
    let body = match quiz_type {
        QuestionType::Vocabulary => prompts.vocabulary().replace("{TEXT}", text),
        QuestionType::WordOrder => prompts.word_order().replace("{TEXT}", text),
        QuestionType::Translation => {
            let direction = match language {
                Some("ja") => "from Japanese to English",
                _ => "from English to Japanese",
            };
            prompts
                .translation()
                .replace("{DIRECTION}", direction)
                .replace("{TEXT}", text)
        }
        QuestionType::Reading => prompts.reading().replace("{TEXT}", text),
    };

    prompts.quiz_system().replace("{PROMPT}", &body)
}

/// Rejects model replies whose question shapes don't match the quiz type.
fn validate_quiz(quiz: &Quiz, quiz_type: QuestionType) -> Result<()> {
    ensure!(!quiz.questions.is_empty(), "Model produced no questions");

    for question in &quiz.questions {
        let matches = matches!(
            (quiz_type, question),
            (QuestionType::Vocabulary | QuestionType::Reading, Question::Choice { .. })
                | (QuestionType::WordOrder, Question::WordOrder { .. })
                | (QuestionType::Translation, Question::Translation { .. })
        );
        if !matches {
            bail!("Model produced a question shape that does not fit a {quiz_type} quiz");
        }
        if question.correct_answer().is_none() {
            bail!("Model produced a choice question with an out-of-range correct index");
        }
    }

    Ok(())
}
