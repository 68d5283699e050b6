#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! AI-backed grading: formats a grading prompt, sends it through the
//! generative-language client, and parses the model's JSON verdict.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::results::GradingResult;
use crate::{
    gemini::{GeminiClient, parse_json_reply},
    prompts::PromptBundle,
};

/// Raw verdict shape returned by the model before clamping.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelVerdict {
    /// Whether the model judged the answer correct.
    is_correct: bool,
    /// Unclamped score the model assigned.
    score:      i64,
    /// Feedback text from the model.
    feedback:   String,
}

/// Grades an answer with the generative-language API.
///
/// Unlike the similarity fallback this path is non-deterministic; the model
/// is asked to accept any answer whose meaning matches the reference.
pub async fn grade_with_model(
    client: &GeminiClient,
    prompts: &PromptBundle,
    user_answer: &str,
    correct_answer: &str,
    question_type: Option<&str>,
) -> Result<GradingResult> {
    let prompt = prompts
        .grading()
        .replace("{QUESTION_TYPE}", question_type.unwrap_or("unspecified"))
        .replace("{CORRECT_ANSWER}", correct_answer)
        .replace("{USER_ANSWER}", user_answer);
    let prompt = prompts.grading_system().replace("{PROMPT}", &prompt);

    let reply = client
        .generate_text(prompt)
        .await
        .context("Grading request to the model failed")?;

    let verdict: ModelVerdict =
        parse_json_reply(&reply).context("Model grading reply was not a valid verdict")?;

    Ok(GradingResult::builder()
        .is_correct(verdict.is_correct)
        .score(verdict.score.clamp(0, 100) as u8)
        .feedback(verdict.feedback)
        .build())
}
