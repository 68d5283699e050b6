#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The HTTP API: text extraction, quiz generation, and answer checking.
//!
//! Backend selection happens here: when a generative-language key is
//! configured the AI paths are used; otherwise answer checking falls back to
//! the deterministic similarity scorer and quiz generation to the rule-based
//! generator. The scorer itself never reads configuration.

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    config::ConfigHandle,
    gemini::GeminiClient,
    grade::{self, QuestionType},
    quiz, vision,
};

/// JSON body for `POST /api/analyze-image`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeImageRequest {
    /// Data URL or remote URL of the textbook image.
    #[serde(default)]
    image_url: Option<String>,
}

/// JSON body for `POST /api/generate-quiz`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateQuizRequest {
    /// Extracted study text to build questions from.
    #[serde(default)]
    text:      Option<String>,
    /// Which kind of quiz to build.
    #[serde(default)]
    quiz_type: Option<String>,
    /// Language of the source text ("ja" or "en").
    #[serde(default)]
    language:  Option<String>,
}

/// JSON body for `POST /api/check-answer`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckAnswerRequest {
    /// The student's submitted answer.
    #[serde(default)]
    user_answer:    Option<String>,
    /// The reference answer to grade against.
    #[serde(default)]
    correct_answer: Option<String>,
    /// Question type, forwarded to the AI grading prompt only.
    #[serde(default)]
    question_type:  Option<String>,
}

/// A JSON error reply paired with its status code.
type ApiError = (StatusCode, Json<Value>);

/// Handler result: a success body or an error reply.
type ApiResult = std::result::Result<Json<Value>, ApiError>;

/// Builds a 400 reply with an error message.
fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

/// Builds a 500 reply carrying the failure chain as details.
fn internal_error(message: &str, err: anyhow::Error) -> ApiError {
    tracing::error!("{message}: {err:#}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message, "details": format!("{err:#}") })),
    )
}

/// Returns the trimmed value of a required field, or a 400 naming it.
fn require<'a>(field: &'a Option<String>, message: &str) -> std::result::Result<&'a str, ApiError> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(bad_request(message)),
    }
}

/// `POST /api/analyze-image`.
async fn analyze_image(
    State(config): State<ConfigHandle>,
    Json(request): Json<AnalyzeImageRequest>,
) -> ApiResult {
    let image_url = require(&request.image_url, "An image URL is required")?;
    let Some(client) = GeminiClient::from_handle(&config) else {
        return Err(bad_request(
            "Image analysis requires a configured generative backend",
        ));
    };

    let text =
        vision::extract_text(&client, &config.http_client(), config.prompts(), image_url)
            .await
            .map_err(|e| internal_error("Could not extract text from the image", e))?;

    Ok(Json(json!({ "success": true, "text": text })))
}

/// `POST /api/generate-quiz`.
async fn generate_quiz(
    State(config): State<ConfigHandle>,
    Json(request): Json<GenerateQuizRequest>,
) -> ApiResult {
    let text = require(&request.text, "Text and a quiz type are required")?;
    let quiz_type = require(&request.quiz_type, "Text and a quiz type are required")?;
    let quiz_type: QuestionType = quiz_type
        .parse()
        .map_err(|_| bad_request("Invalid quiz type"))?;

    let quiz = match GeminiClient::from_handle(&config) {
        Some(client) => quiz::generate::generate_quiz(
            &client,
            config.prompts(),
            text,
            quiz_type,
            request.language.as_deref(),
        )
        .await
        .map_err(|e| internal_error("Quiz generation failed", e))?,
        None => quiz::heuristic::generate_quiz(text, quiz_type)
            .map_err(|e| internal_error("Quiz generation failed", e))?,
    };

    Ok(Json(json!({ "success": true, "quiz": quiz })))
}

/// `POST /api/check-answer`.
async fn check_answer(
    State(config): State<ConfigHandle>,
    Json(request): Json<CheckAnswerRequest>,
) -> ApiResult {
    let user_answer = require(
        &request.user_answer,
        "Both an answer and a correct answer are required",
    )?;
    let correct_answer = require(
        &request.correct_answer,
        "Both an answer and a correct answer are required",
    )?;

    let result = match GeminiClient::from_handle(&config) {
        Some(client) => grade::grade_with_model(
            &client,
            config.prompts(),
            user_answer,
            correct_answer,
            request.question_type.as_deref(),
        )
        .await
        .map_err(|e| internal_error("Grading failed", e))?,
        None => grade::evaluate(user_answer, correct_answer)
            .map_err(|e| bad_request(&e.to_string()))?,
    };

    Ok(Json(json!({ "success": true, "result": result })))
}

/// `GET /healthz`.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Builds the API router with the given configuration injected as state.
pub fn router(config: ConfigHandle) -> Router {
    Router::new()
        .route("/api/analyze-image", post(analyze_image))
        .route("/api/generate-quiz", post(generate_quiz))
        .route("/api/check-answer", post(check_answer))
        .route("/healthz", get(healthz))
        .with_state(config)
}

/// Binds the API on the configured port and serves until shutdown.
pub async fn serve(config: ConfigHandle) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("quizgen API listening on {addr}");
    axum::serve(listener, router(config)).await?;
    Ok(())
}
