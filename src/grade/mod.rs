#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Answer-grading components: the deterministic similarity scorer and the
//! AI-backed grading path it substitutes for.

/// AI-backed grading via the generative-language API.
pub mod ai;
/// Grading result and question-type wire model.
pub mod results;
/// The deterministic similarity scorer.
pub mod similarity;

pub use ai::grade_with_model;
pub use results::{GradingResult, QuestionType};
pub use similarity::{ScoreError, evaluate, similarity};
