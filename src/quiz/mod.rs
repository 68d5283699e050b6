#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Quiz data model and question generation.
//!
//! Question shapes follow the JSON the generation prompts ask the model for;
//! the offline heuristic generator produces the same shapes.

/// AI-backed quiz generation.
pub mod generate;
/// Offline rule-based quiz generation.
pub mod heuristic;

use serde::{Deserialize, Serialize};

pub use crate::grade::QuestionType;

/// A generated quiz: an ordered list of questions of one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    /// The questions making up the quiz.
    pub questions: Vec<Question>,
}

/// One quiz question. The variants carry the per-type JSON shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Question {
    /// Multiple choice over a word (vocabulary and reading quizzes).
    Choice {
        /// The word being asked about.
        word:        String,
        /// The four candidate answers.
        options:     Vec<String>,
        /// Index of the correct option.
        correct:     usize,
        /// Optional explanation shown after grading.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
    /// Reorder shuffled words into the original sentence.
    WordOrder {
        /// The original sentence.
        original:    String,
        /// The sentence's words in shuffled order.
        shuffled:    Vec<String>,
        /// The expected reconstruction (the original sentence).
        answer:      String,
        /// Optional explanation shown after grading.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
    /// Translate a sentence.
    Translation {
        /// The sentence to translate.
        question:    String,
        /// The reference translation.
        answer:      String,
        /// Optional explanation shown after grading.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
}

impl Question {
    /// Returns the reference answer a submission is graded against.
    pub fn correct_answer(&self) -> Option<&str> {
        match self {
            Question::Choice { options, correct, .. } => {
                options.get(*correct).map(String::as_str)
            }
            Question::WordOrder { answer, .. } | Question::Translation { answer, .. } => {
                Some(answer.as_str())
            }
        }
    }
}
