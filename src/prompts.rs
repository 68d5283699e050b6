#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Prompt templates for text extraction, quiz generation, and AI grading.

use serde::{Deserialize, Serialize};

/// Prompt templates sent to the generative-language API.
///
/// Templates use `{PLACEHOLDER}` markers that call sites substitute with
/// `str::replace` before dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptBundle {
    /// Instruction for reading textbook images.
    extract_text:   String,
    /// System wrapper for quiz-generation prompts.
    quiz_system:    String,
    /// Vocabulary question template.
    vocabulary:     String,
    /// Word-order question template.
    word_order:     String,
    /// Translation question template.
    translation:    String,
    /// Reading/pronunciation question template.
    reading:        String,
    /// System wrapper for grading prompts.
    grading_system: String,
    /// Answer-grading template.
    grading:        String,
}

impl Default for PromptBundle {
    fn default() -> Self {
        Self {
            extract_text:   include_str!("prompts/extract_text.md").to_string(),
            quiz_system:    include_str!("prompts/quiz_system.md").to_string(),
            vocabulary:     include_str!("prompts/vocabulary.md").to_string(),
            word_order:     include_str!("prompts/word_order.md").to_string(),
            translation:    include_str!("prompts/translation.md").to_string(),
            reading:        include_str!("prompts/reading.md").to_string(),
            grading_system: include_str!("prompts/grading_system.md").to_string(),
            grading:        include_str!("prompts/grading.md").to_string(),
        }
    }
}

impl PromptBundle {
    /// Returns the image text-extraction instruction.
    pub fn extract_text(&self) -> &str {
        &self.extract_text
    }

    /// Returns the quiz-generation system wrapper (expects `{PROMPT}`).
    pub fn quiz_system(&self) -> &str {
        &self.quiz_system
    }

    /// Returns the vocabulary template (expects `{TEXT}`).
    pub fn vocabulary(&self) -> &str {
        &self.vocabulary
    }

    /// Returns the word-order template (expects `{TEXT}`).
    pub fn word_order(&self) -> &str {
        &self.word_order
    }

    /// Returns the translation template (expects `{TEXT}` and `{DIRECTION}`).
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Returns the reading template (expects `{TEXT}`).
    pub fn reading(&self) -> &str {
        &self.reading
    }

    /// Returns the grading system wrapper (expects `{PROMPT}`).
    pub fn grading_system(&self) -> &str {
        &self.grading_system
    }

    /// Returns the grading template (expects `{QUESTION_TYPE}`,
    /// `{CORRECT_ANSWER}`, and `{USER_ANSWER}`).
    pub fn grading(&self) -> &str {
        &self.grading
    }
}
