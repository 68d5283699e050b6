#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
/// The verdict produced for a single graded answer
pub struct GradingResult {
    /// Whether the answer counts as correct
    #[builder(getter)]
    pub is_correct: bool,
    /// Score in `[0, 100]`
    #[builder(getter)]
    pub score:      u8,
    /// Human-readable feedback shown to the student
    #[builder(getter)]
    pub feedback:   String,
}

impl Display for GradingResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.is_correct { "correct" } else { "incorrect" };
        write!(f, "{} ({}/100): {}", verdict, self.score, self.feedback)
    }
}

/// The kind of quiz question an answer belongs to.
///
/// Forwarded into the AI grading prompt; the similarity scorer never
/// consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// Meaning-of-a-word multiple choice
    Vocabulary,
    /// Reorder shuffled words into the original sentence
    WordOrder,
    /// Translate a sentence
    Translation,
    /// Pronunciation/accent multiple choice
    Reading,
}

impl QuestionType {
    /// Returns the kebab-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Vocabulary => "vocabulary",
            QuestionType::WordOrder => "word-order",
            QuestionType::Translation => "translation",
            QuestionType::Reading => "reading",
        }
    }
}

impl Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vocabulary" => Ok(QuestionType::Vocabulary),
            "word-order" => Ok(QuestionType::WordOrder),
            "translation" => Ok(QuestionType::Translation),
            "reading" => Ok(QuestionType::Reading),
            other => anyhow::bail!("Unknown question type: {other}"),
        }
    }
}
