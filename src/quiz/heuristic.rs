#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Offline rule-based quiz generation, used when no generative backend is
//! configured.
//!
//! Vocabulary quizzes become cloze questions: a sentence with one word
//! blanked out and distractor words drawn from the rest of the text.
//! Word-order quizzes shuffle a sentence's words. Translation and reading
//! quizzes need a model and are rejected here.

use anyhow::{Result, bail, ensure};
use rand::seq::SliceRandom;

use super::{Question, Quiz};
use crate::grade::QuestionType;

/// Maximum number of questions produced per quiz.
const MAX_QUESTIONS: usize = 5;

/// Minimum word length considered for vocabulary targets.
const MIN_TARGET_LEN: usize = 5;

/// Generates a quiz of the given type from study text without a model.
pub fn generate_quiz(text: &str, quiz_type: QuestionType) -> Result<Quiz> {
    ensure!(!text.is_empty(), "Source text is required to generate a quiz");

    match quiz_type {
        QuestionType::Vocabulary => vocabulary(text),
        QuestionType::WordOrder => word_order(text),
        QuestionType::Translation | QuestionType::Reading => {
            bail!("{quiz_type} quizzes require a configured generative backend")
        }
    }
}

/// Splits study text into trimmed, non-trivial sentences.
fn sentences(text: &str) -> Vec<String> {
    text.split(|c| matches!(c, '.' | '!' | '?' | '。' | '！' | '？' | '\n'))
        .map(str::trim)
        .filter(|s| s.split_whitespace().count() >= 3)
        .map(str::to_string)
        .collect()
}

/// Builds cloze-style vocabulary questions.
fn vocabulary(text: &str) -> Result<Quiz> {
    let sentences = sentences(text);

    // Candidate pool: distinct longer words across the whole text.
    let mut pool: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if word.chars().count() >= MIN_TARGET_LEN
            && word.chars().all(char::is_alphabetic)
            && !pool.iter().any(|p| p.eq_ignore_ascii_case(word))
        {
            pool.push(word.to_string());
        }
    }
    ensure!(pool.len() >= 4, "Not enough distinct words to build vocabulary questions");

    let mut rng = rand::thread_rng();
    let mut questions = Vec::new();

    for sentence in &sentences {
        if questions.len() == MAX_QUESTIONS {
            break;
        }
        let Some(target) = sentence
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| pool.iter().any(|p| p == w))
            .max_by_key(|w| w.chars().count())
        else {
            continue;
        };

        let mut options: Vec<String> = pool
            .iter()
            .filter(|p| p.as_str() != target)
            .cloned()
            .collect();
        options.shuffle(&mut rng);
        options.truncate(3);
        options.push(target.to_string());
        options.shuffle(&mut rng);

        let correct = options
            .iter()
            .position(|o| o == target)
            .expect("target was just inserted");

        questions.push(Question::Choice {
            word: blank_word(sentence, target),
            options,
            correct,
            explanation: Some(sentence.clone()),
        });
    }

    ensure!(!questions.is_empty(), "Not enough text to build vocabulary questions");
    Ok(Quiz { questions })
}

/// Replaces the first whole-word occurrence of `target` with a blank.
///
/// Matching is on whitespace-delimited words (punctuation trimmed), so a
/// target embedded in a longer word, e.g. inside a hyphenated compound,
/// is left intact.
fn blank_word(sentence: &str, target: &str) -> String {
    let mut blanked = false;
    sentence
        .split_whitespace()
        .map(|word| {
            if !blanked && word.trim_matches(|c: char| !c.is_alphanumeric()) == target {
                blanked = true;
                "____"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds word-reordering questions from whole sentences.
fn word_order(text: &str) -> Result<Quiz> {
    let mut rng = rand::thread_rng();
    let mut questions = Vec::new();

    for sentence in sentences(text) {
        if questions.len() == 3 {
            break;
        }
        let words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        if words.len() > 12 {
            continue;
        }

        let mut shuffled = words.clone();
        shuffled.shuffle(&mut rng);
        if shuffled == words {
            // A no-op shuffle would leak the answer.
            shuffled.rotate_left(1);
        }

        questions.push(Question::WordOrder {
            original: sentence.clone(),
            shuffled,
            answer: sentence,
            explanation: None,
        });
    }

    ensure!(!questions.is_empty(), "Not enough text to build word-order questions");
    Ok(Quiz { questions })
}
