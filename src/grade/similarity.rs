#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The deterministic answer scorer used when no generative backend is
//! configured: normalization, Levenshtein distance, and score banding.

use super::results::GradingResult;

/// Similarity at or above this value counts the answer as correct.
const CORRECT_THRESHOLD: f64 = 0.7;

/// Fixed feedback for an exact match after normalization.
const PERFECT_FEEDBACK: &str = "Correct! Well done.";

/// Errors produced by the scorer's precondition check.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ScoreError {
    /// One or both answers were empty or absent.
    #[error("both a user answer and a correct answer are required")]
    EmptyAnswer,
}

/// Grades `user_answer` against `correct_answer`.
///
/// Pure and deterministic: same inputs always produce the same verdict.
/// Both inputs must be non-empty; callers are expected to reject empty
/// submissions before invoking the scorer.
pub fn evaluate(user_answer: &str, correct_answer: &str) -> Result<GradingResult, ScoreError> {
    if user_answer.is_empty() || correct_answer.is_empty() {
        return Err(ScoreError::EmptyAnswer);
    }

    let user = normalize(user_answer);
    let correct = normalize(correct_answer);

    if user == correct {
        return Ok(GradingResult::builder()
            .is_correct(true)
            .score(100)
            .feedback(PERFECT_FEEDBACK)
            .build());
    }

    let similarity = normalized_similarity(&user, &correct);

    if similarity >= CORRECT_THRESHOLD {
        Ok(GradingResult::builder()
            .is_correct(true)
            .score(band_score(similarity, 100.0))
            .feedback(format!(
                "Almost perfect! The expected answer was \"{correct_answer}\"."
            ))
            .build())
    } else {
        Ok(GradingResult::builder()
            .is_correct(false)
            .score(band_score(similarity, 50.0))
            .feedback(format!(
                "Not quite. The correct answer was \"{correct_answer}\"."
            ))
            .build())
    }
}

/// Computes the similarity of two strings after normalization, in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(&normalize(a), &normalize(b))
}

/// Canonicalizes a string for comparison: trims surrounding whitespace,
/// ASCII-lowercases (non-ASCII scripts pass through unchanged), and strips
/// every occurrence of `. , ! ? ; :`.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Similarity of two already-normalized strings: `1 - distance / longer`.
fn normalized_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (longer, shorter) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if longer.is_empty() {
        return 1.0;
    }

    let distance = levenshtein(longer, shorter);
    1.0 - (distance as f64 / longer.len() as f64)
}

/// Classic Levenshtein distance over Unicode scalar values, computed via
/// dynamic programming: `cell[i][j]` holds the edit distance between the
/// first `i` characters of `a` and the first `j` characters of `b`.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut cell = vec![vec![0usize; a.len() + 1]; b.len() + 1];

    for (j, row) in cell.iter_mut().enumerate() {
        row[0] = j;
    }
    for i in 0..=a.len() {
        cell[0][i] = i;
    }

    for j in 1..=b.len() {
        for i in 1..=a.len() {
            cell[j][i] = if a[i - 1] == b[j - 1] {
                cell[j - 1][i - 1]
            } else {
                1 + cell[j - 1][i - 1].min(cell[j][i - 1]).min(cell[j - 1][i])
            };
        }
    }

    cell[b.len()][a.len()]
}

/// Scales a similarity into an integer score against `ceiling` points.
fn band_score(similarity: f64, ceiling: f64) -> u8 {
    (similarity * ceiling).round() as u8
}
