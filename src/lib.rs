//! # quizgen
//!
//! A textbook-to-quiz service: extract study text from an image, generate
//! quiz questions from it, and grade free-text answers. Each capability has
//! an AI-backed path (the generative-language API) and, for grading and part
//! of generation, a deterministic offline fallback.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Runtime configuration shared across the crate
pub mod config;
/// Client and wire types for the generative-language API
pub mod gemini;
/// For all things related to grading answers
pub mod grade;
/// Prompt templates sent to the generative-language API
pub mod prompts;
/// Quiz data model and question generation
pub mod quiz;
/// The HTTP API surface
pub mod server;
/// Text extraction from textbook images
pub mod vision;
