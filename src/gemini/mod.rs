//! Gemini generative service
//!
//! Provides the `TextGenerator` implementation used in online mode.

pub mod client;

pub use client::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
