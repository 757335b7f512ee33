//! stuntcheck - child growth screening
//!
//! Classifies height-for-age against a simplified WHO reference table and
//! attaches an analysis plus recommendations. Text comes from the Gemini API
//! when available and from deterministic templates otherwise.
//!
//! # Architecture
//!
//! - `growth`: pure classification (Z-score, BMI, stunting status)
//! - `narrative`: analysis and recommendations with template fallback
//! - `gemini`: HTTP text generator behind the `TextGenerator` trait
//! - `report`: JSON output and error envelope
//! - `server`: HTTP endpoint over the same pipeline
//! - `cli`, `telemetry`, `execution`: argument contract, logging, pipeline

pub mod errors;
pub mod growth;
pub mod narrative;
pub mod gemini;
pub mod report;
pub mod server;

// Re-export commonly used types
pub use errors::{GrowthError, NarrativeError, Result};

pub mod cli;
pub mod telemetry;

// Shared execution logic for the binary and tests
pub mod execution;
