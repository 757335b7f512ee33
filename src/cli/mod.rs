//! CLI module for stuntcheck
//!
//! Handles command-line argument parsing and configuration management.

pub mod args;
pub mod config;

pub use args::{argument_error, Args, Commands, Measurements, ParseOutcome, Verbosity};
pub use config::Config;
