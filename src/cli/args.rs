//! Command-line argument parsing for stuntcheck
//!
//! Four positional measurements plus a few flags, or the `serve` subcommand.
//! Parse failures are turned into `GrowthError::Argument` so the binary can
//! report them as JSON.

use crate::errors::GrowthError;
use crate::growth::Gender;
use clap::error::ErrorKind as ClapErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXPECTED_ARGUMENTS: &str =
    "Incorrect number of arguments. Expected: age_months, gender, height_cm, weight_kg";

/// stuntcheck - child growth screening against WHO height-for-age standards
#[derive(Parser, Debug)]
#[command(name = "stuntcheck")]
#[command(version)]
#[command(about = "Screen a child's growth and print a JSON report", long_about = None)]
#[command(allow_negative_numbers = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Args {
    /// Age in whole months
    #[arg(value_name = "AGE_MONTHS", required = true)]
    pub age_months: Option<i64>,

    /// Male or Female
    #[arg(value_name = "GENDER", required = true)]
    pub gender: Option<Gender>,

    /// Height in centimetres
    #[arg(value_name = "HEIGHT_CM", required = true)]
    pub height_cm: Option<f64>,

    /// Weight in kilograms
    #[arg(value_name = "WEIGHT_KG", required = true)]
    pub weight_kg: Option<f64>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip the generative service and use templates only
    #[arg(long, global = true)]
    pub offline: bool,

    /// Verbosity level for stderr logs: -v (info), -vv (debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Serve POST /api/analyze-stunting over HTTP
    Serve {
        /// Listen port (overrides PORT and server.port)
        #[arg(long)]
        port: Option<u16>,

        /// Listen address (overrides server.host)
        #[arg(long)]
        host: Option<String>,
    },
}

/// The four positional measurements, before validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub age_months: i64,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

/// Outcome of parsing the command line
#[derive(Debug)]
pub enum ParseOutcome {
    /// Arguments are usable
    Run(Args),
    /// Help or version was requested; clap prints it and exits
    Display(clap::Error),
    /// Anything else
    Invalid(GrowthError),
}

impl Args {
    /// Parse an argument list, mapping clap failures to argument errors
    pub fn parse_outcome<I, T>(args: I) -> ParseOutcome
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Args::try_parse_from(args) {
            Ok(args) => match args.validate() {
                Ok(()) => ParseOutcome::Run(args),
                Err(err) => ParseOutcome::Invalid(err),
            },
            Err(err) => match err.kind() {
                ClapErrorKind::DisplayHelp
                | ClapErrorKind::DisplayVersion
                | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    ParseOutcome::Display(err)
                }
                _ => ParseOutcome::Invalid(argument_error(&err)),
            },
        }
    }

    /// Measurements are required without a subcommand and refused with one
    pub fn validate(&self) -> Result<(), GrowthError> {
        let any_given = self.age_months.is_some()
            || self.gender.is_some()
            || self.height_cm.is_some()
            || self.weight_kg.is_some();

        match (&self.command, self.measurements()) {
            (Some(_), _) if any_given => Err(GrowthError::Argument(
                "Measurements cannot be combined with a subcommand".to_string(),
            )),
            (None, None) => Err(GrowthError::Argument(EXPECTED_ARGUMENTS.to_string())),
            _ => Ok(()),
        }
    }

    /// All four measurements, if given
    pub fn measurements(&self) -> Option<Measurements> {
        Some(Measurements {
            age_months: self.age_months?,
            gender: self.gender?,
            height_cm: self.height_cm?,
            weight_kg: self.weight_kg?,
        })
    }

    /// Get verbosity level based on flags, falling back to `default`
    pub fn verbosity(&self, default: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => default,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

/// One-line argument error from a clap error
pub fn argument_error(err: &clap::Error) -> GrowthError {
    let rendered = err.to_string();
    let detail = rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("invalid arguments")
        .trim_start_matches("error:")
        .trim();

    let message = match err.kind() {
        ClapErrorKind::MissingRequiredArgument
        | ClapErrorKind::UnknownArgument
        | ClapErrorKind::TooManyValues
        | ClapErrorKind::WrongNumberOfValues => format!("{} ({})", EXPECTED_ARGUMENTS, detail),
        _ => detail.to_string(),
    };
    GrowthError::Argument(message)
}

impl Verbosity {
    /// Parse a configured verbosity name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// tracing filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }
}
