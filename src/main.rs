//! stuntcheck - Main CLI Entry Point
//!
//! Prints exactly one JSON document on stdout: the report, or an error
//! envelope with a non-zero exit status. `--help` and `--version` are the
//! exception: clap prints plain text and the process exits 0.
//!
//! `stuntcheck serve` runs the HTTP endpoint instead and only writes to
//! stdout if startup fails.

use std::process::ExitCode;
use stuntcheck::{
    cli::{Args, Commands, Config, ParseOutcome},
    errors::GrowthError,
    execution,
    report::ErrorEnvelope,
    telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::parse_outcome(std::env::args_os()) {
        ParseOutcome::Run(args) => args,
        ParseOutcome::Display(info) => info.exit(),
        ParseOutcome::Invalid(err) => return fail(&err),
    };

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => return fail(&err),
    };

    telemetry::init_logging(args.verbosity(config.default_verbosity()));

    if let Some(Commands::Serve { host, port }) = &args.command {
        return match execution::serve(&args, &config, host.as_deref(), *port).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => fail(&err),
        };
    }

    let report = match execution::run(&args, &config).await {
        Ok(report) => report,
        Err(err) => return fail(&err),
    };

    match report.to_json() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => fail(&GrowthError::from(err)),
    }
}

fn fail(err: &GrowthError) -> ExitCode {
    tracing::error!(kind = ?err.kind(), "{}", err);
    println!("{}", ErrorEnvelope::from(err).to_json());
    ExitCode::FAILURE
}
