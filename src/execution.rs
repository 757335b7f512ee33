//! Screening pipeline shared by the binary and the tests
//!
//! Order matters: the narrative service is configured before any input is
//! validated or classified, so a missing credential is reported first.

use crate::cli::{Args, Config};
use crate::errors::{GrowthError, Result};
use crate::gemini::GeminiClient;
use crate::growth::{classify, GrowthInput};
use crate::narrative::Narrator;
use crate::report::GrowthReport;
use crate::server;
use tracing::{debug, info};

/// Build the narrator for this run
pub fn build_narrator(config: &Config, offline: bool) -> Result<Narrator> {
    if offline {
        info!("offline mode, narrative from templates only");
        return Ok(Narrator::offline());
    }

    let api_key = config.resolve_api_key()?;
    let client = GeminiClient::new(config.gemini_config(api_key))?;
    debug!(model = client.model(), base_url = client.base_url(), "gemini client ready");
    Ok(Narrator::new(Box::new(client)))
}

/// Classify `input` and attach narrative
pub async fn screen(input: &GrowthInput, narrator: &Narrator) -> GrowthReport {
    let result = classify(input);
    info!(
        z_score = result.z_score,
        bmi = result.bmi,
        status = %result.status,
        reference_age = result.reference.age_months,
        "classified"
    );

    let narrative = narrator.narrate(input, &result).await;
    GrowthReport::new(&result, narrative)
}

/// Full run for parsed arguments
pub async fn run(args: &Args, config: &Config) -> Result<GrowthReport> {
    let narrator = build_narrator(config, args.offline)?;
    let m = args.measurements().ok_or_else(|| {
        GrowthError::Argument("Expected: age_months, gender, height_cm, weight_kg".to_string())
    })?;
    let input = GrowthInput::new(m.age_months, m.gender, m.height_cm, m.weight_kg)?;
    Ok(screen(&input, &narrator).await)
}

/// HTTP mode; the credential is checked before the port is bound
pub async fn serve(
    args: &Args,
    config: &Config,
    host: Option<&str>,
    port: Option<u16>,
) -> Result<()> {
    let narrator = build_narrator(config, args.offline)?;
    let addr = config.server_addr(host, port)?;
    server::run_server(addr, narrator).await
}
