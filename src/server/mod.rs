//! HTTP mode
//!
//! `POST /api/analyze-stunting` runs the same screening pipeline as the
//! command line and echoes the submitted measurements next to the report.

use crate::errors::{GrowthError, Result};
use crate::execution;
use crate::growth::{Gender, GrowthInput};
use crate::narrative::Narrator;
use crate::report::GrowthReport;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub const ANALYZE_PATH: &str = "/api/analyze-stunting";

/// Request body; every measurement is optional so absence maps to one error
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "childName", default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Success body: the report plus the echoed request fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: GrowthReport,
    #[serde(rename = "childName", default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    pub age: i64,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
}

// --- Error Handling ---
#[derive(Debug)]
pub enum ApiError {
    MissingParameters,
    BadRequest(String),
    Analysis(GrowthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingParameters => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "Missing required parameters" }),
            ),
            ApiError::BadRequest(details) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "Invalid request body", "details": details }),
            ),
            ApiError::Analysis(err) => {
                let status = match err {
                    GrowthError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                warn!(kind = ?err.kind(), "analysis failed: {}", err);
                (
                    status,
                    serde_json::json!({
                        "error": "Analysis failed",
                        "details": err.to_string(),
                        "error_kind": err.kind(),
                    }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

struct ServerState {
    narrator: Narrator,
}

async fn analyze_handler(
    State(state): State<Arc<ServerState>>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> std::result::Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let (Some(age), Some(gender), Some(height), Some(weight)) =
        (request.age, request.gender, request.height, request.weight)
    else {
        return Err(ApiError::MissingParameters);
    };

    let input = GrowthInput::new(age, gender, height, weight).map_err(ApiError::Analysis)?;
    let report = execution::screen(&input, &state.narrator).await;
    info!(status = %report.stunting_status, "analysis served");

    Ok(Json(AnalyzeResponse {
        result: report,
        child_name: request.child_name,
        age,
        gender,
        height,
        weight,
    }))
}

/// Routes with permissive CORS and request tracing
pub fn router(narrator: Narrator) -> Router {
    let state = Arc::new(ServerState { narrator });

    Router::new()
        .route(ANALYZE_PATH, post(analyze_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, narrator: Narrator, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, path = ANALYZE_PATH, offline = narrator.is_offline(), "listening");

    axum::serve(listener, router(narrator))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Bind `addr` and serve until Ctrl-C
pub async fn run_server(addr: SocketAddr, narrator: Narrator) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| GrowthError::Initialization(format!("Failed to bind {}: {}", addr, e)))?;

    serve(listener, narrator, async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
        info!("shutting down");
    })
    .await
}
