//! API handlers

use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::{Result, ShieldError};
use crate::scoring::{AnalysisType, AnalysisVerdict, Analyzer};

/// Shared application state
pub struct AppState {
    pub analyzer: Analyzer,
}

/// POST /analyze/message body
#[derive(Debug, Deserialize)]
pub struct MessageAnalysisRequest {
    pub message: String,
    pub sender_phone: Option<String>,
}

/// POST /analyze/phone body
#[derive(Debug, Deserialize)]
pub struct PhoneCheckRequest {
    pub phone_number: String,
}

/// POST /analyze/url body
#[derive(Debug, Deserialize)]
pub struct UrlCheckRequest {
    pub url: String,
}

/// GET /health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// GET / - Service banner
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "shield-rs fraud detection API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "active",
        "features": [
            "Message analysis (keywords, links, phone numbers, urgency and payment language)",
            "Phone number format and suspicious prefix check",
            "URL protocol, suspicious domain and raw IP check"
        ],
        "endpoints": [
            "POST /analyze/message",
            "POST /analyze/phone",
            "POST /analyze/url",
            "GET /health"
        ]
    }))
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /analyze/message - Message fraud analysis
pub async fn analyze_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MessageAnalysisRequest>,
) -> Result<Json<AnalysisVerdict>> {
    let verdict = run_analysis(state, AnalysisType::Message, move |analyzer| {
        analyzer.analyze_message(&req.message, req.sender_phone.as_deref())
    })
    .await?;

    Ok(Json(verdict))
}

/// POST /analyze/phone - Phone number risk analysis
pub async fn analyze_phone(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PhoneCheckRequest>,
) -> Result<Json<AnalysisVerdict>> {
    let verdict = run_analysis(state, AnalysisType::Phone, move |analyzer| {
        analyzer.analyze_phone(&req.phone_number)
    })
    .await?;

    Ok(Json(verdict))
}

/// POST /analyze/url - URL safety analysis
pub async fn analyze_url(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UrlCheckRequest>,
) -> Result<Json<AnalysisVerdict>> {
    let verdict = run_analysis(state, AnalysisType::Url, move |analyzer| {
        analyzer.analyze_url(&req.url)
    })
    .await?;

    Ok(Json(verdict))
}

/// Run a scoring closure off the async runtime.
///
/// A panic inside the closure fails the analysis as a whole; no partial
/// result is returned.
pub(crate) async fn run_analysis<F>(
    state: Arc<AppState>,
    kind: AnalysisType,
    analyze: F,
) -> Result<AnalysisVerdict>
where
    F: FnOnce(&Analyzer) -> AnalysisVerdict + Send + 'static,
{
    let verdict = tokio::task::spawn_blocking(move || analyze(&state.analyzer))
        .await
        .map_err(|e| {
            let detail = if e.is_panic() {
                panic_message(e.into_panic())
            } else {
                e.to_string()
            };
            error!(analysis_type = %kind, "Analysis failed: {}", detail);
            ShieldError::analysis(kind, detail)
        })?;

    info!(
        analysis_type = %kind,
        risk_score = verdict.risk_score,
        is_fraud = verdict.is_fraud,
        "Analysis served"
    );

    Ok(verdict)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown error".to_string()
    }
}
