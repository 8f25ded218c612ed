use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::AppState;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "promptcraft",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Mostra se o enriquecimento remoto está disponível
pub async fn status_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_health_check();

    let api_key_configured = state.credentials.read().await.is_configured();

    Json(json!({
        "service": "promptcraft",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "enhancer": {
            "model": state.settings.enhancer.model,
            "api_base": state.settings.enhancer.api_base,
            "api_key_configured": api_key_configured,
            "mode": if api_key_configured { "enhanced" } else { "template_only" }
        }
    }))
}
