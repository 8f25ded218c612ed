use axum::{extract::State, response::Json};
use briefing::AnalysisResult;
use std::sync::Arc;
use tokio::time::Instant;
use uuid::Uuid;

use crate::models::BriefingRequest;
use crate::services::PromptGeneration;
use crate::utils::logging::*;
use crate::utils::{preview, AppError, AppResult};
use crate::AppState;

/// Briefings em branco são rejeitados antes de qualquer processamento
fn require_briefing(request: &BriefingRequest) -> AppResult<()> {
    if request.briefing.trim().is_empty() {
        log_validation_error("briefing", "empty briefing");
        return Err(AppError::ValidationError("Briefing must not be empty".to_string()));
    }
    Ok(())
}

pub async fn analyze_briefing(
    Json(request): Json<BriefingRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let start_time = Instant::now();
    log_request_received("/analyze", "POST");

    require_briefing(&request)?;

    let analysis = briefing::classify(&request.briefing);

    log_request_processed("/analyze", 200, start_time.elapsed().as_millis() as u64);
    Ok(Json(analysis))
}

pub async fn generate_prompt(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BriefingRequest>,
) -> Result<Json<PromptGeneration>, AppError> {
    let start_time = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    log_request_received("/prompt", "POST");

    require_briefing(&request)?;

    log_info(&format!(
        "📝 [{}] mode={:?} briefing=\"{}\"",
        request_id,
        request.mode,
        preview(&request.briefing, 80)
    ));

    // Lida no momento da chamada; o lock não fica preso durante o request remoto
    let api_key = state.credentials.read().await.api_key().map(str::to_string);

    let generation = state
        .prompt_service
        .generate(&request.briefing, request.mode, api_key.as_deref(), &request_id)
        .await;

    log_request_processed("/prompt", 200, start_time.elapsed().as_millis() as u64);
    Ok(Json(generation))
}
