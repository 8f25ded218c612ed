use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::models::{ApiKeyRequest, ApiKeyStatus};
use crate::services::CredentialStore;
use crate::utils::logging::*;
use crate::utils::{mask_secret, AppError};
use crate::AppState;

fn status_of(store: &CredentialStore) -> ApiKeyStatus {
    ApiKeyStatus {
        configured: store.is_configured(),
        masked_key: store.api_key().map(mask_secret),
        updated_at: store.updated_at(),
    }
}

pub async fn get_api_key_status(State(state): State<Arc<AppState>>) -> Json<ApiKeyStatus> {
    log_request_received("/settings/api-key", "GET");

    let store = state.credentials.read().await;
    Json(status_of(&store))
}

pub async fn update_api_key(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ApiKeyRequest>,
) -> Result<Json<ApiKeyStatus>, AppError> {
    log_request_received("/settings/api-key", "PUT");

    let mut store = state.credentials.write().await;
    store.set_api_key(&request.api_key).map_err(|e| {
        if let AppError::ValidationError(msg) = &e {
            log_validation_error("apiKey", msg);
        }
        e
    })?;

    Ok(Json(status_of(&store)))
}

pub async fn delete_api_key(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiKeyStatus>, AppError> {
    log_request_received("/settings/api-key", "DELETE");

    let mut store = state.credentials.write().await;
    store.clear()?;

    Ok(Json(status_of(&store)))
}
