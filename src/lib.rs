// Biblioteca do serviço PromptCraft
// Expõe módulos para uso em testes e binários

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub prompt_service: services::PromptService,
    pub credentials: Arc<RwLock<services::CredentialStore>>,
}

/// Monta o router com todas as rotas públicas
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health checks
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::status_check))

        // Análise e geração de prompt
        .route("/analyze", post(handlers::analyze_briefing))
        .route("/prompt", post(handlers::generate_prompt))

        // API key do enriquecimento remoto
        .route(
            "/settings/api-key",
            get(handlers::get_api_key_status)
                .put(handlers::update_api_key)
                .delete(handlers::delete_api_key),
        )

        .layer(TraceLayer::new_for_http())
        // O front-end roda em outra origem
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        let settings = config::Settings {
            server: config::ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            enhancer: config::EnhancerSettings {
                // Nada escuta aqui; o modo enhanced cai no template
                api_base: "http://127.0.0.1:9".to_string(),
                ..config::EnhancerSettings::default()
            },
            storage: config::StorageSettings {
                credentials_path: std::env::temp_dir()
                    .join(format!("promptcraft-router-{}", uuid::Uuid::new_v4()))
                    .join("credentials.json")
                    .display()
                    .to_string(),
            },
        };

        let enhancer = services::OpenAIService::with_prompt(
            settings.enhancer.clone(),
            services::EnhancerPromptConfig::fallback(),
        )
        .unwrap();
        let credentials =
            services::CredentialStore::load(settings.storage.credentials_path.clone()).unwrap();

        Arc::new(AppState {
            settings,
            prompt_service: services::PromptService::new(enhancer),
            credentials: Arc::new(RwLock::new(credentials)),
        })
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(build_router(test_state()), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_analyze_returns_analysis() {
        let (status, body) = send(
            build_router(test_state()),
            "POST",
            "/analyze",
            Some(json!({"briefing": "Novidade: curso online de inglês para jovens"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["product"]["category"], "Educacional");
        assert_eq!(body["product"]["subcategory"], "Idiomas");
        assert_eq!(body["targetAudience"], "Jovens adultos (25-35 anos)");
        assert_eq!(body["goal"], "Lançamento");
    }

    #[tokio::test]
    async fn test_blank_briefing_is_rejected() {
        let (status, body) = send(
            build_router(test_state()),
            "POST",
            "/prompt",
            Some(json!({"briefing": "   "})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_prompt_without_key_uses_template() {
        let (status, body) = send(
            build_router(test_state()),
            "POST",
            "/prompt",
            Some(json!({"briefing": "Nova linha de beleza com maquiagem premium para famílias"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "template");
        assert_eq!(body["fallbackReason"], "API key not configured");
        assert!(body["prompt"].as_str().unwrap().contains("Beleza/Cosmético"));
    }

    #[tokio::test]
    async fn test_api_key_lifecycle() {
        let state = test_state();

        let (_, body) = send(build_router(state.clone()), "GET", "/settings/api-key", None).await;
        assert_eq!(body["configured"], false);

        let (status, body) = send(
            build_router(state.clone()),
            "PUT",
            "/settings/api-key",
            Some(json!({"apiKey": "sk-test-123456"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["configured"], true);
        assert_eq!(body["maskedKey"], "**********3456");

        let (status, _) = send(
            build_router(state.clone()),
            "PUT",
            "/settings/api-key",
            Some(json!({"apiKey": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) =
            send(build_router(state.clone()), "DELETE", "/settings/api-key", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["configured"], false);

        let path = state.credentials.read().await.path().to_path_buf();
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
