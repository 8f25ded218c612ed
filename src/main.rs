/// PromptCraft: briefing de marketing → prompt para geração de imagens
///
/// Arquitetura:
/// - POST /analyze classifica o briefing por palavras-chave (crate briefing)
/// - POST /prompt gera o prompt via OpenAI, com fallback para o template local
/// - /settings/api-key guarda a API key em um arquivo JSON local

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use promptcraft::config::Settings;
use promptcraft::utils::{logging::*, mask_secret, AppError};
use promptcraft::{build_router, services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 🔧 Carregar variáveis de ambiente do arquivo .env (se existir)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Inicializar tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if dotenv_loaded {
        log_info("✅ Arquivo .env carregado com sucesso");
    } else {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // Carregar configurações
    let settings = Settings::new()
        .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    // API key: arquivo local primeiro, OPENAI_API_KEY como semente em memória
    let mut credentials = services::CredentialStore::load(settings.storage.credentials_path.clone())?;
    if !credentials.is_configured() {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                log_info(&format!("🔑 Using OPENAI_API_KEY from environment ({})", mask_secret(key.trim())));
                credentials.seed_in_memory(key);
            }
            _ => {
                log_warning("⚠️ Nenhuma API key configurada. /prompt usará apenas o template até PUT /settings/api-key.");
            }
        }
    }

    let enhancer = services::OpenAIService::new(settings.enhancer.clone())?;

    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        prompt_service: services::PromptService::new(enhancer),
        credentials: Arc::new(RwLock::new(credentials)),
    });

    let app = build_router(app_state);

    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port)).await?;

    log_server_startup(settings.server.port);
    log_server_ready(&settings.server.host, settings.server.port);

    // Graceful shutdown com signal handling
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log_error(&format!("Failed to install Ctrl+C handler: {}", e));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log_error(&format!("Failed to install SIGTERM handler: {}", e));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
