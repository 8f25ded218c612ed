use tracing::{debug, error, info, warn};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_request_processed(endpoint: &str, status: u16, duration_ms: u64) {
    info!("Request processed: {} - Status: {} - Duration: {}ms",
          endpoint, status, duration_ms);
}

pub fn log_briefing_classified(request_id: &str, category: &str, audience: &str, goal: &str) {
    info!("🧠 Briefing classified [{}]: category={} - audience={} - goal={}",
          request_id, category, audience, goal);
}

pub fn log_enhancer_success(request_id: &str, chars: usize) {
    info!("✨ Remote prompt received [{}]: {} chars", request_id, chars);
}

pub fn log_enhancer_fallback(request_id: &str, reason: &str) {
    warn!("⚠️ Remote enhancement failed [{}], using template: {}", request_id, reason);
}

pub fn log_enhancer_api_error(endpoint: &str, status: Option<u16>, error: &str) {
    error!("Chat completion API error: {} - Status: {:?} - Error: {}", endpoint, status, error);
}

pub fn log_credential_updated(path: &str) {
    info!("🔑 API key stored in {}", path);
}

pub fn log_credential_cleared(path: &str) {
    info!("🗑️ API key removed from {}", path);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 PromptCraft server starting on port {}", port);
}

pub fn log_server_ready(host: &str, port: u16) {
    info!("✅ Server ready and listening on http://{}:{}", host, port);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
