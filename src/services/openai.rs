use briefing::AnalysisResult;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

use crate::config::EnhancerSettings;
use crate::services::enhancer_prompt::EnhancerPromptConfig;
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

/// Falhas do enriquecimento remoto; todas levam ao fallback do template
#[derive(Debug, Error)]
pub enum EnhancerError {
    /// Nenhuma API key configurada (nenhuma requisição é feita)
    #[error("API key not configured")]
    MissingCredential,

    /// Erro de transporte HTTP
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Status não-2xx
    #[error("Chat completion API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Resposta sem `choices[0].message.content` utilizável
    #[error("Malformed chat completion response: {0}")]
    MalformedResponse(String),
}

/// Cliente do endpoint de chat completion usado para enriquecer o prompt
#[derive(Clone)]
pub struct OpenAIService {
    client: Client,
    settings: EnhancerSettings,
    prompt: EnhancerPromptConfig,
}

impl OpenAIService {
    /// Cria o serviço carregando as instruções de `settings.prompt_file`
    pub fn new(settings: EnhancerSettings) -> AppResult<Self> {
        let prompt = EnhancerPromptConfig::load_or_fallback(&settings.prompt_file);
        Self::with_prompt(settings, prompt)
    }

    pub fn with_prompt(settings: EnhancerSettings, prompt: EnhancerPromptConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        log_info(&format!(
            "OpenAI enhancer configured: model={} base={}",
            settings.model, settings.api_base
        ));

        Ok(Self {
            client,
            settings,
            prompt,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.settings.api_base.trim_end_matches('/'))
    }

    /// Corpo da requisição de chat completion
    pub fn request_body(&self, briefing: &str, analysis: &AnalysisResult) -> Value {
        json!({
            "model": self.settings.model,
            "messages": [
                {"role": "system", "content": self.prompt.system_message()},
                {"role": "user", "content": self.prompt.user_message(briefing, analysis)}
            ],
            "temperature": self.settings.temperature,
            "max_tokens": self.settings.max_tokens
        })
    }

    /// Pede ao modelo um prompt enriquecido para o briefing
    ///
    /// A API key é lida pelo chamador no momento da chamada; este serviço
    /// apenas a anexa ao header `Authorization`.
    pub async fn enhance_prompt(
        &self,
        api_key: Option<&str>,
        briefing: &str,
        analysis: &AnalysisResult,
    ) -> Result<String, EnhancerError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(EnhancerError::MissingCredential)?;

        let url = self.completions_url();

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(briefing, analysis))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log_enhancer_api_error(&url, Some(status.as_u16()), &body);
            return Err(EnhancerError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let json_response: Value = serde_json::from_str(&body)
            .map_err(|e| EnhancerError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        let content = json_response
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|msg| msg.get("content"))
            .and_then(|c| c.as_str())
            .map(str::trim)
            .ok_or_else(|| EnhancerError::MalformedResponse("missing choices[0].message.content".to_string()))?;

        if content.is_empty() {
            return Err(EnhancerError::MalformedResponse("empty content".to_string()));
        }

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn service_for(server: &MockServer) -> OpenAIService {
        let settings = EnhancerSettings {
            api_base: server.base_url(),
            ..EnhancerSettings::default()
        };
        OpenAIService::with_prompt(settings, EnhancerPromptConfig::fallback()).unwrap()
    }

    fn sample() -> (&'static str, AnalysisResult) {
        let briefing = "Novo aplicativo de meditação para profissionais estressados no trabalho.";
        (briefing, briefing::classify(briefing))
    }

    #[tokio::test]
    async fn test_enhance_returns_trimmed_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("Authorization", "Bearer sk-test")
                    .body_contains("gpt-4o-mini")
                    .body_contains("Aplicativo/Software");
                then.status(200).json_body(json!({
                    "choices": [
                        {"message": {"role": "assistant", "content": "  A calm workspace at dawn  "}}
                    ]
                }));
            })
            .await;

        let (briefing, analysis) = sample();
        let prompt = service_for(&server)
            .enhance_prompt(Some("sk-test"), briefing, &analysis)
            .await
            .unwrap();

        assert_eq!(prompt, "A calm workspace at dawn");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200);
            })
            .await;

        let (briefing, analysis) = sample();
        let service = service_for(&server);

        let err = service.enhance_prompt(None, briefing, &analysis).await.unwrap_err();
        assert!(matches!(err, EnhancerError::MissingCredential));

        let err = service.enhance_prompt(Some("   "), briefing, &analysis).await.unwrap_err();
        assert!(matches!(err, EnhancerError::MissingCredential));

        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401).body("invalid api key");
            })
            .await;

        let (briefing, analysis) = sample();
        let err = service_for(&server)
            .enhance_prompt(Some("sk-wrong"), briefing, &analysis)
            .await
            .unwrap_err();

        match err {
            EnhancerError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_malformed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({"choices": []}));
            })
            .await;

        let (briefing, analysis) = sample();
        let err = service_for(&server)
            .enhance_prompt(Some("sk-test"), briefing, &analysis)
            .await
            .unwrap_err();

        assert!(matches!(err, EnhancerError::MalformedResponse(_)));
    }

    #[test]
    fn test_request_body_shape() {
        let server_less = OpenAIService::with_prompt(
            EnhancerSettings::default(),
            EnhancerPromptConfig::fallback(),
        )
        .unwrap();
        let (briefing, analysis) = sample();

        let body = server_less.request_body(briefing, &analysis);

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(body["messages"][1]["content"]
            .as_str()
            .unwrap()
            .contains(briefing));
        assert_eq!(body["max_tokens"], 800);
        assert!(body["temperature"].is_number());
    }
}
