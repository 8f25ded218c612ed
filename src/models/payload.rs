use serde::{Deserialize, Serialize};

use crate::services::prompt_service::GenerationMode;

/// Corpo de `POST /analyze` e `POST /prompt`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingRequest {
    pub briefing: String,
    /// Ignorado em `/analyze`
    #[serde(default)]
    pub mode: GenerationMode,
}

/// Corpo de `PUT /settings/api-key`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRequest {
    pub api_key: String,
}

/// Resposta de `/settings/api-key`; a key nunca sai inteira
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyStatus {
    pub configured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masked_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_enhanced() {
        let request: BriefingRequest = serde_json::from_str(r#"{"briefing": "texto"}"#).unwrap();
        assert_eq!(request.mode, GenerationMode::Enhanced);

        let request: BriefingRequest =
            serde_json::from_str(r#"{"briefing": "texto", "mode": "template"}"#).unwrap();
        assert_eq!(request.mode, GenerationMode::Template);
    }

    #[test]
    fn test_api_key_request_is_camel_case() {
        let request: ApiKeyRequest = serde_json::from_str(r#"{"apiKey": "sk-1"}"#).unwrap();
        assert_eq!(request.api_key, "sk-1");
    }
}
