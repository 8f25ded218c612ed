use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub enhancer: EnhancerSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Configuração do enriquecimento via chat completion
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnhancerSettings {
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Sem valor, vale o timeout padrão do cliente HTTP
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// YAML com a instrução de sistema
    pub prompt_file: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageSettings {
    /// Arquivo JSON onde a API key fica persistida
    pub credentials_path: String,
}

impl Default for EnhancerSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 800,
            timeout_seconds: None,
            prompt_file: "config/enhancer_prompt.yaml".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let enhancer = EnhancerSettings::default();

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("enhancer.api_base", enhancer.api_base)?
            .set_default("enhancer.model", enhancer.model)?
            .set_default("enhancer.temperature", enhancer.temperature as f64)?
            .set_default("enhancer.max_tokens", enhancer.max_tokens as i64)?
            .set_default("enhancer.prompt_file", enhancer.prompt_file)?
            .set_default("storage.credentials_path", ".promptcraft/credentials.json")?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Cloud Run e afins injetam PORT
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        // PROMPTCRAFT__ENHANCER__MODEL=gpt-4o etc.
        builder = builder.add_source(
            Environment::with_prefix("PROMPTCRAFT")
                .prefix_separator("__")
                .separator("__"),
        );

        let s = builder.build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_files() {
        let settings = Settings::new().unwrap();

        assert!(!settings.enhancer.api_base.is_empty());
        assert!(!settings.enhancer.model.is_empty());
        assert!(settings.enhancer.max_tokens > 0);
        assert!(!settings.storage.credentials_path.is_empty());
    }
}
