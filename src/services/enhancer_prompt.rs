use briefing::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

/// Instruções enviadas ao modelo de chat para enriquecer o prompt
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnhancerPromptConfig {
    pub system_role: String,
    pub task_description: String,
    pub rules: Vec<String>,
    pub response_format: String,
}

impl EnhancerPromptConfig {
    /// Carrega a configuração de um arquivo YAML
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("Failed to read prompt file: {}", e)))?;

        let config: EnhancerPromptConfig = serde_yaml::from_str(&contents)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse YAML: {}", e)))?;

        Ok(config)
    }

    /// Carrega do arquivo; se não existir ou for inválido, usa a versão embutida
    pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log_warning(&format!(
                    "Enhancer prompt not loaded from {}, using built-in instructions: {}",
                    path.as_ref().display(),
                    e
                ));
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        Self {
            system_role: "Você é um diretor de arte especialista em marketing visual e em escrever prompts para ferramentas de geração de imagens.".to_string(),
            task_description: "A partir do briefing e da análise estruturada, escreva um prompt detalhado, em inglês, para gerar uma imagem de campanha.".to_string(),
            rules: vec![
                "Respeite a categoria, o público-alvo e o objetivo da análise".to_string(),
                "Traduza os gatilhos emocionais em iluminação, cores e composição".to_string(),
                "Não invente nomes de produto que não estejam no briefing".to_string(),
            ],
            response_format: "Responda APENAS com o texto do prompt, sem comentários adicionais.".to_string(),
        }
    }

    /// Mensagem de sistema
    pub fn system_message(&self) -> String {
        let mut message = String::new();

        message.push_str(&self.system_role);
        message.push_str("\n\n");
        message.push_str(&self.task_description);
        message.push_str("\n\n");

        if !self.rules.is_empty() {
            message.push_str("REGRAS IMPORTANTES:\n");
            for rule in &self.rules {
                message.push_str(&format!("- {}\n", rule));
            }
            message.push('\n');
        }

        message.push_str(&self.response_format);
        message
    }

    /// Mensagem do usuário: briefing original + análise estruturada
    pub fn user_message(&self, briefing: &str, analysis: &AnalysisResult) -> String {
        let product = &analysis.product;
        let emotions = analysis
            .emotions
            .iter()
            .map(|e| e.label())
            .collect::<Vec<_>>()
            .join(", ");

        let mut message = String::new();

        message.push_str("BRIEFING:\n");
        message.push_str(briefing.trim());
        message.push_str("\n\n");

        message.push_str("ANÁLISE:\n");
        message.push_str(&format!("- Categoria: {}\n", product.category.label()));
        if let Some(subcategory) = product.subcategory {
            message.push_str(&format!("- Subcategoria: {}\n", subcategory.label()));
        }
        if !product.name.is_empty() {
            message.push_str(&format!("- Nome: {}\n", product.name));
        }
        message.push_str(&format!("- Descrição: {}\n", product.description));
        if !product.features.is_empty() {
            message.push_str(&format!("- Funcionalidades: {}\n", product.features.join(", ")));
        }
        if !product.benefits.is_empty() {
            message.push_str(&format!("- Benefícios: {}\n", product.benefits.join(", ")));
        }
        message.push_str(&format!("- Público-alvo: {}\n", analysis.target_audience.label()));
        message.push_str(&format!("- Gatilhos emocionais: {}\n", emotions));
        message.push_str(&format!("- Objetivo: {}\n", analysis.goal.label()));
        if !analysis.key_terms.is_empty() {
            message.push_str(&format!("- Termos-chave: {}\n", analysis.key_terms.join(", ")));
        }

        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_repository_prompt_file() {
        // Só roda se o arquivo do repositório estiver acessível
        if Path::new("config/enhancer_prompt.yaml").exists() {
            let config = EnhancerPromptConfig::from_file("config/enhancer_prompt.yaml").unwrap();
            assert!(!config.system_role.is_empty());
            assert!(!config.rules.is_empty());
        }
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = EnhancerPromptConfig::load_or_fallback("config/does-not-exist.yaml");
        assert_eq!(config.system_role, EnhancerPromptConfig::fallback().system_role);
    }

    #[test]
    fn test_system_message_lists_rules() {
        let message = EnhancerPromptConfig::fallback().system_message();
        assert!(message.contains("REGRAS IMPORTANTES:"));
        assert!(message.contains("- Não invente nomes"));
    }

    #[test]
    fn test_user_message_embeds_briefing_and_analysis() {
        let briefing = "Lançamento do aplicativo Serenity de meditação para profissionais.";
        let analysis = briefing::classify(briefing);

        let message = EnhancerPromptConfig::fallback().user_message(briefing, &analysis);

        assert!(message.starts_with("BRIEFING:\nLançamento do aplicativo Serenity"));
        assert!(message.contains("- Categoria: Aplicativo/Software"));
        assert!(message.contains("- Subcategoria: Bem-estar"));
        assert!(message.contains("- Nome: aplicativo"));
        assert!(message.contains("- Público-alvo: Jovens profissionais (25-35 anos)"));
        assert!(message.contains("- Objetivo: Lançamento"));
    }
}
