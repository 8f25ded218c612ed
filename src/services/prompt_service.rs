//! Geração de prompts: classificação + enriquecimento remoto com fallback
//!
//! Fluxo:
//! 1. `briefing::classify` produz a análise
//! 2. modo `template`: `briefing::build_prompt`
//! 3. modo `enhanced`: chat completion; qualquer `Err` cai no template

use briefing::AnalysisResult;
use serde::{Deserialize, Serialize};

use crate::services::openai::OpenAIService;
use crate::utils::logging::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Apenas o template local
    Template,
    /// Chat completion, com o template como fallback
    #[default]
    Enhanced,
}

/// De onde veio o prompt entregue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptSource {
    Remote,
    Template,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptGeneration {
    pub analysis: AnalysisResult,
    pub prompt: String,
    pub source: PromptSource,
    /// Motivo do fallback, quando o enriquecimento remoto falhou
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

#[derive(Clone)]
pub struct PromptService {
    enhancer: OpenAIService,
}

impl PromptService {
    pub fn new(enhancer: OpenAIService) -> Self {
        Self { enhancer }
    }

    /// Gera o prompt; nunca falha
    pub async fn generate(
        &self,
        briefing: &str,
        mode: GenerationMode,
        api_key: Option<&str>,
        request_id: &str,
    ) -> PromptGeneration {
        let analysis = briefing::classify(briefing);

        log_briefing_classified(
            request_id,
            analysis.product.category.label(),
            analysis.target_audience.label(),
            analysis.goal.label(),
        );

        if mode == GenerationMode::Template {
            return Self::from_template(analysis, None);
        }

        match self.enhancer.enhance_prompt(api_key, briefing, &analysis).await {
            Ok(prompt) => {
                log_enhancer_success(request_id, prompt.chars().count());
                PromptGeneration {
                    analysis,
                    prompt,
                    source: PromptSource::Remote,
                    fallback_reason: None,
                }
            }
            Err(e) => {
                let reason = e.to_string();
                log_enhancer_fallback(request_id, &reason);
                Self::from_template(analysis, Some(reason))
            }
        }
    }

    fn from_template(analysis: AnalysisResult, fallback_reason: Option<String>) -> PromptGeneration {
        let prompt = briefing::build_prompt(&analysis);
        PromptGeneration {
            analysis,
            prompt,
            source: PromptSource::Template,
            fallback_reason,
        }
    }
}
