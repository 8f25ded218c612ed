//! Análise de briefings de marketing
//!
//! Este crate concentra a parte pura do PromptCraft:
//! - `classify`: texto livre → `AnalysisResult` (categoria, público,
//!   gatilhos emocionais, objetivo, termos-chave)
//! - `build_prompt`: `AnalysisResult` → prompt visual determinístico
//!
//! Nenhuma função aqui faz I/O ou falha.

pub mod classifier;
pub mod key_terms;
pub mod rules;
pub mod template;
pub mod types;

pub use classifier::classify;
pub use template::build_prompt;
pub use types::{
    AnalysisResult, CampaignGoal, Emotion, ProductCategory, ProductInfo, Subcategory,
    TargetAudience,
};
