//! Classificador de briefings por palavras-chave
//!
//! Função total e sem estado: qualquer string (inclusive vazia) produz um
//! `AnalysisResult` completo, com valores padrão onde nenhuma regra casou.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::key_terms::extract_key_terms;
use crate::rules::{self, KeywordRule};
use crate::types::{
    AnalysisResult, CampaignGoal, Emotion, ProductCategory, ProductInfo, Subcategory,
    TargetAudience,
};

/// Descrição usada quando nenhuma frase do briefing é longa o bastante
pub const DEFAULT_DESCRIPTION: &str = "Produto inovador";

/// Frases com até este número de caracteres não servem como descrição
const MIN_DESCRIPTION_CHARS: usize = 20;

/// Padrões de nome aplicados ao texto original (sensível a maiúsculas).
/// O nome é sempre o primeiro grupo de captura; no primeiro padrão isso é a
/// palavra-chave ("aplicativo", "marca", ...), não o nome próprio.
static NAME_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"(aplicativo|app|produto|marca)\s+([A-Z][a-zA-Z]+)")
            .expect("valid name pattern"),
        Regex::new(r"([A-Z][a-zA-Z]+)(?:\s+é\s+um|\s+oferece|\s+proporciona)")
            .expect("valid name pattern"),
    ]
});

/// Classifica um briefing
pub fn classify(text: &str) -> AnalysisResult {
    let lower = text.to_lowercase();

    let category = detect_category(&lower);
    let subcategory = detect_subcategory(category, &lower);

    let product = ProductInfo {
        category,
        subcategory,
        name: extract_name(text),
        features: collect_labels(rules::FEATURE_RULES, &lower),
        benefits: collect_labels(rules::BENEFIT_RULES, &lower),
        description: extract_description(text),
    };

    let target_audience = detect_audience(category, subcategory, &lower);
    let emotions = detect_emotions(category, subcategory, &lower);
    let goal = detect_goal(&lower);

    let result = AnalysisResult {
        product,
        target_audience,
        emotions,
        goal,
        briefing_length: text.chars().count(),
        key_terms: extract_key_terms(text),
    };

    debug!(
        "Briefing classified: category={}, subcategory={:?}, audience={}, goal={}",
        result.product.category, result.product.subcategory, result.target_audience, result.goal
    );

    result
}

/// Primeiro grupo que casa vence; sem casamento fica em "Produto/Serviço"
pub fn detect_category(text_lower: &str) -> ProductCategory {
    rules::first_match(rules::CATEGORY_RULES, text_lower).unwrap_or_default()
}

/// Checagens independentes: a última que casa sobrescreve as anteriores
pub fn detect_subcategory(category: ProductCategory, text_lower: &str) -> Option<Subcategory> {
    rules::last_match(rules::subcategory_rules(category), text_lower)
}

pub fn extract_name(text: &str) -> String {
    NAME_PATTERNS
        .iter()
        .find_map(|pattern| {
            pattern
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .unwrap_or_default()
}

pub fn extract_description(text: &str) -> String {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .find(|sentence| sentence.chars().count() > MIN_DESCRIPTION_CHARS)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
}

fn collect_labels(table: &[KeywordRule<&'static str>], text_lower: &str) -> Vec<String> {
    rules::all_matches(table, text_lower)
        .map(str::to_string)
        .collect()
}

fn is_wellness_app(category: ProductCategory, subcategory: Option<Subcategory>) -> bool {
    category == ProductCategory::Software && subcategory == Some(Subcategory::Wellness)
}

/// O caso especial tem precedência; a cascata genérica só roda sem ele
pub fn detect_audience(
    category: ProductCategory,
    subcategory: Option<Subcategory>,
    text_lower: &str,
) -> TargetAudience {
    if is_wellness_app(category, subcategory)
        && rules::WORKPLACE_KEYWORDS
            .iter()
            .any(|kw| text_lower.contains(kw))
    {
        return TargetAudience::YoungProfessionals;
    }

    rules::last_match(rules::AUDIENCE_RULES, text_lower).unwrap_or_default()
}

/// Sementes da categoria seguidas dos gatilhos por palavra-chave,
/// sem duplicatas e nunca vazio
pub fn detect_emotions(
    category: ProductCategory,
    subcategory: Option<Subcategory>,
    text_lower: &str,
) -> Vec<Emotion> {
    let seeds: &[Emotion] = if is_wellness_app(category, subcategory) {
        &[Emotion::Tranquilidade, Emotion::Equilibrio]
    } else {
        &[]
    };

    let mut emotions: Vec<Emotion> = Vec::new();
    for emotion in seeds
        .iter()
        .copied()
        .chain(rules::all_matches(rules::EMOTION_RULES, text_lower))
    {
        if !emotions.contains(&emotion) {
            emotions.push(emotion);
        }
    }

    if emotions.is_empty() {
        emotions.push(Emotion::Positividade);
    }

    emotions
}

pub fn detect_goal(text_lower: &str) -> CampaignGoal {
    rules::first_match(rules::GOAL_RULES, text_lower).unwrap_or_default()
}
