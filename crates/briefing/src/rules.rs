//! Tabelas de regras por palavras-chave
//!
//! Cada campo do registro de análise é resolvido por uma lista ordenada de
//! regras `(palavras-chave, valor)`. A forma de aplicar a lista muda por
//! campo e precisa ser preservada:
//!
//! - `first_match`: a primeira regra que casa vence (categoria, objetivo)
//! - `last_match`: checagens independentes, a última que casa sobrescreve
//!   as anteriores (subcategoria, público genérico)
//! - `all_matches`: checagens independentes que acumulam (features,
//!   benefícios, emoções)
//!
//! Todas as checagens são por substring sobre o texto já em minúsculas.

use crate::types::{CampaignGoal, Emotion, ProductCategory, Subcategory, TargetAudience};

/// Regra: se qualquer palavra-chave aparecer no texto, produz `value`
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub value: T,
}

impl<T: Copy> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], value: T) -> Self {
        Self { keywords, value }
    }

    /// `text_lower` deve estar em minúsculas
    pub fn matches(&self, text_lower: &str) -> bool {
        self.keywords.iter().any(|kw| text_lower.contains(kw))
    }
}

pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], text_lower: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.matches(text_lower))
        .map(|rule| rule.value)
}

pub fn last_match<T: Copy>(rules: &[KeywordRule<T>], text_lower: &str) -> Option<T> {
    rules
        .iter()
        .filter(|rule| rule.matches(text_lower))
        .last()
        .map(|rule| rule.value)
}

pub fn all_matches<'a, T: Copy>(
    rules: &'a [KeywordRule<T>],
    text_lower: &'a str,
) -> impl Iterator<Item = T> + 'a {
    rules
        .iter()
        .filter(move |rule| rule.matches(text_lower))
        .map(|rule| rule.value)
}

// ============================================================================
// Categoria (first_match)
// ============================================================================

pub const CATEGORY_RULES: &[KeywordRule<ProductCategory>] = &[
    KeywordRule::new(&["app", "aplicativo", "software"], ProductCategory::Software),
    KeywordRule::new(&["curso", "educação", "treinamento"], ProductCategory::Education),
    KeywordRule::new(&["alimento", "comida", "bebida"], ProductCategory::Food),
    KeywordRule::new(&["cosmético", "beleza", "skincare"], ProductCategory::Beauty),
    KeywordRule::new(&["roupa", "vestuário", "moda", "tênis"], ProductCategory::Fashion),
    KeywordRule::new(&["serviço", "consultoria"], ProductCategory::Service),
];

// ============================================================================
// Subcategoria (last_match, escopo da categoria)
// ============================================================================

const SOFTWARE_SUBCATEGORIES: &[KeywordRule<Subcategory>] = &[
    KeywordRule::new(&["meditação", "mindfulness"], Subcategory::Wellness),
    KeywordRule::new(&["produtividade", "organização"], Subcategory::Productivity),
    KeywordRule::new(&["fitness", "exercício"], Subcategory::Fitness),
    KeywordRule::new(&["educação", "aprendizado"], Subcategory::Learning),
];

const EDUCATION_SUBCATEGORIES: &[KeywordRule<Subcategory>] = &[
    KeywordRule::new(&["online", "ead", "digital"], Subcategory::DistanceLearning),
    KeywordRule::new(&["idioma", "inglês", "espanhol"], Subcategory::Languages),
    KeywordRule::new(&["carreira", "profissionalizante"], Subcategory::CareerTraining),
];

const FOOD_SUBCATEGORIES: &[KeywordRule<Subcategory>] = &[
    KeywordRule::new(&["saudável", "orgânico", "natural"], Subcategory::Healthy),
    KeywordRule::new(&["bebida", "suco", "café"], Subcategory::Beverages),
    KeywordRule::new(&["doce", "chocolate", "sobremesa"], Subcategory::Sweets),
];

const BEAUTY_SUBCATEGORIES: &[KeywordRule<Subcategory>] = &[
    KeywordRule::new(&["skincare", "pele"], Subcategory::Skincare),
    KeywordRule::new(&["cabelo", "capilar"], Subcategory::Haircare),
    KeywordRule::new(&["maquiagem"], Subcategory::Makeup),
];

const FASHION_SUBCATEGORIES: &[KeywordRule<Subcategory>] = &[
    KeywordRule::new(&["tênis", "calçado"], Subcategory::Footwear),
    KeywordRule::new(&["esporte", "academia"], Subcategory::Sportswear),
    KeywordRule::new(&["sustentável", "reciclado"], Subcategory::SustainableFashion),
];

const SERVICE_SUBCATEGORIES: &[KeywordRule<Subcategory>] = &[
    KeywordRule::new(&["consultoria"], Subcategory::Consulting),
    KeywordRule::new(&["delivery", "entrega"], Subcategory::Delivery),
    KeywordRule::new(&["assinatura", "mensalidade"], Subcategory::Subscription),
];

pub fn subcategory_rules(category: ProductCategory) -> &'static [KeywordRule<Subcategory>] {
    match category {
        ProductCategory::Software => SOFTWARE_SUBCATEGORIES,
        ProductCategory::Education => EDUCATION_SUBCATEGORIES,
        ProductCategory::Food => FOOD_SUBCATEGORIES,
        ProductCategory::Beauty => BEAUTY_SUBCATEGORIES,
        ProductCategory::Fashion => FASHION_SUBCATEGORIES,
        ProductCategory::Service => SERVICE_SUBCATEGORIES,
        ProductCategory::Generic => &[],
    }
}

// ============================================================================
// Features e benefícios (all_matches)
// ============================================================================

pub const FEATURE_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::new(&["sessões", "minutos"], "Sessões personalizadas"),
    KeywordRule::new(&["fácil", "simples", "intuitiv"], "Facilidade de uso"),
    KeywordRule::new(&["offline"], "Funciona offline"),
    KeywordRule::new(&["personaliza"], "Experiência personalizada"),
    KeywordRule::new(&["notificação", "lembrete"], "Lembretes inteligentes"),
    KeywordRule::new(&["natural", "orgânico"], "Ingredientes naturais"),
    KeywordRule::new(&["entrega", "delivery"], "Entrega rápida"),
    KeywordRule::new(&["certificado", "certificação"], "Certificação inclusa"),
];

pub const BENEFIT_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::new(&["tranquilidade", "paz"], "Promove tranquilidade"),
    KeywordRule::new(&["estresse", "ansiedade"], "Reduz estresse e ansiedade"),
    KeywordRule::new(&["produtividade", "foco"], "Aumenta a produtividade"),
    KeywordRule::new(&["pausa", "correria", "rotina"], "Cabe na rotina do dia a dia"),
    KeywordRule::new(&["saúde", "saudável", "bem-estar"], "Melhora o bem-estar"),
    KeywordRule::new(&["economia", "economizar", "barato"], "Economia de tempo e dinheiro"),
    KeywordRule::new(&["autoestima", "autoconfiança"], "Eleva a autoestima"),
];

// ============================================================================
// Público-alvo genérico (last_match)
// ============================================================================

pub const AUDIENCE_RULES: &[KeywordRule<TargetAudience>] = &[
    KeywordRule::new(&["jovens", "millennials"], TargetAudience::YoungAdults),
    KeywordRule::new(&["profissionais", "executivos"], TargetAudience::Professionals),
    KeywordRule::new(&["família", "pais"], TargetAudience::Families),
    KeywordRule::new(&["idosos", "terceira idade"], TargetAudience::Seniors),
];

/// Gatilho do caso especial de apps de bem-estar
pub const WORKPLACE_KEYWORDS: &[&str] = &["profissionais", "trabalho"];

// ============================================================================
// Emoções (all_matches)
// ============================================================================

pub const EMOTION_RULES: &[KeywordRule<Emotion>] = &[
    KeywordRule::new(&["tranquilidade", "paz", "relaxar"], Emotion::Tranquilidade),
    KeywordRule::new(&["energia", "motivação"], Emotion::Energia),
    KeywordRule::new(&["confiança", "segurança"], Emotion::Confianca),
    KeywordRule::new(&["felicidade", "alegria"], Emotion::Felicidade),
    KeywordRule::new(&["praticidade", "facilidade"], Emotion::Praticidade),
    KeywordRule::new(&["exclusividade", "premium"], Emotion::Exclusividade),
];

// ============================================================================
// Objetivo (first_match)
// ============================================================================

pub const GOAL_RULES: &[KeywordRule<CampaignGoal>] = &[
    KeywordRule::new(&["lançamento", "novidade"], CampaignGoal::Launch),
    KeywordRule::new(&["venda", "compra", "conversão"], CampaignGoal::Conversion),
    KeywordRule::new(&["engajamento", "interação"], CampaignGoal::Engajamento),
    KeywordRule::new(&["branding", "marca"], CampaignGoal::Branding),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_stops_at_first_rule() {
        let goal = first_match(GOAL_RULES, "lançamento com foco em venda");
        assert_eq!(goal, Some(CampaignGoal::Launch));
    }

    #[test]
    fn test_last_match_keeps_latest_rule() {
        let audience = last_match(AUDIENCE_RULES, "jovens pais de primeira viagem");
        assert_eq!(audience, Some(TargetAudience::Families));
    }

    #[test]
    fn test_all_matches_accumulates_in_rule_order() {
        let emotions: Vec<_> = all_matches(EMOTION_RULES, "premium, com alegria e paz").collect();
        assert_eq!(
            emotions,
            vec![Emotion::Tranquilidade, Emotion::Felicidade, Emotion::Exclusividade]
        );
    }

    #[test]
    fn test_generic_category_has_no_subcategories() {
        assert!(subcategory_rules(ProductCategory::Generic).is_empty());
    }
}
