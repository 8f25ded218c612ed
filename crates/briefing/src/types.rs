//! Tipos do registro de análise
//!
//! Todas as enumerações são fechadas: o classificador nunca sintetiza
//! valores fora destas listas. A serialização usa os rótulos em português,
//! que também são o que aparece no prompt gerado.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categoria de produto detectada no briefing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductCategory {
    #[serde(rename = "Aplicativo/Software")]
    Software,
    #[serde(rename = "Educacional")]
    Education,
    #[serde(rename = "Alimentício")]
    Food,
    #[serde(rename = "Beleza/Cosmético")]
    Beauty,
    #[serde(rename = "Moda/Vestuário")]
    Fashion,
    #[serde(rename = "Serviço")]
    Service,
    #[default]
    #[serde(rename = "Produto/Serviço")]
    Generic,
}

impl ProductCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Software => "Aplicativo/Software",
            ProductCategory::Education => "Educacional",
            ProductCategory::Food => "Alimentício",
            ProductCategory::Beauty => "Beleza/Cosmético",
            ProductCategory::Fashion => "Moda/Vestuário",
            ProductCategory::Service => "Serviço",
            ProductCategory::Generic => "Produto/Serviço",
        }
    }
}

/// Subcategoria, sempre vinculada a uma categoria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subcategory {
    // Aplicativo/Software
    #[serde(rename = "Bem-estar")]
    Wellness,
    #[serde(rename = "Produtividade")]
    Productivity,
    #[serde(rename = "Fitness")]
    Fitness,
    #[serde(rename = "Educacional")]
    Learning,

    // Educacional
    #[serde(rename = "Ensino a distância")]
    DistanceLearning,
    #[serde(rename = "Idiomas")]
    Languages,
    #[serde(rename = "Capacitação profissional")]
    CareerTraining,

    // Alimentício
    #[serde(rename = "Saudável")]
    Healthy,
    #[serde(rename = "Bebidas")]
    Beverages,
    #[serde(rename = "Doces")]
    Sweets,

    // Beleza/Cosmético
    #[serde(rename = "Cuidados com a pele")]
    Skincare,
    #[serde(rename = "Cabelos")]
    Haircare,
    #[serde(rename = "Maquiagem")]
    Makeup,

    // Moda/Vestuário
    #[serde(rename = "Calçados")]
    Footwear,
    #[serde(rename = "Moda esportiva")]
    Sportswear,
    #[serde(rename = "Moda sustentável")]
    SustainableFashion,

    // Serviço
    #[serde(rename = "Consultoria")]
    Consulting,
    #[serde(rename = "Delivery")]
    Delivery,
    #[serde(rename = "Assinatura")]
    Subscription,
}

impl Subcategory {
    pub fn label(&self) -> &'static str {
        match self {
            Subcategory::Wellness => "Bem-estar",
            Subcategory::Productivity => "Produtividade",
            Subcategory::Fitness => "Fitness",
            Subcategory::Learning => "Educacional",
            Subcategory::DistanceLearning => "Ensino a distância",
            Subcategory::Languages => "Idiomas",
            Subcategory::CareerTraining => "Capacitação profissional",
            Subcategory::Healthy => "Saudável",
            Subcategory::Beverages => "Bebidas",
            Subcategory::Sweets => "Doces",
            Subcategory::Skincare => "Cuidados com a pele",
            Subcategory::Haircare => "Cabelos",
            Subcategory::Makeup => "Maquiagem",
            Subcategory::Footwear => "Calçados",
            Subcategory::Sportswear => "Moda esportiva",
            Subcategory::SustainableFashion => "Moda sustentável",
            Subcategory::Consulting => "Consultoria",
            Subcategory::Delivery => "Delivery",
            Subcategory::Subscription => "Assinatura",
        }
    }
}

/// Público-alvo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TargetAudience {
    /// Caso especial de apps de bem-estar voltados ao trabalho
    #[serde(rename = "Jovens profissionais (25-35 anos)")]
    YoungProfessionals,
    #[serde(rename = "Jovens adultos (25-35 anos)")]
    YoungAdults,
    #[serde(rename = "Profissionais")]
    Professionals,
    #[serde(rename = "Famílias")]
    Families,
    #[serde(rename = "Terceira idade")]
    Seniors,
    #[default]
    #[serde(rename = "Público geral")]
    General,
}

impl TargetAudience {
    pub fn label(&self) -> &'static str {
        match self {
            TargetAudience::YoungProfessionals => "Jovens profissionais (25-35 anos)",
            TargetAudience::YoungAdults => "Jovens adultos (25-35 anos)",
            TargetAudience::Professionals => "Profissionais",
            TargetAudience::Families => "Famílias",
            TargetAudience::Seniors => "Terceira idade",
            TargetAudience::General => "Público geral",
        }
    }
}

/// Gatilho emocional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Tranquilidade,
    #[serde(rename = "Equilíbrio")]
    Equilibrio,
    Energia,
    #[serde(rename = "Confiança")]
    Confianca,
    Felicidade,
    Praticidade,
    Exclusividade,
    /// Só aparece quando nenhum outro gatilho foi detectado
    Positividade,
}

impl Emotion {
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Tranquilidade => "Tranquilidade",
            Emotion::Equilibrio => "Equilíbrio",
            Emotion::Energia => "Energia",
            Emotion::Confianca => "Confiança",
            Emotion::Felicidade => "Felicidade",
            Emotion::Praticidade => "Praticidade",
            Emotion::Exclusividade => "Exclusividade",
            Emotion::Positividade => "Positividade",
        }
    }
}

/// Objetivo da campanha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CampaignGoal {
    #[default]
    Awareness,
    #[serde(rename = "Conversão")]
    Conversion,
    Engajamento,
    #[serde(rename = "Lançamento")]
    Launch,
    Branding,
}

impl CampaignGoal {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignGoal::Awareness => "Awareness",
            CampaignGoal::Conversion => "Conversão",
            CampaignGoal::Engajamento => "Engajamento",
            CampaignGoal::Launch => "Lançamento",
            CampaignGoal::Branding => "Branding",
        }
    }
}

macro_rules! impl_display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_display_via_label!(ProductCategory, Subcategory, TargetAudience, Emotion, CampaignGoal);

/// Informações do produto extraídas do briefing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub category: ProductCategory,
    pub subcategory: Option<Subcategory>,
    /// Vazio quando nenhum padrão de nome casou
    pub name: String,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
    pub description: String,
}

/// Registro estruturado produzido pelo classificador
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub product: ProductInfo,
    pub target_audience: TargetAudience,
    /// Nunca vazio; ordem de primeira ocorrência
    pub emotions: Vec<Emotion>,
    pub goal: CampaignGoal,
    /// Número de caracteres do briefing original
    pub briefing_length: usize,
    /// No máximo cinco termos
    pub key_terms: Vec<String>,
}
