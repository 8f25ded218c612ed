//! Montagem determinística do prompt visual a partir da análise
//!
//! É também o caminho de fallback quando o enriquecimento remoto falha.

use crate::types::{AnalysisResult, Emotion, ProductCategory, TargetAudience};

/// Usado quando nenhuma emoção tem frase de clima
pub const DEFAULT_MOOD: &str = "positive, engaging atmosphere";

/// Usado quando o público não tem frase própria
pub const DEFAULT_AUDIENCE_PHRASE: &str = "diverse target audience";

pub fn visual_style(category: ProductCategory) -> &'static str {
    match category {
        ProductCategory::Software => "modern, clean UI/UX design, mobile-first",
        ProductCategory::Education => "professional, trustworthy, inspiring",
        ProductCategory::Food => "appetizing, natural, fresh",
        ProductCategory::Beauty => "elegant, sophisticated, aspirational",
        ProductCategory::Fashion => "stylish, trendy, editorial fashion look",
        ProductCategory::Service => "reliable, approachable, human-centered",
        ProductCategory::Generic => "clean, professional",
    }
}

pub fn mood_phrase(emotion: Emotion) -> Option<&'static str> {
    match emotion {
        Emotion::Tranquilidade => Some("calm, peaceful, serene atmosphere"),
        Emotion::Equilibrio => Some("balanced, harmonious composition"),
        Emotion::Energia => Some("dynamic, vibrant, energetic"),
        Emotion::Confianca => Some("professional, reliable, trustworthy"),
        Emotion::Felicidade => Some("joyful, bright, positive"),
        Emotion::Praticidade => Some("simple, efficient, user-friendly"),
        Emotion::Exclusividade => Some("premium, luxury, sophisticated"),
        Emotion::Positividade => None,
    }
}

pub fn audience_phrase(audience: TargetAudience) -> Option<&'static str> {
    match audience {
        TargetAudience::YoungProfessionals => {
            Some("young professionals balancing work and wellbeing, modern urban lifestyle")
        }
        TargetAudience::YoungAdults => Some("young adults, modern lifestyle"),
        TargetAudience::Professionals => Some("business environment, corporate setting"),
        TargetAudience::Families => Some("family-oriented, warm, inclusive"),
        TargetAudience::Seniors => Some("mature, respectful, accessible"),
        TargetAudience::General => None,
    }
}

/// Constrói o prompt a partir da análise
pub fn build_prompt(analysis: &AnalysisResult) -> String {
    let product = &analysis.product;

    let style = visual_style(product.category);

    let moods: Vec<&str> = analysis
        .emotions
        .iter()
        .filter_map(|emotion| mood_phrase(*emotion))
        .collect();
    let mood = if moods.is_empty() {
        DEFAULT_MOOD.to_string()
    } else {
        moods.join(", ")
    };

    let audience = audience_phrase(analysis.target_audience).unwrap_or(DEFAULT_AUDIENCE_PHRASE);

    let emotion_labels: Vec<&str> = analysis.emotions.iter().map(|e| e.label()).collect();

    let mut prompt = String::new();

    prompt.push_str("Create a high-quality marketing image for the following product.\n\n");

    prompt.push_str("PRODUCT:\n");
    if !product.name.is_empty() {
        prompt.push_str(&format!("- Name: {}\n", product.name));
    }
    prompt.push_str(&format!("- Description: {}\n", product.description));
    prompt.push_str(&format!("- Category: {}\n", product.category.label()));
    if let Some(subcategory) = product.subcategory {
        prompt.push_str(&format!("- Subcategory: {}\n", subcategory.label()));
    }
    if !product.features.is_empty() {
        prompt.push_str(&format!("- Key features: {}\n", product.features.join(", ")));
    }
    if product.benefits.is_empty() {
        prompt.push_str("- Benefits: clear value for the customer\n");
    } else {
        prompt.push_str(&format!("- Benefits: {}\n", product.benefits.join(", ")));
    }
    prompt.push('\n');

    prompt.push_str(&format!(
        "TARGET AUDIENCE: {} ({})\n",
        analysis.target_audience.label(),
        audience
    ));
    prompt.push_str(&format!("CAMPAIGN GOAL: {}\n", analysis.goal.label()));
    prompt.push_str(&format!("EMOTIONAL DIRECTION: {}\n", mood));
    prompt.push_str(&format!("VISUAL STYLE: {}\n\n", style));

    prompt.push_str("COMPOSITION:\n");
    prompt.push_str("- Clean, modern composition with strong visual hierarchy\n");
    prompt.push_str(&format!(
        "- Use colors that convey {}\n",
        emotion_labels.join(" and ").to_lowercase()
    ));
    prompt.push_str("- Include subtle branding elements without overwhelming the message\n");
    prompt.push_str("- Ensure the image works across digital platforms (social media, web, mobile)\n\n");

    prompt.push_str("TECHNICAL SPECS:\n");
    prompt.push_str("- High resolution, professional photography or illustration style\n");
    prompt.push_str("- Balanced lighting with soft shadows\n");
    prompt.push_str("- Sharp focus on key product/service elements\n");
    prompt.push_str("- Leave space for text overlay if needed\n\n");

    prompt.push_str(&format!(
        "MOOD: {}, appealing to {}, designed to drive {}.\n\n",
        mood,
        analysis.target_audience.label().to_lowercase(),
        analysis.goal.label().to_lowercase()
    ));

    prompt.push_str("Style: photorealistic, commercial photography, marketing campaign quality");

    prompt
}
