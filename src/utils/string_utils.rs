/// Utilitários de texto para logs

/// Corta o texto em no máximo `max_chars` caracteres (nunca no meio de um
/// caractere UTF-8) e quebra linhas para caber em uma linha de log
///
/// # Exemplo
/// ```
/// use promptcraft::utils::string_utils::preview;
///
/// assert_eq!(preview("Olá\nmundo", 20), "Olá mundo");
/// assert_eq!(preview("Lançamento do app", 10), "Lançamento...");
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");

    match flattened.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &flattened[..cut]),
        None => flattened,
    }
}

/// Mascara uma credencial mantendo apenas os últimos 4 caracteres
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("briefing curto", 50), "briefing curto");
    }

    #[test]
    fn test_preview_respects_utf8_boundaries() {
        assert_eq!(preview("ação ação", 3), "açã...");
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("  um\n\tdois   três ", 100), "um dois três");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("sk-abcdef1234"), "*********1234");
        assert_eq!(mask_secret("abc"), "***");
    }
}
