use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Máximo de termos retornados
pub const MAX_KEY_TERMS: usize = 5;

/// Tokens com até este número de caracteres são descartados
const MIN_TOKEN_CHARS: usize = 3;

/// Palavras funcionais ignoradas na contagem
pub const STOP_WORDS: &[&str] = &[
    "o", "a", "de", "da", "do", "que", "e", "para", "com", "em", "um", "uma", "é", "são", "ter",
    "como", "mais", "seu", "sua",
];

// `\w` do crate regex é Unicode: "lançamento" fica inteiro em vez de
// virar "lan" + "amento"
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Extrai os termos mais frequentes do briefing
///
/// Empates mantêm a ordem da primeira ocorrência.
pub fn extract_key_terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    // (termo, contagem) em ordem de primeira ocorrência
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in WORD_RE.find_iter(&lower).map(|m| m.as_str()) {
        if token.chars().count() <= MIN_TOKEN_CHARS || STOP_WORDS.contains(&token) {
            continue;
        }
        match index.get(token) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by é estável
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_KEY_TERMS)
        .map(|(term, _)| term.to_string())
        .collect()
}
