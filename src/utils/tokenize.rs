use crate::types::Token;

/// Splits normalized text into raw tokens.
///
/// The text is lowercased and trimmed, then split on the single space character
/// only. Runs of spaces produce empty tokens and other whitespace (tabs, line
/// breaks) stays inside tokens; `clean_tokens` removes both.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.to_lowercase()
        .trim()
        .split(' ')
        .map(|token| token.to_string())
        .collect()
}

/// Trims each token and drops the ones left empty. Order is preserved.
pub fn clean_tokens<T: AsRef<str>>(tokens: &[T]) -> Vec<Token> {
    tokens
        .iter()
        .map(|token| token.as_ref().trim())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}
