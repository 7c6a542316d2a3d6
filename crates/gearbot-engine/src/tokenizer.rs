//! Query tokenization.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Tokens at or above this length survive the stop-noise filter; "to", "in",
/// "is" and friends never drive a match.
const MIN_KEYWORD_LEN: usize = 3;

/// Split a free-text query into a set of lowercase keywords.
///
/// Tokens are maximal word-character runs. An empty, whitespace-only, or
/// punctuation-only query yields the empty set — downstream that means zero
/// matches, never "match everything".
pub fn tokenize(query: &str) -> HashSet<String> {
    WORD.find_iter(query)
        .filter(|m| m.as_str().chars().count() >= MIN_KEYWORD_LEN)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        let tokens = tokenize("improving my golf swing");
        assert!(tokens.contains("improving"));
        assert!(tokens.contains("golf"));
        assert!(tokens.contains("swing"));
        assert!(!tokens.contains("my"));
    }

    #[test]
    fn test_tokens_are_lowercased() {
        let tokens = tokenize("Tell me about the BOSU Elite");
        assert!(tokens.contains("bosu"));
        assert!(tokens.contains("elite"));
        assert!(tokens.contains("tell"));
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert!(tokenize("to be or in it is").is_empty());
        let tokens = tokenize("is it for core");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("for"));
        assert!(tokens.contains("core"));
    }

    #[test]
    fn test_empty_and_noise_queries() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t \n ").is_empty());
        assert!(tokenize("?!... --- ***").is_empty());
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let tokens = tokenize("strength-training, core/balance!");
        assert!(tokens.contains("strength"));
        assert!(tokens.contains("training"));
        assert!(tokens.contains("core"));
        assert!(tokens.contains("balance"));
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(tokenize("core Core CORE").len(), 1);
    }

    #[test]
    fn test_digits_and_underscores_are_word_chars() {
        let tokens = tokenize("model_2000 rope");
        assert!(tokens.contains("model_2000"));
        assert!(tokens.contains("rope"));
    }
}
