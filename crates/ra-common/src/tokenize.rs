use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Minimum token length for keyword sets (tokens of 1–2 chars are noise).
pub const KEYWORD_MIN_CHARS: usize = 3;

/// Stricter minimum used by phrase extraction and fuzzy-match eligibility.
pub const CONTENT_WORD_MIN_CHARS: usize = 4;

// Word pattern keeps compound tech tokens ("c++", "ci/cd", "c#", "t-sql",
// "node.js") intact; surrounding punctuation is trimmed afterwards.
static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9+#/.\-]+").unwrap());

const TRIM_CHARS: &[char] = &[
    '.', ',', ':', ';', '(', ')', '[', ']', '{', '}', '"', '\'',
];

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "nor", "but", "with", "from", "into", "onto", "this", "that",
        "these", "those", "are", "was", "were", "been", "being", "have", "has", "had", "will",
        "would", "can", "could", "should", "shall", "may", "might", "must", "you", "your", "our",
        "their", "they", "them", "who", "what", "which", "when", "where", "while", "than", "then",
        "such", "not", "all", "any",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

fn clean_token(raw: &str) -> &str {
    raw.trim_matches(|c| TRIM_CHARS.contains(&c))
}

/// Ordered token walk over the text: lowercased, punctuation-trimmed, empty
/// tokens skipped. No length or stopword filtering; callers apply their own.
pub fn word_sequence(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    RE_TOKEN
        .find_iter(&lower)
        .map(|m| clean_token(m.as_str()))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the keyword set of a text: unique normalized tokens of at least
/// `min_chars` characters with stopwords removed. Empty input yields an
/// empty set.
pub fn extract_keywords(text: &str, min_chars: usize) -> HashSet<String> {
    word_sequence(text)
        .into_iter()
        .filter(|t| t.chars().count() >= min_chars)
        .filter(|t| !is_stopword(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_compound_tech_tokens() {
        let keywords = extract_keywords("Experience with C++, CI/CD and C# (required).", 3);
        assert!(keywords.contains("c++"));
        assert!(keywords.contains("ci/cd"));
        assert!(!keywords.contains("c#"), "two chars, below minimum");
        assert!(keywords.contains("experience"));
        assert!(keywords.contains("required"));
    }

    #[test]
    fn strips_surrounding_punctuation() {
        let keywords = extract_keywords("skills: \"python\", [docker]; (kubernetes).", 3);
        assert!(keywords.contains("python"));
        assert!(keywords.contains("docker"));
        assert!(keywords.contains("kubernetes"));
        assert!(keywords.contains("skills"));
    }

    #[test]
    fn drops_stopwords_and_short_tokens() {
        let keywords = extract_keywords("the and for with a an to of sql", 3);
        assert_eq!(keywords.len(), 1);
        assert!(keywords.contains("sql"));
    }

    #[test]
    fn thresholds_are_independent() {
        let loose = extract_keywords("sql data engineering", KEYWORD_MIN_CHARS);
        let strict = extract_keywords("sql data engineering", CONTENT_WORD_MIN_CHARS);
        assert!(loose.contains("sql"));
        assert!(!strict.contains("sql"));
        assert!(strict.contains("data"));
        assert!(strict.contains("engineering"));
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(extract_keywords("", 3).is_empty());
        assert!(word_sequence("").is_empty());
    }

    #[test]
    fn word_sequence_preserves_order_and_duplicates() {
        let words = word_sequence("Machine learning and machine learning.");
        assert_eq!(
            words,
            vec!["machine", "learning", "and", "machine", "learning"]
        );
    }
}
