use super::weights::{PHRASE_MATCH_BONUS, PHRASE_NO_BIGRAM_DEFAULT};
use crate::tokenize::{is_stopword, word_sequence, CONTENT_WORD_MIN_CHARS};

/// Two-word technical phrases from the JD: a window of 2 slid over the raw
/// word sequence, kept only when both words are content words (longer than
/// three chars, not stopwords). Order and duplicates are preserved; the raw
/// sequence length is the scoring denominator.
pub fn extract_phrases(jd_text: &str) -> Vec<String> {
    let words = word_sequence(jd_text);

    words
        .windows(2)
        .filter(|pair| {
            pair.iter()
                .all(|w| w.chars().count() >= CONTENT_WORD_MIN_CHARS && !is_stopword(w))
        })
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}

/// Share of JD bigrams present verbatim in the resume text, scaled to
/// 0–100. Exact-phrase substring matching is strict, so any nonzero hit
/// rate earns a flat bonus; a JD with no extractable phrases scores the
/// neutral default rather than zero.
pub fn phrase_score(jd_text: &str, resume_text: &str) -> f64 {
    let phrases = extract_phrases(jd_text);
    if phrases.is_empty() {
        return PHRASE_NO_BIGRAM_DEFAULT;
    }

    let resume_lower = resume_text.to_lowercase();
    let matched = phrases
        .iter()
        .filter(|phrase| resume_lower.contains(phrase.as_str()))
        .count();

    let base = matched as f64 / phrases.len() as f64 * 100.0;
    if base > 0.0 {
        (base + PHRASE_MATCH_BONUS).min(100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_adjacent_content_words() {
        let phrases = extract_phrases("Seeking machine learning engineer with cloud experience");
        assert!(phrases.contains(&"machine learning".to_string()));
        assert!(phrases.contains(&"learning engineer".to_string()));
        // "with" is a stopword; neither bigram touching it survives.
        assert!(!phrases.iter().any(|p| p.contains("with")));
    }

    #[test]
    fn short_words_break_phrases() {
        let phrases = extract_phrases("sql data pipelines");
        assert_eq!(phrases, vec!["data pipelines".to_string()]);
    }

    #[test]
    fn matched_share_earns_bonus() {
        let jd = "distributed systems experience";
        let resume = "Distributed systems experience at scale.";
        // Both bigrams present: base 100, bonus capped.
        assert_eq!(phrase_score(jd, resume), 100.0);
    }

    #[test]
    fn partial_match_gets_flat_bonus() {
        let jd = "kernel development embedded firmware";
        let resume = "Years of kernel development.";
        // 1 of 3 bigrams matched: 33.33… + 20.
        let score = phrase_score(jd, resume);
        assert!((score - (100.0 / 3.0 + 20.0)).abs() < 1e-9);
    }

    #[test]
    fn zero_matches_earn_no_bonus() {
        assert_eq!(phrase_score("quantum computing research", "sales resume"), 0.0);
    }

    #[test]
    fn no_bigrams_defaults_neutral() {
        assert_eq!(phrase_score("sql and the job", "anything"), 60.0);
        assert_eq!(phrase_score("", "anything"), 60.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let score = phrase_score("project management", "Certified in Project Management.");
        assert_eq!(score, 100.0);
    }
}
