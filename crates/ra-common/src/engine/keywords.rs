use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::weights::{
    FUZZY_LONG_KEYWORD_CHARS, FUZZY_LONG_PREFIX, FUZZY_MIN_KEYWORD_CHARS, FUZZY_SHORT_PREFIX,
};
use crate::synonyms::SynonymTable;

/// How a JD keyword was reconciled against the resume, in decreasing
/// strictness. `Unmatched` keywords feed the missing-keyword ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Semantic,
    Fuzzy,
    Unmatched,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatch {
    pub keyword: String,
    pub kind: MatchKind,
    /// The resume token or synonym form that satisfied the match, if any.
    pub matched: Option<String>,
}

impl KeywordMatch {
    pub fn is_matched(&self) -> bool {
        self.kind != MatchKind::Unmatched
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeywordMatchOutcome {
    pub matches: Vec<KeywordMatch>,
    /// Share of JD keywords with any match, scaled to 0–100. Zero when the
    /// JD keyword set is empty.
    pub score: f64,
}

impl KeywordMatchOutcome {
    pub fn unmatched_keywords(&self) -> impl Iterator<Item = &str> {
        self.matches
            .iter()
            .filter(|m| !m.is_matched())
            .map(|m| m.keyword.as_str())
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn prefix_eq(a: &str, b: &str, n: usize) -> bool {
    a.chars().take(n).eq(b.chars().take(n))
}

/// Prefix/substring heuristic standing in for morphological matching
/// ("engineer" vs "engineering"). Over-matches on short shared prefixes;
/// that recall bias is part of the scoring calibration.
fn fuzzy_candidate(jd_keyword: &str, resume_keyword: &str) -> bool {
    if jd_keyword.contains(resume_keyword) || resume_keyword.contains(jd_keyword) {
        return true;
    }
    if prefix_eq(jd_keyword, resume_keyword, FUZZY_SHORT_PREFIX) {
        return true;
    }
    char_len(jd_keyword) >= FUZZY_LONG_KEYWORD_CHARS
        && char_len(resume_keyword) >= FUZZY_LONG_KEYWORD_CHARS
        && prefix_eq(jd_keyword, resume_keyword, FUZZY_LONG_PREFIX)
}

/// Reconcile every JD keyword against the resume keyword set and raw resume
/// text. Per keyword the tiers apply in priority order: exact set member,
/// synonym cluster hit (set member or substring of the resume text), then
/// the fuzzy prefix heuristic.
///
/// `resume_text_lower` must already be lowercased; substring probes are
/// case-insensitive by construction.
pub fn match_keywords(
    jd_keywords: &HashSet<String>,
    resume_keywords: &HashSet<String>,
    resume_text_lower: &str,
    synonyms: &SynonymTable,
) -> KeywordMatchOutcome {
    // Sorted walks keep the outcome deterministic regardless of set order.
    let mut jd_sorted: Vec<&String> = jd_keywords.iter().collect();
    jd_sorted.sort();
    let mut resume_sorted: Vec<&String> = resume_keywords.iter().collect();
    resume_sorted.sort();

    let mut matches = Vec::with_capacity(jd_sorted.len());

    for keyword in jd_sorted {
        matches.push(match_one(
            keyword,
            resume_keywords,
            &resume_sorted,
            resume_text_lower,
            synonyms,
        ));
    }

    let matched = matches.iter().filter(|m| m.is_matched()).count();
    let score = if matches.is_empty() {
        0.0
    } else {
        matched as f64 / matches.len() as f64 * 100.0
    };

    KeywordMatchOutcome { matches, score }
}

fn match_one(
    keyword: &str,
    resume_keywords: &HashSet<String>,
    resume_sorted: &[&String],
    resume_text_lower: &str,
    synonyms: &SynonymTable,
) -> KeywordMatch {
    if resume_keywords.contains(keyword) {
        return KeywordMatch {
            keyword: keyword.to_string(),
            kind: MatchKind::Exact,
            matched: Some(keyword.to_string()),
        };
    }

    for form in synonyms.expand(keyword) {
        if resume_keywords.contains(&form) || resume_text_lower.contains(&form) {
            return KeywordMatch {
                keyword: keyword.to_string(),
                kind: MatchKind::Semantic,
                matched: Some(form),
            };
        }
    }

    if char_len(keyword) >= FUZZY_MIN_KEYWORD_CHARS {
        for candidate in resume_sorted {
            if char_len(candidate) >= FUZZY_MIN_KEYWORD_CHARS && fuzzy_candidate(keyword, candidate)
            {
                return KeywordMatch {
                    keyword: keyword.to_string(),
                    kind: MatchKind::Fuzzy,
                    matched: Some((*candidate).clone()),
                };
            }
        }
    }

    KeywordMatch {
        keyword: keyword.to_string(),
        kind: MatchKind::Unmatched,
        matched: None,
    }
}
