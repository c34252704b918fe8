use once_cell::sync::Lazy;
use regex::Regex;

use super::weights::ACHIEVEMENT_POINTS_PER_MATCH;

// A number token, optionally a percentage ("30%", "4.5", "120").
static RE_QUANTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?%?").unwrap());

/// Count quantified statements in the resume ("reduced latency by 30%").
pub fn count_achievements(resume_text: &str) -> usize {
    RE_QUANTIFIER.find_iter(resume_text).count()
}

/// Quantified-statement signal: ten points per occurrence, capped at 100.
/// Independent of keyword overlap.
pub fn achievement_score(resume_text: &str) -> f64 {
    (count_achievements(resume_text) as f64 * ACHIEVEMENT_POINTS_PER_MATCH).min(100.0)
}
