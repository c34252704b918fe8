use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::weights::{
    GRAMMAR_MAX_FINDINGS, GRAMMAR_MAX_SENTENCES, GRAMMAR_PENALTY_CAP, GRAMMAR_PENALTY_PER_FINDING,
};

static RE_MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

const CONTEXT_RADIUS: usize = 40;

/// One style finding with enough location data for a client to highlight it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub message: String,
    pub suggestions: Vec<String>,
    pub context: String,
    pub offset: usize,
    pub length: usize,
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

fn snippet(text: &str, offset: usize, length: usize) -> String {
    let start = floor_char_boundary(text, offset.saturating_sub(CONTEXT_RADIUS));
    let end = ceil_char_boundary(text, (offset + length + CONTEXT_RADIUS).min(text.len()));
    text[start..end].replace('\n', " ")
}

fn sentences(text: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            if index > start {
                out.push((start, &text[start..index]));
            }
            start = index + ch.len_utf8();
        }
    }
    if start < text.len() {
        out.push((start, &text[start..]));
    }

    out.retain(|(_, raw)| !raw.trim().is_empty());
    out.truncate(GRAMMAR_MAX_SENTENCES);
    out
}

fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lightweight sentence-level style checks: sentences after the first that
/// start lowercase, and runs of two or more spaces anywhere in the text.
/// At most the first ten sentences are inspected and the combined finding
/// list is capped at eight.
pub fn check_grammar(text: &str) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();

    for (position, (raw_offset, raw)) in sentences(text).iter().enumerate() {
        if position == 0 {
            continue;
        }

        let trimmed = raw.trim_start();
        let offset = raw_offset + (raw.len() - trimmed.len());
        let Some(first) = trimmed.chars().next() else {
            continue;
        };
        if first.is_alphabetic() && first.is_lowercase() {
            let trimmed = trimmed.trim_end();
            issues.push(GrammarIssue {
                message: "Sentence should start with a capital letter".to_string(),
                suggestions: vec![capitalize(trimmed)],
                context: snippet(text, offset, first.len_utf8()),
                offset,
                length: first.len_utf8(),
            });
        }
    }

    for run in RE_MULTI_SPACE.find_iter(text) {
        issues.push(GrammarIssue {
            message: "Multiple consecutive spaces".to_string(),
            suggestions: vec![" ".to_string()],
            context: snippet(text, run.start(), run.len()),
            offset: run.start(),
            length: run.len(),
        });
    }

    issues.truncate(GRAMMAR_MAX_FINDINGS);
    issues
}

/// Penalty term fed into the composite score, two points per finding up to
/// the cap.
pub fn grammar_penalty(issue_count: usize) -> f64 {
    (issue_count as f64 * GRAMMAR_PENALTY_PER_FINDING).min(GRAMMAR_PENALTY_CAP)
}
