use serde::{Deserialize, Serialize};

use crate::engine::grammar::GrammarIssue;
use crate::engine::scoring::ScoreReport;

/// Characters of extracted text echoed back for client preview.
pub const TEXT_PREVIEW_CHARS: usize = 12_000;

/// Wire shape of one analysis. Mirrors `ScoreReport` plus the preview of
/// the text that was scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub score: u32,
    pub ats_score: f64,
    pub similarity_with_jd: Option<f64>,
    pub missing_keywords: Vec<String>,
    pub grammar_issues: Vec<GrammarIssue>,
    pub skills_found: Vec<String>,
    pub score_breakdown: ScoreBreakdownDto,
    pub text_preview: String,
}

/// Sub-score detail for GUI display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdownDto {
    pub keyword: f64,
    pub phrase: f64,
    pub achievement: f64,
    pub skills: f64,
    pub grammar_penalty: f64,
}

fn truncate_preview(text: &str) -> String {
    if text.chars().count() <= TEXT_PREVIEW_CHARS {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

impl AnalyzeResponse {
    pub fn from_report(report: ScoreReport, resume_text: &str) -> Self {
        Self {
            score: report.score,
            ats_score: report.ats_score,
            similarity_with_jd: report.similarity_with_jd,
            missing_keywords: report.missing_keywords,
            grammar_issues: report.grammar_issues,
            skills_found: report.skills_found,
            score_breakdown: ScoreBreakdownDto {
                keyword: report.keyword_score,
                phrase: report.phrase_score,
                achievement: report.achievement_score,
                skills: report.skill_score,
                grammar_penalty: report.grammar_penalty,
            },
            text_preview: truncate_preview(resume_text),
        }
    }
}
