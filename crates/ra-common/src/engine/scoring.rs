use super::achievements::achievement_score;
use super::grammar::{check_grammar, grammar_penalty, GrammarIssue};
use super::keywords::{match_keywords, KeywordMatch, KeywordMatchOutcome};
use super::phrases::phrase_score;
use super::weights::{
    ATS_WEIGHTS, COMPOSITE_WEIGHTS, CONTENT_QUALITY_DIVISOR, FALLBACK_WEIGHTS,
    MISSING_KEYWORD_LIMIT, MISSING_KEYWORD_MIN_CHARS,
};
use crate::skills::{find_skills, skill_score};
use crate::synonyms::{default_table, SynonymTable};
use crate::tokenize::{extract_keywords, KEYWORD_MIN_CHARS};

/// Result of one scoring call. Constructed fresh per call and never mutated
/// afterwards; every score field is clamped to [0, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    /// Final headline score, rounded to an integer.
    pub score: u32,
    /// Weighted blend of keyword/phrase/achievement sub-scores, rounded to
    /// two decimals. Zero when no job description was supplied.
    pub ats_score: f64,
    /// Equals `ats_score` when a JD was supplied, `None` otherwise.
    pub similarity_with_jd: Option<f64>,
    pub keyword_score: f64,
    pub phrase_score: f64,
    pub achievement_score: f64,
    pub skill_score: f64,
    pub grammar_penalty: f64,
    pub skills_found: Vec<String>,
    /// Unmatched JD keywords longer than four chars, longest first, at most
    /// thirty.
    pub missing_keywords: Vec<String>,
    pub grammar_issues: Vec<GrammarIssue>,
    /// Per-keyword match outcomes backing `keyword_score`.
    pub keyword_matches: Vec<KeywordMatch>,
}

/// The scoring engine: a pure function of the two input strings plus the
/// injected synonym table and skills inventory. No I/O, no shared mutable
/// state; safe to call from concurrent requests.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    synonyms: SynonymTable,
    skills: Vec<String>,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(default_table().clone(), crate::skills::default_skills())
    }
}

impl AnalysisEngine {
    pub fn new(synonyms: SynonymTable, skills: Vec<String>) -> Self {
        Self { synonyms, skills }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Score `resume_text` against `job_description`. An empty (or blank)
    /// job description skips JD-derived scoring and falls back to the
    /// skills + content-quality formula.
    pub fn analyze(&self, job_description: &str, resume_text: &str) -> ScoreReport {
        let skills_found = find_skills(resume_text, &self.skills);
        let skill = skill_score(skills_found.len(), self.skills.len());

        let grammar_issues = check_grammar(resume_text);
        let penalty = grammar_penalty(grammar_issues.len());

        if job_description.trim().is_empty() {
            let content_quality =
                (resume_text.chars().count() as f64 / CONTENT_QUALITY_DIVISOR).min(100.0);
            let raw = FALLBACK_WEIGHTS.skills * skill
                + FALLBACK_WEIGHTS.content_quality * content_quality
                - penalty;

            return ScoreReport {
                score: clamp_round(raw),
                ats_score: 0.0,
                similarity_with_jd: None,
                keyword_score: 0.0,
                phrase_score: 0.0,
                achievement_score: 0.0,
                skill_score: skill,
                grammar_penalty: penalty,
                skills_found,
                missing_keywords: Vec::new(),
                grammar_issues,
                keyword_matches: Vec::new(),
            };
        }

        let jd_keywords = extract_keywords(job_description, KEYWORD_MIN_CHARS);
        let resume_keywords = extract_keywords(resume_text, KEYWORD_MIN_CHARS);
        let resume_lower = resume_text.to_lowercase();

        let outcome = match_keywords(&jd_keywords, &resume_keywords, &resume_lower, &self.synonyms);
        let phrase = phrase_score(job_description, resume_text);
        let achievement = achievement_score(resume_text);

        let ats = round2(
            ATS_WEIGHTS.keyword * outcome.score
                + ATS_WEIGHTS.phrase * phrase
                + ATS_WEIGHTS.achievement * achievement,
        );

        let missing_keywords = rank_missing_keywords(&outcome);

        // ats enters twice: once as the ats slot, once as the similarity
        // slot (see COMPOSITE_WEIGHTS).
        let raw = COMPOSITE_WEIGHTS.skills * skill
            + COMPOSITE_WEIGHTS.ats * ats
            + COMPOSITE_WEIGHTS.similarity * ats
            - penalty;

        ScoreReport {
            score: clamp_round(raw),
            ats_score: ats,
            similarity_with_jd: Some(ats),
            keyword_score: outcome.score,
            phrase_score: phrase,
            achievement_score: achievement,
            skill_score: skill,
            grammar_penalty: penalty,
            skills_found,
            missing_keywords,
            grammar_issues,
            keyword_matches: outcome.matches,
        }
    }
}

fn rank_missing_keywords(outcome: &KeywordMatchOutcome) -> Vec<String> {
    let mut missing: Vec<String> = outcome
        .unmatched_keywords()
        .filter(|k| k.chars().count() >= MISSING_KEYWORD_MIN_CHARS)
        .map(str::to_string)
        .collect();

    // Longest first; lexicographic tie-break keeps the ranking total.
    missing.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    missing.truncate(MISSING_KEYWORD_LIMIT);
    missing
}

fn clamp_round(raw: f64) -> u32 {
    raw.round().clamp(0.0, 100.0) as u32
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::keywords::MatchKind;

    fn engine() -> AnalysisEngine {
        AnalysisEngine::default()
    }

    const JD: &str = "Python SQL database experience required";
    const RESUME: &str = "5 years of Python and MySQL development, improved throughput by 20%";

    #[test]
    fn scenario_python_sql_resume() {
        let report = engine().analyze(JD, RESUME);

        let kind = |kw: &str| {
            report
                .keyword_matches
                .iter()
                .find(|m| m.keyword == kw)
                .unwrap()
                .kind
        };

        assert_eq!(kind("python"), MatchKind::Exact);
        assert_eq!(kind("sql"), MatchKind::Semantic);
        assert_eq!(kind("database"), MatchKind::Semantic);
        assert!(report.achievement_score > 0.0);
        assert_eq!(report.similarity_with_jd, Some(report.ats_score));
        assert!(report.score > 40 && report.score < 100);
    }

    #[test]
    fn scenario_exact_sub_scores() {
        let report = engine().analyze(JD, RESUME);

        // 3 of 5 JD keywords matched; no bigram hits; "5" and "20%".
        assert_eq!(report.keyword_score, 60.0);
        assert_eq!(report.phrase_score, 0.0);
        assert_eq!(report.achievement_score, 20.0);
        assert_eq!(report.ats_score, 44.0);
        assert_eq!(report.skill_score, 40.0);
        assert_eq!(report.score, 43);
        assert_eq!(
            report.missing_keywords,
            vec!["experience".to_string(), "required".to_string()]
        );
    }

    #[test]
    fn scenario_empty_jd_short_resume() {
        let report = engine().analyze("", "thirty characters of plain text");

        assert_eq!(report.similarity_with_jd, None);
        assert_eq!(report.ats_score, 0.0);
        assert!(report.missing_keywords.is_empty());
        assert!(report.score < 10);
    }

    #[test]
    fn blank_jd_treated_as_absent() {
        let report = engine().analyze("   \n  ", RESUME);
        assert_eq!(report.similarity_with_jd, None);
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let first = engine().analyze(JD, RESUME);
        let second = engine().analyze(JD, RESUME);
        assert_eq!(first, second);
    }

    #[test]
    fn adding_exact_keyword_never_lowers_keyword_score() {
        let before = engine().analyze(JD, RESUME);
        let enriched = format!("{RESUME} required experience");
        let after = engine().analyze(JD, &enriched);
        assert!(after.keyword_score >= before.keyword_score);
    }

    #[test]
    fn matched_keywords_never_listed_missing() {
        let report = engine().analyze(JD, RESUME);
        for m in &report.keyword_matches {
            if m.kind != MatchKind::Unmatched {
                assert!(!report.missing_keywords.contains(&m.keyword));
            }
        }
    }

    #[test]
    fn all_fields_bounded() {
        let jd = "kubernetes terraform ansible prometheus grafana observability platform \
                  reliability engineering distributed systems";
        let resume = "short  text. lowercase sentence. 10% 20% 30% 40% 50% 60% 70% 80% 90% \
                      100% 110% 120%";
        let report = engine().analyze(jd, resume);

        assert!(report.score <= 100);
        for value in [
            report.ats_score,
            report.keyword_score,
            report.phrase_score,
            report.achievement_score,
            report.skill_score,
        ] {
            assert!((0.0..=100.0).contains(&value), "out of range: {value}");
        }
        assert!(report.missing_keywords.len() <= 30);
        assert!(report.grammar_issues.len() <= 8);
        assert!(report.grammar_penalty <= 10.0);
    }

    #[test]
    fn missing_keywords_ranked_longest_first_and_capped() {
        let jd: String = (0..40)
            .map(|i| format!("zzqword{i:02} "))
            .collect::<String>();
        let report = engine().analyze(&jd, "nothing relevant here at all");

        assert_eq!(report.missing_keywords.len(), 30);
        let lengths: Vec<usize> = report
            .missing_keywords
            .iter()
            .map(|k| k.chars().count())
            .collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn custom_synonym_table_changes_matching() {
        let table = SynonymTable::from_clusters(&[("widget", &["widget", "gizmo"])]);
        let custom = AnalysisEngine::new(table, crate::skills::default_skills());

        let report = custom.analyze("widget specialist", "gizmo builder for ten years");
        let widget = report
            .keyword_matches
            .iter()
            .find(|m| m.keyword == "widget")
            .unwrap();
        assert_eq!(widget.kind, MatchKind::Semantic);
    }

    #[test]
    fn empty_resume_resolves_to_zero_ratios() {
        let report = engine().analyze(JD, "");
        assert_eq!(report.keyword_score, 0.0);
        assert_eq!(report.achievement_score, 0.0);
        assert!(report.skills_found.is_empty());
    }
}
