/// ATS blend: how the three JD-derived sub-scores combine into `ats_score`.
/// Keyword overlap dominates; phrases and quantified achievements refine.
pub const ATS_WEIGHTS: AtsWeights = AtsWeights {
    keyword: 0.70,
    phrase: 0.20,
    achievement: 0.10,
};

/// Final blend when a job description is present.
///
/// TODO: `ats_score` feeds both the `ats` and `similarity` slots, so the
/// JD-derived score is effectively weighted 0.85; collapsing the two slots
/// changes scoring calibration and needs explicit sign-off first.
pub const COMPOSITE_WEIGHTS: CompositeWeights = CompositeWeights {
    skills: 0.15,
    ats: 0.40,
    similarity: 0.45,
};

/// Final blend when no job description is supplied.
pub const FALLBACK_WEIGHTS: FallbackWeights = FallbackWeights {
    skills: 0.70,
    content_quality: 0.30,
};

#[derive(Debug, Clone, Copy)]
pub struct AtsWeights {
    pub keyword: f64,
    pub phrase: f64,
    pub achievement: f64,
}

impl AtsWeights {
    pub fn sum(&self) -> f64 {
        self.keyword + self.phrase + self.achievement
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompositeWeights {
    pub skills: f64,
    pub ats: f64,
    pub similarity: f64,
}

impl CompositeWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.ats + self.similarity
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FallbackWeights {
    pub skills: f64,
    pub content_quality: f64,
}

impl FallbackWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.content_quality
    }
}

/// Phrase scorer calibration.
pub const PHRASE_NO_BIGRAM_DEFAULT: f64 = 60.0;
pub const PHRASE_MATCH_BONUS: f64 = 20.0;

/// Achievement scorer calibration: points per quantified statement, capped.
pub const ACHIEVEMENT_POINTS_PER_MATCH: f64 = 10.0;

/// Fuzzy matcher thresholds, in characters.
pub const FUZZY_MIN_KEYWORD_CHARS: usize = 4;
pub const FUZZY_SHORT_PREFIX: usize = 3;
pub const FUZZY_LONG_PREFIX: usize = 5;
pub const FUZZY_LONG_KEYWORD_CHARS: usize = 6;

/// Missing-keyword ranking: only surface terms longer than this, at most
/// this many.
pub const MISSING_KEYWORD_MIN_CHARS: usize = 5;
pub const MISSING_KEYWORD_LIMIT: usize = 30;

/// Grammar heuristic caps and penalty.
pub const GRAMMAR_MAX_SENTENCES: usize = 10;
pub const GRAMMAR_MAX_FINDINGS: usize = 8;
pub const GRAMMAR_PENALTY_PER_FINDING: f64 = 2.0;
pub const GRAMMAR_PENALTY_CAP: f64 = 10.0;

/// Proxy for resume substance when no JD is available: chars / divisor,
/// capped at 100.
pub const CONTENT_QUALITY_DIVISOR: f64 = 50.0;
