pub mod achievements;
pub mod grammar;
pub mod keywords;
pub mod phrases;
pub mod scoring;
pub mod weights;

pub use grammar::GrammarIssue;
pub use keywords::{KeywordMatch, MatchKind};
pub use scoring::{AnalysisEngine, ScoreReport};
