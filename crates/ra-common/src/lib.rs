pub mod api;
pub mod db;
pub mod engine;
pub mod logging;
pub mod skills;
pub mod synonyms;
pub mod tokenize;

pub use engine::scoring::{AnalysisEngine, ScoreReport};
pub use synonyms::SynonymTable;
