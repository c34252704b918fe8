pub mod analyze_request;
pub mod analyze_response;
pub mod history;

pub use analyze_request::AnalyzeRequest;
pub use analyze_response::{AnalyzeResponse, ScoreBreakdownDto};
pub use history::{DeleteHistoryRequest, HistoryEntry};
