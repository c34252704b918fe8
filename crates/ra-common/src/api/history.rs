use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::analysis_history::AnalysisHistoryRow;

/// One entry of a user's analysis history, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub doc_id: i64,
    pub timestamp: DateTime<Utc>,
    pub score: i32,
    pub similarity_with_jd: Option<f64>,
    pub ats_score: f64,
}

impl From<AnalysisHistoryRow> for HistoryEntry {
    fn from(row: AnalysisHistoryRow) -> Self {
        Self {
            doc_id: row.id,
            timestamp: row.created_at,
            score: row.score,
            similarity_with_jd: row.similarity_with_jd,
            ats_score: row.ats_score,
        }
    }
}

/// Body of the history delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteHistoryRequest {
    #[serde(alias = "docId")]
    pub doc_id: i64,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_request_accepts_camel_case() {
        let request: DeleteHistoryRequest =
            serde_json::from_str(r#"{"docId": 7, "userId": "u-1"}"#).unwrap();
        assert_eq!(request.doc_id, 7);
        assert_eq!(request.user_id.as_deref(), Some("u-1"));
    }

    #[test]
    fn entry_maps_from_row() {
        let row = AnalysisHistoryRow {
            id: 3,
            user_id: "demoUser".into(),
            created_at: Utc::now(),
            score: 72,
            similarity_with_jd: Some(44.0),
            ats_score: 44.0,
        };
        let entry = HistoryEntry::from(row);
        assert_eq!(entry.doc_id, 3);
        assert_eq!(entry.similarity_with_jd, Some(44.0));
    }
}
