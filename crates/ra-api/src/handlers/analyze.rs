use axum::{extract::State, Json};
use serde_json::json;
use tracing::warn;

use ra_common::api::{AnalyzeRequest, AnalyzeResponse};
use ra_common::db::{insert_analysis, AnalysisRecordInsert};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

pub async fn analyze_resume(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if payload.resume_text.trim().is_empty() {
        return Err(ApiError::BadRequest("resume_text is empty".into()));
    }

    let report = state
        .engine
        .analyze(payload.job_description(), &payload.resume_text);

    if state.config.persist_history {
        let record = AnalysisRecordInsert {
            user_id: payload.user_id().to_string(),
            score: report.score as i32,
            similarity_with_jd: report.similarity_with_jd,
            ats_score: report.ats_score,
            missing_keywords: Some(json!(report.missing_keywords)),
            skills_found: Some(json!(report.skills_found)),
            created_at: None,
        };

        // Persistence is best-effort: the caller still gets the report when
        // the history store is down.
        if let Err(err) = insert_analysis(&state.pool, &record).await {
            warn!(error = %err, user_id = %record.user_id, "failed to persist analysis record");
        }
    }

    Ok(Json(AnalyzeResponse::from_report(
        report,
        &payload.resume_text,
    )))
}
