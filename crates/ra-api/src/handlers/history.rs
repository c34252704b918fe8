use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use ra_common::api::analyze_request::DEFAULT_USER_ID;
use ra_common::api::{DeleteHistoryRequest, HistoryEntry};
use ra_common::db::{delete_analysis, fetch_history};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
}

pub async fn list_history(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let user_id = query.user_id.as_deref().unwrap_or(DEFAULT_USER_ID);

    let rows = fetch_history(&state.pool, user_id, HISTORY_LIMIT).await?;
    let entries: Vec<HistoryEntry> = rows.into_iter().map(HistoryEntry::from).collect();

    info!(user_id, count = entries.len(), "returned analysis history");
    Ok(Json(entries))
}

pub async fn delete_history(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(payload): Json<DeleteHistoryRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    delete_analysis(&state.pool, payload.doc_id).await?;

    info!(
        doc_id = payload.doc_id,
        user_id = payload.user_id.as_deref().unwrap_or(DEFAULT_USER_ID),
        "deleted analysis record"
    );
    Ok(Json(json!({ "message": "analysis record deleted" })))
}
