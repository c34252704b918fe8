use chrono::{DateTime, Utc};
use deadpool_postgres::PoolError;
use serde_json::Value;
use tokio_postgres::Error as PgError;
use tracing::instrument;

use crate::db::util::{normalize_json, TimedClientExt};
use crate::db::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("analysis record not found: {0}")]
    NotFound(i64),
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisRecordInsert {
    pub user_id: String,
    pub score: i32,
    pub similarity_with_jd: Option<f64>,
    pub ats_score: f64,
    pub missing_keywords: Option<Value>,
    pub skills_found: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisHistoryRow {
    pub id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub score: i32,
    pub similarity_with_jd: Option<f64>,
    pub ats_score: f64,
}

fn map_history_row(row: tokio_postgres::Row) -> AnalysisHistoryRow {
    AnalysisHistoryRow {
        id: row.get::<_, i64>("id"),
        user_id: row.get("user_id"),
        created_at: row.get::<_, DateTime<Utc>>("created_at"),
        score: row.get::<_, i32>("score"),
        similarity_with_jd: row.get::<_, Option<f64>>("similarity_with_jd"),
        ats_score: row.get::<_, f64>("ats_score"),
    }
}

/// Insert one analysis snapshot and return its id.
#[instrument(skip(pool, record))]
pub async fn insert_analysis(
    pool: &PgPool,
    record: &AnalysisRecordInsert,
) -> Result<i64, AnalysisStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare_cached(
            "INSERT INTO resume.analysis_history (
                user_id,
                score,
                similarity_with_jd,
                ats_score,
                missing_keywords,
                skills_found,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id",
        )
        .await?;

    let created_at = record.created_at.unwrap_or_else(Utc::now);
    let row = client
        .timed_query_one(
            &stmt,
            &[
                &record.user_id,
                &record.score,
                &record.similarity_with_jd,
                &record.ats_score,
                &normalize_json(&record.missing_keywords),
                &normalize_json(&record.skills_found),
                &created_at,
            ],
            "insert_analysis",
        )
        .await?;

    Ok(row.get::<_, i64>(0))
}

/// A user's most recent analyses, newest first. The limit is capped server
/// side.
#[instrument(skip(pool))]
pub async fn fetch_history(
    pool: &PgPool,
    user_id: &str,
    limit: usize,
) -> Result<Vec<AnalysisHistoryRow>, AnalysisStorageError> {
    let client = pool.get().await?;
    let limit_i64 = i64::try_from(limit.min(500)).unwrap_or(0);

    let stmt = client
        .prepare_cached(
            "SELECT id, user_id, created_at, score, similarity_with_jd, ats_score
             FROM resume.analysis_history
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2",
        )
        .await?;

    let rows = client
        .timed_query(&stmt, &[&user_id, &limit_i64], "fetch_history")
        .await?;
    Ok(rows.into_iter().map(map_history_row).collect())
}

/// Delete one analysis record. `NotFound` when the id does not exist.
#[instrument(skip(pool))]
pub async fn delete_analysis(pool: &PgPool, id: i64) -> Result<(), AnalysisStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare_cached("DELETE FROM resume.analysis_history WHERE id = $1")
        .await?;

    let deleted = client
        .timed_execute(&stmt, &[&id], "delete_analysis")
        .await?;

    if deleted == 0 {
        return Err(AnalysisStorageError::NotFound(id));
    }

    Ok(())
}
