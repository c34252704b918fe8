use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::Error as PgError;
use tracing::{info, instrument};

use crate::db::{DbPoolError, PgPool};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to run migration: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to build pool: {0}")]
    PoolBuild(#[from] DbPoolError),
}

struct Migration {
    id: i32,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    id: 1,
    description: "analysis history table with bounded scores",
    sql: r#"
CREATE SCHEMA IF NOT EXISTS resume;

CREATE TABLE IF NOT EXISTS resume.analysis_history (
    id BIGSERIAL PRIMARY KEY,
    user_id TEXT NOT NULL,
    score INTEGER NOT NULL,
    similarity_with_jd DOUBLE PRECISION,
    ats_score DOUBLE PRECISION NOT NULL,
    missing_keywords JSONB,
    skills_found JSONB,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT chk_score_range CHECK (score >= 0 AND score <= 100),
    CONSTRAINT chk_ats_score_range CHECK (ats_score >= 0.0 AND ats_score <= 100.0)
);

CREATE INDEX IF NOT EXISTS idx_analysis_history_user_recent
    ON resume.analysis_history(user_id, created_at DESC);
"#,
}];

#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    let mut client = pool.get().await?;
    client
        .batch_execute(
            "CREATE SCHEMA IF NOT EXISTS resume;
             CREATE TABLE IF NOT EXISTS resume.schema_migrations (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
             );",
        )
        .await?;

    for migration in MIGRATIONS {
        let already_applied: bool = client
            .query_one(
                "SELECT EXISTS (SELECT 1 FROM resume.schema_migrations WHERE id = $1)",
                &[&migration.id],
            )
            .await?
            .get(0);

        if already_applied {
            continue;
        }

        let tx = client.transaction().await?;
        tx.batch_execute(migration.sql).await?;
        tx.execute(
            "INSERT INTO resume.schema_migrations (id, description) VALUES ($1, $2)",
            &[&migration.id, &migration.description],
        )
        .await?;
        tx.commit().await?;

        info!(
            id = migration.id,
            description = migration.description,
            "applied migration"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_ids_are_unique_and_ordered() {
        let mut ids: Vec<i32> = MIGRATIONS.iter().map(|m| m.id).collect();
        let original = ids.clone();
        ids.sort();
        ids.dedup();
        assert_eq!(ids, original);
    }
}
