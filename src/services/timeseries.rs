use crate::config::DatabaseSettings;
use crate::models::RecommendationRecord;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the time-series store
#[derive(Debug, Error)]
pub enum TimeseriesError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Append-only time-series store for recommendation audit records
///
/// Each recommendation request appends exactly one row; rows are never
/// updated or deleted. Backed by TimescaleDB when available, plain Postgres
/// otherwise.
pub struct TimeseriesStore {
    pool: PgPool,
}

impl TimeseriesStore {
    /// Connect and bootstrap the schema
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, TimeseriesError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections.unwrap_or(10))
            .min_connections(settings.min_connections.unwrap_or(1))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(&settings.url)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;

        Ok(store)
    }

    /// Create the recommendations table and, best-effort, promote it to a
    /// TimescaleDB hypertable
    async fn init_schema(&self) -> Result<(), TimeseriesError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS restaurant_recommendations (
                id BIGSERIAL,
                session_id UUID NOT NULL,
                user_id TEXT,
                recorded_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                location TEXT NOT NULL,
                preference TEXT NOT NULL,
                recommendations JSONB NOT NULL,
                match_score DOUBLE PRECISION,
                PRIMARY KEY (id, recorded_at)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Hypertable creation fails on plain Postgres; that is fine
        let hypertable = sqlx::query(
            "SELECT create_hypertable('restaurant_recommendations', 'recorded_at', if_not_exists => TRUE)",
        )
        .execute(&self.pool)
        .await;

        if let Err(e) = hypertable {
            tracing::warn!("TimescaleDB hypertable not created (plain Postgres?): {}", e);
        }

        Ok(())
    }

    /// Append one recommendation audit record
    pub async fn record_recommendation(
        &self,
        record: &RecommendationRecord,
    ) -> Result<(), TimeseriesError> {
        let recommendations = serde_json::to_value(&record.recommendations)?;

        sqlx::query(
            r#"
            INSERT INTO restaurant_recommendations
                (session_id, user_id, recorded_at, location, preference, recommendations, match_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.session_id)
        .bind(&record.user_id)
        .bind(record.created_at)
        .bind(&record.location)
        .bind(&record.preference)
        .bind(recommendations)
        .bind(record.match_score)
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            "Recorded recommendation session {} ({} venues)",
            record.session_id,
            record.recommendations.len()
        );

        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, TimeseriesError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
