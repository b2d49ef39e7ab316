use crate::{SourceError, SubmissionSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schouw_types::{SubmissionId, SubmissionRecord, SubmissionType};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

/// Reads submissions from the `submissions` table.
///
/// The pool is opened by [`connect`](Self::connect) at startup and released
/// by [`close`](Self::close) at shutdown.
pub struct PostgresSubmissionSource {
    pool: PgPool,
}

impl PostgresSubmissionSource {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, SourceError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        log::info!("Connected to submission database (max {} connections)", max_connections);
        Ok(Self { pool })
    }

    /// Wraps an existing pool, e.g. one shared with the write API.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `submissions` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), SourceError> {
        let migration_sql = include_str!("../migrations/001_submissions.sql");

        // Use raw_sql for multi-statement migrations
        sqlx::raw_sql(migration_sql).execute(&self.pool).await?;

        log::info!("Submission schema is up to date");
        Ok(())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), SourceError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        log::debug!("Submission database pool closed");
    }
}

#[async_trait]
impl SubmissionSource for PostgresSubmissionSource {
    async fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, SourceError> {
        let row = sqlx::query(
            r#"
            SELECT id, type, street_name, apartment_number, city, date,
                   structural_defects, decay_magnitude, defect_intensity,
                   description, photo_url, latitude, longitude, submitted_by
            FROM submissions
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let record = record_from_row(id, &row)?;
                log::debug!("Fetched submission {} from database", id);
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        "PostgresSubmissionSource"
    }
}

fn record_from_row(id: &SubmissionId, row: &PgRow) -> Result<SubmissionRecord, SourceError> {
    let raw_type: String = row.try_get("type")?;
    let submission_type = raw_type
        .parse::<SubmissionType>()
        .map_err(|message| SourceError::Decode {
            id: id.clone(),
            message,
        })?;
    let inspection_date: DateTime<Utc> = row.try_get("date")?;

    Ok(SubmissionRecord {
        id: SubmissionId::new(row.try_get::<String, _>("id")?),
        submission_type,
        street_name: row.try_get("street_name")?,
        apartment_number: row.try_get("apartment_number")?,
        city: row.try_get("city")?,
        inspection_date,
        structural_defects: row.try_get("structural_defects")?,
        decay_magnitude: row.try_get("decay_magnitude")?,
        defect_intensity: row.try_get("defect_intensity")?,
        description: row.try_get("description")?,
        photo_url: row.try_get("photo_url")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        submitted_by: row.try_get("submitted_by")?,
    })
}
