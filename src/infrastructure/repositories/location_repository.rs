//! Location Repository Implementation
//!
//! PostgreSQL implementation of the LocationRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Location, LocationData, LocationRepository, RepositoryError};
use crate::infrastructure::metrics;

const TABLE: &str = "locations";

/// Database row representation of the locations table.
#[derive(Debug, sqlx::FromRow)]
struct LocationRow {
    id: i64,
    name: String,
    latitude: f64,
    longitude: f64,
    color: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl LocationRow {
    fn into_location(self) -> Location {
        Location {
            id: self.id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            color: self.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL location repository implementation.
///
/// Each operation is a single statement, so row-level atomicity comes from
/// PostgreSQL. Concurrent updates of one row are last-write-wins.
#[derive(Clone)]
pub struct PgLocationRepository {
    pool: PgPool,
}

impl PgLocationRepository {
    /// Create a new PgLocationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn create(&self, data: &LocationData) -> Result<Location, RepositoryError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            INSERT INTO locations (name, latitude, longitude, color)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, latitude, longitude, color, created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(&data.color)
        .fetch_one(&self.pool)
        .await;
        metrics::record_db_query("insert", TABLE, start.elapsed().as_secs_f64());

        Ok(row?.into_location())
    }

    async fn find_all(&self) -> Result<Vec<Location>, RepositoryError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id, name, latitude, longitude, color, created_at, updated_at
            FROM locations
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        metrics::record_db_query("select_all", TABLE, start.elapsed().as_secs_f64());

        Ok(rows?.into_iter().map(LocationRow::into_location).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Location, RepositoryError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id, name, latitude, longitude, color, created_at, updated_at
            FROM locations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        metrics::record_db_query("select", TABLE, start.elapsed().as_secs_f64());

        row?
            .map(LocationRow::into_location)
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i64, data: &LocationData) -> Result<Location, RepositoryError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            UPDATE locations
            SET name = $2,
                latitude = $3,
                longitude = $4,
                color = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, latitude, longitude, color, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(&data.color)
        .fetch_optional(&self.pool)
        .await;
        metrics::record_db_query("update", TABLE, start.elapsed().as_secs_f64());

        row?
            .map(LocationRow::into_location)
            .ok_or(RepositoryError::NotFound(id))
    }
}
