//! Record repository
//!
//! Single-row operations against the records table. Lookups on a missing
//! id return `DbError::NotFound` instead of an empty result the caller
//! could forget to check.

use sqlx::{Row, SqlitePool};

use datashelf_core::{Record, RecordCategory, RecordValue};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

/// Record repository
pub struct RecordRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RecordRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all records, ordered by id (stable listing order).
    pub async fn list(&self) -> Result<Vec<Record>, DbError> {
        let rows = sqlx::query("SELECT id, data, data_type FROM records ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| Record {
                id: r.get("id"),
                value: r.get("data"),
                category: r.get("data_type"),
            })
            .collect())
    }

    /// Get a single record by id.
    pub async fn get(&self, id: i64) -> Result<Record, DbError> {
        let row = sqlx::query("SELECT id, data, data_type FROM records WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "record",
                id,
            })?;

        Ok(Record {
            id: row.get("id"),
            value: row.get("data"),
            category: row.get("data_type"),
        })
    }

    /// Insert a new record, returning it with its assigned id.
    pub async fn insert(
        &self,
        value: RecordValue,
        category: RecordCategory,
    ) -> Result<Record, DbError> {
        let row = sqlx::query("INSERT INTO records (data, data_type) VALUES ($1, $2) RETURNING id")
            .bind(value.as_str())
            .bind(category.as_str())
            .fetch_one(self.pool)
            .await?;

        Ok(Record {
            id: row.get("id"),
            value: value.into_string(),
            category: category.into_string(),
        })
    }

    /// Update the value of an existing record. The category is untouched.
    pub async fn update_value(&self, id: i64, value: RecordValue) -> Result<Record, DbError> {
        let row = sqlx::query(
            "UPDATE records SET data = $1 WHERE id = $2 RETURNING id, data, data_type",
        )
        .bind(value.as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "record",
            id,
        })?;

        Ok(Record {
            id: row.get("id"),
            value: row.get("data"),
            category: row.get("data_type"),
        })
    }

    /// Delete a record by id. Deletion is permanent and immediate.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "record",
                id,
            });
        }

        Ok(())
    }
}
