// ABOUTME: Database operations for reviews and their coach links
// ABOUTME: Handles transactional dual-row writes, partial updates, and grouped bulk lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

use crate::errors::{AppError, AppResult};
use crate::models::Review;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::HashMap;
use tracing::error;
use uuid::Uuid;

/// Review database operations manager
pub struct ReviewsManager {
    pool: SqlitePool,
}

impl ReviewsManager {
    /// Create a new reviews manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a review and its coach link inside one transaction
    ///
    /// Neither row is visible unless the transaction commits: a failure on
    /// either insert rolls the whole write back.
    ///
    /// # Errors
    ///
    /// Returns an error if either insert or the commit fails
    pub async fn create_coach_review(&self, review: &Review, coach_id: Uuid) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to start transaction: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO review (id, user_id, body, created_time, updated_time)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(review.id.to_string())
        .bind(review.user_id.to_string())
        .bind(&review.body)
        .bind(review.created_time.to_rfc3339())
        .bind(review.updated_time.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert review: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO coach_review (coach_id, review_id)
            VALUES ($1, $2)
            ",
        )
        .bind(coach_id.to_string())
        .bind(review.id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to link review with coach: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))
    }

    /// Fetch one review by identifier
    ///
    /// # Errors
    ///
    /// Returns `ReviewNotFound` when zero rows match, `DatabaseError` on any
    /// other read failure
    pub async fn get_review_by_id(&self, id: Uuid) -> AppResult<Review> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, body, created_time, updated_time
            FROM review
            WHERE id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to get review {id}: {e}");
            AppError::database(format!("Failed to get review: {e}"))
        })?;

        row.map_or_else(|| Err(AppError::review_not_found(id)), |r| row_to_review(&r))
    }

    /// Apply a partial update to a review
    ///
    /// The UPDATE statement is built from an explicitly ordered list of
    /// (column, value) pairs so the generated SQL text is deterministic.
    /// The update timestamp is always written; a non-existent id affects
    /// zero rows silently.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn update_review(
        &self,
        id: Uuid,
        body: Option<&str>,
        updated_time: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut fields: Vec<(&str, String)> = Vec::new();
        if let Some(body) = body {
            fields.push(("body", body.to_owned()));
        }
        fields.push(("updated_time", updated_time.to_rfc3339()));

        let assignments = fields
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{column} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let statement = format!(
            "UPDATE review SET {assignments} WHERE id = ${}",
            fields.len() + 1
        );

        let mut query = sqlx::query(&statement);
        for (_, value) in &fields {
            query = query.bind(value);
        }
        query = query.bind(id.to_string());

        query.execute(&self.pool).await.map_err(|e| {
            error!("Failed to update review {id}: {e}");
            AppError::database(format!("Failed to update review: {e}"))
        })?;

        Ok(())
    }

    /// Delete a review and its coach link rows inside one transaction
    ///
    /// The link rows are removed as part of the same deletion so the
    /// review-iff-link invariant holds. A no-op for a missing id.
    ///
    /// # Errors
    ///
    /// Returns an error if either delete or the commit fails
    pub async fn delete_review_by_id(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to start transaction: {e}")))?;

        sqlx::query("DELETE FROM coach_review WHERE review_id = $1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete coach link: {e}")))?;

        sqlx::query("DELETE FROM review WHERE id = $1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete review: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))
    }

    /// Fetch all reviews for one coach, oldest first
    ///
    /// Ordered by `created_time` with the identifier as a stable tie-break.
    /// Returns an empty vec, not an error, when no reviews exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_coach_reviews(&self, coach_id: Uuid) -> AppResult<Vec<Review>> {
        let rows = sqlx::query(
            r"
            SELECT review.id, review.user_id, review.body, review.created_time, review.updated_time
            FROM review
            JOIN coach_review ON review.id = coach_review.review_id
            WHERE coach_review.coach_id = $1
            ORDER BY review.created_time ASC, review.id ASC
            ",
        )
        .bind(coach_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to get reviews for coach {coach_id}: {e}");
            AppError::database(format!("Failed to get coach reviews: {e}"))
        })?;

        rows.iter().map(row_to_review).collect()
    }

    /// Fetch reviews for many coaches in one round trip, grouped by coach
    ///
    /// Coaches with no reviews are absent from the result map. An empty input
    /// yields an empty map without querying the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_coaches_reviews(
        &self,
        coach_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, Vec<Review>>> {
        let mut grouped: HashMap<Uuid, Vec<Review>> = HashMap::new();

        if coach_ids.is_empty() {
            return Ok(grouped);
        }

        let placeholders = (1..=coach_ids.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let statement = format!(
            r"
            SELECT coach_review.coach_id,
                   review.id, review.user_id, review.body, review.created_time, review.updated_time
            FROM review
            JOIN coach_review ON review.id = coach_review.review_id
            WHERE coach_review.coach_id IN ({placeholders})
            ORDER BY review.created_time ASC, review.id ASC
            "
        );

        let mut query = sqlx::query(&statement);
        for coach_id in coach_ids {
            query = query.bind(coach_id.to_string());
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!("Failed to get reviews for {} coaches: {e}", coach_ids.len());
            AppError::database(format!("Failed to get coaches reviews: {e}"))
        })?;

        for row in &rows {
            let coach_id_str: String = row.get("coach_id");
            let coach_id = Uuid::parse_str(&coach_id_str)
                .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?;
            grouped
                .entry(coach_id)
                .or_default()
                .push(row_to_review(row)?);
        }

        Ok(grouped)
    }
}

/// Convert a database row to a `Review`
fn row_to_review(row: &SqliteRow) -> AppResult<Review> {
    let id_str: String = row.get("id");
    let user_id_str: String = row.get("user_id");
    let body: String = row.get("body");
    let created_time_str: String = row.get("created_time");
    let updated_time_str: String = row.get("updated_time");

    let id = Uuid::parse_str(&id_str)
        .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?;
    let user_id = Uuid::parse_str(&user_id_str)
        .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?;
    let created_time = DateTime::parse_from_rfc3339(&created_time_str)
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
        .with_timezone(&Utc);
    let updated_time = DateTime::parse_from_rfc3339(&updated_time_str)
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
        .with_timezone(&Utc);

    Ok(Review {
        id,
        user_id,
        body,
        created_time,
        updated_time,
    })
}
