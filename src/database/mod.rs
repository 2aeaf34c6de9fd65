// ABOUTME: Database management with schema setup for the review service
// ABOUTME: Owns the review and coach_review tables and their migration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! Review persistence layer
//!
//! One table holds `Review` rows keyed by identifier; a join table maps a
//! coach identifier to a review identifier. The one-coach-per-review rule is
//! enforced at the application layer, the schema itself only requires a pair.

/// Review storage and coach-link management
pub mod reviews;

pub use reviews::ReviewsManager;

use crate::errors::{AppError, AppResult};
use sqlx::SqlitePool;

/// Create the review schema if it does not exist
///
/// # Errors
///
/// Returns an error if schema creation fails
pub async fn migrate(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS review (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            body TEXT NOT NULL DEFAULT '',
            created_time TEXT NOT NULL,
            updated_time TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::database(format!("Failed to create review table: {e}")))?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS coach_review (
            coach_id TEXT NOT NULL,
            review_id TEXT NOT NULL REFERENCES review(id),
            PRIMARY KEY (coach_id, review_id)
        )
        ",
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::database(format!("Failed to create coach_review table: {e}")))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_coach_review_coach ON coach_review (coach_id)")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create coach_review index: {e}")))?;

    Ok(())
}
