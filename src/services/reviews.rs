// ABOUTME: Review orchestration - validates references, assigns identity, translates failures
// ABOUTME: Enforces user-check-then-coach-check ordering so user errors win when both fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! Review orchestration layer
//!
//! The service confirms that the referenced user and coach exist before any
//! write, generates identifiers and timestamps, and delegates persistence to
//! [`ReviewsManager`]. Heterogeneous failures (local store errors, remote
//! validator outcomes) are translated into the closed error taxonomy in
//! [`crate::errors`] and surfaced unchanged to the transport layer. There is
//! no retry logic here: a failed remote check or store write aborts the whole
//! operation.

use crate::database::ReviewsManager;
use crate::errors::{AppError, AppResult};
use crate::models::{CreateReviewCommand, Review, UpdateReviewCommand};
use crate::validators::{CoachValidator, ExistenceCheck, UserValidator};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Review use-case orchestrator
pub struct ReviewService {
    reviews: ReviewsManager,
    user_validator: Arc<dyn UserValidator>,
    coach_validator: Arc<dyn CoachValidator>,
}

impl ReviewService {
    /// Create a new review service
    #[must_use]
    pub fn new(
        reviews: ReviewsManager,
        user_validator: Arc<dyn UserValidator>,
        coach_validator: Arc<dyn CoachValidator>,
    ) -> Self {
        Self {
            reviews,
            user_validator,
            coach_validator,
        }
    }

    /// Create a review for a coach after validating both references
    ///
    /// The user check runs first, then the coach check; only after both pass
    /// is the identifier generated and the transactional write issued. No
    /// partial success is observable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` / `CoachNotFound` when the referenced entity is
    /// absent, `UserServiceError` / `CoachServiceError` when a validator
    /// fails with a status, `DependencyUnclassified` when it fails without
    /// one, and `DatabaseError` when the write fails
    pub async fn create_coach_review(&self, cmd: &CreateReviewCommand) -> AppResult<Review> {
        match self.user_validator.check_user(cmd.user_id).await {
            ExistenceCheck::Found => {}
            ExistenceCheck::NotFound => return Err(AppError::user_not_found(cmd.user_id)),
            ExistenceCheck::ServiceError(msg) => return Err(AppError::user_service(msg)),
            ExistenceCheck::Unclassified(msg) => {
                return Err(AppError::dependency_unclassified("user service", msg))
            }
        }

        match self.coach_validator.check_coach(cmd.coach_id).await {
            ExistenceCheck::Found => {}
            ExistenceCheck::NotFound => return Err(AppError::coach_not_found(cmd.coach_id)),
            ExistenceCheck::ServiceError(msg) => return Err(AppError::coach_service(msg)),
            ExistenceCheck::Unclassified(msg) => {
                return Err(AppError::dependency_unclassified("coach service", msg))
            }
        }

        let now = Utc::now();
        let review = Review {
            id: Uuid::new_v4(),
            user_id: cmd.user_id,
            body: cmd.body.clone(),
            created_time: now,
            updated_time: now,
        };

        self.reviews
            .create_coach_review(&review, cmd.coach_id)
            .await?;

        info!("Created review {} for coach {}", review.id, cmd.coach_id);
        Ok(review)
    }

    /// Fetch one review by identifier
    ///
    /// # Errors
    ///
    /// Propagates `ReviewNotFound` verbatim so the transport layer can map it
    pub async fn get_review_by_id(&self, id: Uuid) -> AppResult<Review> {
        self.reviews.get_review_by_id(id).await
    }

    /// Update a review and return the authoritative post-update state
    ///
    /// The update timestamp is stamped unconditionally; after the write the
    /// entity is re-read by id. The re-read assumes read-after-write
    /// consistency of the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the write or the re-read fails
    pub async fn update_review(&self, cmd: &UpdateReviewCommand) -> AppResult<Review> {
        let updated_time = Utc::now();

        self.reviews
            .update_review(cmd.id, cmd.body.as_deref(), updated_time)
            .await?;

        self.reviews.get_review_by_id(cmd.id).await
    }

    /// Delete a review by identifier, returning the pre-deletion entity
    ///
    /// The entity is read first; if that read finds nothing the operation
    /// fails with `ReviewNotFound` without attempting deletion. The delete
    /// itself is idempotent, so a concurrent removal between the read and the
    /// delete is accepted as best-effort semantics.
    ///
    /// # Errors
    ///
    /// Returns `ReviewNotFound` when the review is absent, `DatabaseError`
    /// when the read or delete fails
    pub async fn delete_review_by_id(&self, id: Uuid) -> AppResult<Review> {
        let review = self.reviews.get_review_by_id(id).await?;

        self.reviews.delete_review_by_id(id).await?;

        info!("Deleted review {id}");
        Ok(review)
    }

    /// Fetch all reviews for one coach
    ///
    /// Coach existence is not re-checked on read.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_coach_reviews(&self, coach_id: Uuid) -> AppResult<Vec<Review>> {
        self.reviews.get_coach_reviews(coach_id).await
    }

    /// Fetch reviews for many coaches, grouped by coach identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_coaches_reviews(
        &self,
        coach_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, Vec<Review>>> {
        self.reviews.get_coaches_reviews(coach_ids).await
    }
}
