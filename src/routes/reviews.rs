// ABOUTME: Route handlers for the review REST API
// ABOUTME: Maps HTTP requests to review service calls and domain entities to JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! Review routes
//!
//! Thin HTTP adapters over [`crate::services::ReviewService`]. Handlers parse
//! identifiers, delegate, and serialize; all failure mapping happens through
//! the error taxonomy.

use crate::errors::AppError;
use crate::models::{CreateReviewCommand, Review, UpdateReviewCommand};
use crate::routes::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Response for a single review
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Unique identifier
    pub id: String,
    /// Identifier of the authoring user
    pub user_id: String,
    /// Review text
    pub body: String,
    /// Creation timestamp
    pub created_time: String,
    /// Last update timestamp
    pub updated_time: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            user_id: review.user_id.to_string(),
            body: review.body,
            created_time: review.created_time.to_rfc3339(),
            updated_time: review.updated_time.to_rfc3339(),
        }
    }
}

/// Request body for creating a review
#[derive(Debug, Deserialize)]
pub struct CreateReviewBody {
    /// Identifier of the authoring user
    pub user_id: Uuid,
    /// Identifier of the reviewed coach
    pub coach_id: Uuid,
    /// Review text; may be empty
    #[serde(default)]
    pub body: String,
}

/// Request body for updating a review
#[derive(Debug, Deserialize)]
pub struct UpdateReviewBody {
    /// New review text (if provided)
    pub body: Option<String>,
}

/// Query parameters for the bulk coach reviews lookup
#[derive(Debug, Deserialize)]
pub struct CoachesReviewsParams {
    /// Comma-separated coach identifiers
    #[serde(default)]
    pub coach_ids: String,
}

/// Review routes handler
pub struct ReviewsRoutes;

impl ReviewsRoutes {
    /// Create all review routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/reviews", post(Self::handle_create))
            .route("/api/reviews/:id", get(Self::handle_get))
            .route("/api/reviews/:id", put(Self::handle_update))
            .route("/api/reviews/:id", delete(Self::handle_delete))
            .route("/api/coaches/reviews", get(Self::handle_coaches_reviews))
            .route("/api/coaches/:id/reviews", get(Self::handle_coach_reviews))
            .with_state(resources)
    }

    /// Parse a path identifier into a UUID
    fn parse_id(id: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(id).map_err(|e| AppError::invalid_input(format!("Invalid id {id}: {e}")))
    }

    /// Handle POST /api/reviews - Create a review for a coach
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateReviewBody>,
    ) -> Result<Response, AppError> {
        let cmd = CreateReviewCommand {
            user_id: body.user_id,
            coach_id: body.coach_id,
            body: body.body,
        };
        let review = resources.reviews.create_coach_review(&cmd).await?;

        let response: ReviewResponse = review.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/reviews/:id - Fetch one review
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id(&id)?;
        let review = resources.reviews.get_review_by_id(id).await?;

        let response: ReviewResponse = review.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /api/reviews/:id - Update a review
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(body): Json<UpdateReviewBody>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id(&id)?;
        let cmd = UpdateReviewCommand {
            id,
            body: body.body,
        };
        let review = resources.reviews.update_review(&cmd).await?;

        let response: ReviewResponse = review.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/reviews/:id - Delete a review, returning it
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id(&id)?;
        let review = resources.reviews.delete_review_by_id(id).await?;

        let response: ReviewResponse = review.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/coaches/:id/reviews - List reviews for one coach
    async fn handle_coach_reviews(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let coach_id = Self::parse_id(&id)?;
        let reviews = resources.reviews.get_coach_reviews(coach_id).await?;

        let response: Vec<ReviewResponse> = reviews.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/coaches/reviews?coach_ids=a,b - Grouped bulk lookup
    async fn handle_coaches_reviews(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<CoachesReviewsParams>,
    ) -> Result<Response, AppError> {
        let coach_ids = params
            .coach_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse_id)
            .collect::<Result<Vec<_>, _>>()?;

        let grouped = resources.reviews.get_coaches_reviews(&coach_ids).await?;

        let response: HashMap<String, Vec<ReviewResponse>> = grouped
            .into_iter()
            .map(|(coach_id, reviews)| {
                (
                    coach_id.to_string(),
                    reviews.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
