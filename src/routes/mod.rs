// ABOUTME: Route module organization for the review service HTTP endpoints
// ABOUTME: Assembles the health and review routers around shared server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! Route module for the review service
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer. The transport layer maps
//! domain error kinds to HTTP statuses via [`crate::errors::AppError`]'s
//! `IntoResponse` implementation.

/// Health check and system status routes
pub mod health;

/// Review CRUD and coach lookup routes
pub mod reviews;

use crate::services::ReviewService;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared resources handed to every route handler
pub struct ServerResources {
    /// Review orchestration service
    pub reviews: ReviewService,
}

/// Build the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(reviews::ReviewsRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
