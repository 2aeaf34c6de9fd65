// ABOUTME: Shared test utilities for the review service integration tests
// ABOUTME: Provides in-memory database setup, stub validators, and service builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

#![allow(missing_docs, dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Shared test utilities for the review service
//!
//! Common setup functions to reduce duplication across integration tests.

use async_trait::async_trait;
use review_service::database::{self, ReviewsManager};
use review_service::routes::{self, ServerResources};
use review_service::services::ReviewService;
use review_service::validators::{CoachValidator, ExistenceCheck, UserValidator};
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Create an in-memory database with the review schema
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    database::migrate(&pool).await.unwrap();
    pool
}

/// Stub user validator returning a fixed outcome and counting calls
pub struct StubUserValidator {
    outcome: ExistenceCheck,
    pub calls: AtomicUsize,
}

impl StubUserValidator {
    pub const fn new(outcome: ExistenceCheck) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl UserValidator for StubUserValidator {
    async fn check_user(&self, _id: Uuid) -> ExistenceCheck {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Stub coach validator returning a fixed outcome and counting calls
pub struct StubCoachValidator {
    outcome: ExistenceCheck,
    pub calls: AtomicUsize,
}

impl StubCoachValidator {
    pub const fn new(outcome: ExistenceCheck) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CoachValidator for StubCoachValidator {
    async fn check_coach(&self, _id: Uuid) -> ExistenceCheck {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Build a review service over the given pool with stubbed validators
pub fn build_service(
    pool: SqlitePool,
    user: Arc<StubUserValidator>,
    coach: Arc<StubCoachValidator>,
) -> ReviewService {
    ReviewService::new(ReviewsManager::new(pool), user, coach)
}

/// Build a service where both referenced entities always exist
pub fn build_permissive_service(pool: SqlitePool) -> ReviewService {
    build_service(
        pool,
        Arc::new(StubUserValidator::new(ExistenceCheck::Found)),
        Arc::new(StubCoachValidator::new(ExistenceCheck::Found)),
    )
}

/// Build the application router over an in-memory database
pub async fn build_test_router() -> axum::Router {
    let pool = create_test_db().await;
    routes::router(Arc::new(ServerResources {
        reviews: build_permissive_service(pool),
    }))
}

/// Build the application router with explicit validator outcomes
pub async fn build_test_router_with_validators(
    user: ExistenceCheck,
    coach: ExistenceCheck,
) -> axum::Router {
    let pool = create_test_db().await;
    let service = build_service(
        pool,
        Arc::new(StubUserValidator::new(user)),
        Arc::new(StubCoachValidator::new(coach)),
    );
    routes::router(Arc::new(ServerResources { reviews: service }))
}
