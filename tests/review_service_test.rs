// ABOUTME: Tests for the review orchestration layer
// ABOUTME: Covers validation-before-write, error translation, and read-then-delete semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use common::{StubCoachValidator, StubUserValidator};
use review_service::errors::ErrorCode;
use review_service::models::{CreateReviewCommand, UpdateReviewCommand};
use review_service::validators::ExistenceCheck;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

fn create_cmd() -> CreateReviewCommand {
    CreateReviewCommand {
        user_id: Uuid::new_v4(),
        coach_id: Uuid::new_v4(),
        body: "Great coach, clear training plans".to_owned(),
    }
}

#[tokio::test]
async fn test_create_returns_complete_entity() {
    common::init_test_logging();
    let pool = common::create_test_db().await;
    let service = common::build_permissive_service(pool);

    let cmd = create_cmd();
    let review = service.create_coach_review(&cmd).await.unwrap();

    assert_eq!(review.user_id, cmd.user_id);
    assert_eq!(review.body, cmd.body);
    assert_eq!(review.created_time, review.updated_time);

    let fetched = service.get_review_by_id(review.id).await.unwrap();
    assert_eq!(fetched, review);
}

#[tokio::test]
async fn test_create_generates_unique_ids() {
    let pool = common::create_test_db().await;
    let service = common::build_permissive_service(pool);

    let cmd = create_cmd();
    let first = service.create_coach_review(&cmd).await.unwrap();
    let second = service.create_coach_review(&cmd).await.unwrap();
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_create_fails_when_user_missing() {
    let pool = common::create_test_db().await;
    let service = common::build_service(
        pool,
        Arc::new(StubUserValidator::new(ExistenceCheck::NotFound)),
        Arc::new(StubCoachValidator::new(ExistenceCheck::Found)),
    );

    let cmd = create_cmd();
    let err = service.create_coach_review(&cmd).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::UserNotFound);
    assert_eq!(err.resource_id, Some(cmd.user_id.to_string()));

    // Nothing was persisted.
    let reviews = service.get_coach_reviews(cmd.coach_id).await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_create_fails_when_coach_missing() {
    let pool = common::create_test_db().await;
    let service = common::build_service(
        pool,
        Arc::new(StubUserValidator::new(ExistenceCheck::Found)),
        Arc::new(StubCoachValidator::new(ExistenceCheck::NotFound)),
    );

    let cmd = create_cmd();
    let err = service.create_coach_review(&cmd).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CoachNotFound);

    let reviews = service.get_coach_reviews(cmd.coach_id).await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_user_error_wins_when_both_validators_fail() {
    let pool = common::create_test_db().await;
    let user = Arc::new(StubUserValidator::new(ExistenceCheck::ServiceError(
        "unavailable".to_owned(),
    )));
    let coach = Arc::new(StubCoachValidator::new(ExistenceCheck::NotFound));
    let service = common::build_service(pool, Arc::clone(&user), Arc::clone(&coach));

    let err = service.create_coach_review(&create_cmd()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::UserServiceError);

    // The coach check never runs once the user check has failed.
    assert_eq!(user.calls.load(Ordering::SeqCst), 1);
    assert_eq!(coach.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_coach_service_failure_maps_to_coach_error() {
    let pool = common::create_test_db().await;
    let service = common::build_service(
        pool,
        Arc::new(StubUserValidator::new(ExistenceCheck::Found)),
        Arc::new(StubCoachValidator::new(ExistenceCheck::ServiceError(
            "unexpected status 500".to_owned(),
        ))),
    );

    let err = service.create_coach_review(&create_cmd()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CoachServiceError);
}

#[tokio::test]
async fn test_unclassified_dependency_failure_is_surfaced() {
    let pool = common::create_test_db().await;
    let service = common::build_service(
        pool,
        Arc::new(StubUserValidator::new(ExistenceCheck::Unclassified(
            "connection refused".to_owned(),
        ))),
        Arc::new(StubCoachValidator::new(ExistenceCheck::Found)),
    );

    // A dependency failure with no classifiable status must never look like
    // success.
    let err = service.create_coach_review(&create_cmd()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DependencyUnclassified);
    assert!(err.message.contains("user service"));
}

#[tokio::test]
async fn test_update_advances_updated_time_strictly() {
    let pool = common::create_test_db().await;
    let service = common::build_permissive_service(pool);

    let review = service.create_coach_review(&create_cmd()).await.unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;
    let updated = service
        .update_review(&UpdateReviewCommand {
            id: review.id,
            body: Some("new text".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(updated.body, "new text");
    assert!(updated.updated_time > review.updated_time);
    assert_eq!(updated.created_time, review.created_time);

    let fetched = service.get_review_by_id(review.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_review_fails_on_reread() {
    let pool = common::create_test_db().await;
    let service = common::build_permissive_service(pool);

    let err = service
        .update_review(&UpdateReviewCommand {
            id: Uuid::new_v4(),
            body: Some("text".to_owned()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ReviewNotFound);
}

#[tokio::test]
async fn test_delete_returns_pre_deletion_entity() {
    let pool = common::create_test_db().await;
    let service = common::build_permissive_service(pool);

    let review = service.create_coach_review(&create_cmd()).await.unwrap();
    let before = service.get_review_by_id(review.id).await.unwrap();

    let deleted = service.delete_review_by_id(review.id).await.unwrap();
    assert_eq!(deleted, before);

    let err = service.get_review_by_id(review.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReviewNotFound);

    // The read-first contract makes a repeated delete fail as not-found.
    let err = service.delete_review_by_id(review.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReviewNotFound);
}

#[tokio::test]
async fn test_get_coaches_reviews_delegates_and_groups() {
    let pool = common::create_test_db().await;
    let service = common::build_permissive_service(pool);

    let user_id = Uuid::new_v4();
    let coach_a = Uuid::new_v4();
    let coach_b = Uuid::new_v4();
    for body in ["first", "second"] {
        service
            .create_coach_review(&CreateReviewCommand {
                user_id,
                coach_id: coach_a,
                body: body.to_owned(),
            })
            .await
            .unwrap();
    }

    let grouped = service
        .get_coaches_reviews(&[coach_a, coach_b])
        .await
        .unwrap();
    assert_eq!(grouped.get(&coach_a).map(Vec::len), Some(2));
    assert!(!grouped.contains_key(&coach_b));

    let empty = service.get_coaches_reviews(&[]).await.unwrap();
    assert!(empty.is_empty());
}
