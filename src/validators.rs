// ABOUTME: Existence validator contracts for the remote user and coach services
// ABOUTME: Distinguishes entity-absent from provider-unreachable so failures map precisely
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! Validator seams for cross-service referential checks
//!
//! Before committing a review, the orchestration layer confirms that the
//! referenced user and coach exist. The providers behind these traits must
//! distinguish "entity absent" from "provider unreachable or failing" so the
//! caller can map each outcome to its own error kind. A failure whose status
//! cannot be parsed at all is reported as [`ExistenceCheck::Unclassified`],
//! never as success.

use async_trait::async_trait;
use uuid::Uuid;

/// Outcome of a remote existence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExistenceCheck {
    /// The entity exists
    Found,
    /// The provider answered: the entity does not exist
    NotFound,
    /// The provider answered with an error status
    ServiceError(String),
    /// The provider produced no classifiable status (transport failure)
    Unclassified(String),
}

/// Existence check against the user service
#[async_trait]
pub trait UserValidator: Send + Sync {
    /// Check whether a user with the given identifier exists
    async fn check_user(&self, id: Uuid) -> ExistenceCheck;
}

/// Existence check against the coach service
#[async_trait]
pub trait CoachValidator: Send + Sync {
    /// Check whether a coach with the given identifier exists
    async fn check_coach(&self, id: Uuid) -> ExistenceCheck;
}
