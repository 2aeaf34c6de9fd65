// ABOUTME: Core data models for reviews and the commands that create or mutate them
// ABOUTME: Reviews are keyed by client-generated UUIDs and linked to coaches via a join table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! Review data models
//!
//! The `Review` entity is the sole persisted entity of this service. Its
//! identifier is generated by the orchestration layer before persistence, so
//! creation can return the full entity without a read-back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's text feedback about a coach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier, generated at creation, immutable thereafter
    pub id: Uuid,
    /// Identifier of the authoring user; validated at creation time only
    pub user_id: Uuid,
    /// Free-form review text; may be empty
    pub body: String,
    /// Set once at creation, immutable
    pub created_time: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_time: DateTime<Utc>,
}

/// Command to create a review for a coach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewCommand {
    /// Identifier of the authoring user
    pub user_id: Uuid,
    /// Identifier of the reviewed coach
    pub coach_id: Uuid,
    /// Review text; may be empty
    #[serde(default)]
    pub body: String,
}

/// Command to update an existing review
///
/// Only the fields present in the command are written; the update timestamp
/// is stamped by the orchestration layer regardless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReviewCommand {
    /// Identifier of the review to update
    pub id: Uuid,
    /// New review text (if provided)
    pub body: Option<String>,
}
