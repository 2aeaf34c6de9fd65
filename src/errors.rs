// ABOUTME: Unified error handling for the review service
// ABOUTME: Defines the closed error-kind taxonomy, HTTP status mapping, and JSON error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! # Unified Error Handling System
//!
//! This module provides the centralized error handling system for the review
//! service. Every operation returns one of a closed set of error kinds, each
//! carrying enough context (the offending identifier) for the transport layer
//! to report specifics. The orchestration layer never recovers from these
//! locally; the HTTP layer maps each kind to a protocol status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Review absent in the local store
    #[serde(rename = "REVIEW_NOT_FOUND")]
    ReviewNotFound,
    /// Referenced user absent in the remote user service
    #[serde(rename = "USER_NOT_FOUND")]
    UserNotFound,
    /// Referenced coach absent in the remote coach service
    #[serde(rename = "COACH_NOT_FOUND")]
    CoachNotFound,
    /// User service failed for any reason other than not-found
    #[serde(rename = "USER_SERVICE_ERROR")]
    UserServiceError,
    /// Coach service failed for any reason other than not-found
    #[serde(rename = "COACH_SERVICE_ERROR")]
    CoachServiceError,
    /// Remote dependency failed without a classifiable status
    #[serde(rename = "DEPENDENCY_UNCLASSIFIED")]
    DependencyUnclassified,
    /// Local store failure of any kind (connection, constraint, transaction)
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    /// The provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Configuration failure at startup
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::ReviewNotFound | Self::UserNotFound | Self::CoachNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::UserServiceError | Self::CoachServiceError | Self::DependencyUnclassified => {
                StatusCode::BAD_GATEWAY
            }
            Self::DatabaseError | Self::ConfigError | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ReviewNotFound => "The requested review was not found",
            Self::UserNotFound => "The referenced user was not found",
            Self::CoachNotFound => "The referenced coach was not found",
            Self::UserServiceError => "The user service failed to answer the existence check",
            Self::CoachServiceError => "The coach service failed to answer the existence check",
            Self::DependencyUnclassified => {
                "A remote dependency failed without a classifiable status"
            }
            Self::DatabaseError => "A database operation failed",
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigError => "The service configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Identifier of the offending resource, when known
    pub resource_id: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
        }
    }

    /// Attach the offending resource identifier
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Review not found in the local store
    #[must_use]
    pub fn review_not_found(id: Uuid) -> Self {
        Self::new(ErrorCode::ReviewNotFound, format!("Review {id} not found"))
            .with_resource_id(id.to_string())
    }

    /// Referenced user not found in the user service
    #[must_use]
    pub fn user_not_found(id: Uuid) -> Self {
        Self::new(ErrorCode::UserNotFound, format!("User {id} not found"))
            .with_resource_id(id.to_string())
    }

    /// Referenced coach not found in the coach service
    #[must_use]
    pub fn coach_not_found(id: Uuid) -> Self {
        Self::new(ErrorCode::CoachNotFound, format!("Coach {id} not found"))
            .with_resource_id(id.to_string())
    }

    /// User service failure (non-404 response)
    pub fn user_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UserServiceError, message)
    }

    /// Coach service failure (non-404 response)
    pub fn coach_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CoachServiceError, message)
    }

    /// Remote dependency failure with no parseable status
    pub fn dependency_unclassified(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DependencyUnclassified,
            format!("{service}: {}", message.into()),
        )
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an HTTP error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Offending resource identifier, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                resource_id: error.resource_id,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body: ErrorResponse = self.into();
        (status, Json(body)).into_response()
    }
}
