// ABOUTME: External API clients for the user and coach services
// ABOUTME: Thin reqwest clients used only to confirm existence of referenced entities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! HTTP clients implementing the existence validator contracts
//!
//! Both clients follow the same classification: a 2xx response means the
//! entity exists, 404 means it is absent, any other status is a service
//! error, and a transport failure with no status at all is unclassified.

/// Coach service existence client
pub mod coach_client;
/// User service existence client
pub mod user_client;

pub use coach_client::CoachServiceClient;
pub use user_client::UserServiceClient;

use crate::validators::ExistenceCheck;
use reqwest::{Response, StatusCode};

/// Configuration for an existence-check client
#[derive(Debug, Clone)]
pub struct ExistenceServiceConfig {
    /// Base URL of the remote service
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ExistenceServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: 5,
        }
    }
}

/// Classify a status-coded response from an existence endpoint
pub(crate) fn classify_response(response: &Response) -> ExistenceCheck {
    let status = response.status();
    if status.is_success() {
        ExistenceCheck::Found
    } else if status == StatusCode::NOT_FOUND {
        ExistenceCheck::NotFound
    } else {
        ExistenceCheck::ServiceError(format!("unexpected status {status}"))
    }
}
