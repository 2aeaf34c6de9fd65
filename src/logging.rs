// ABOUTME: Logging configuration and structured logging setup for the review service
// ABOUTME: Configures tracing-subscriber with env-filter controlled output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! Structured logging setup
//!
//! Log verbosity is controlled through `RUST_LOG` (standard env-filter
//! syntax); the service defaults to `info` for its own crate and `warn` for
//! dependencies.

use crate::errors::{AppError, AppResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging from the environment
///
/// # Errors
///
/// Returns an error if a subscriber is already installed
pub fn init_from_env() -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,review_service=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))
}
