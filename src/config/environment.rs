// ABOUTME: Environment-only server configuration with sensible defaults
// ABOUTME: Reads ports, database URL, and external service endpoints from the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! Server configuration loaded from the environment
//!
//! | Variable | Default | Purpose |
//! |---|---|---|
//! | `HTTP_PORT` | `8080` | HTTP listen port |
//! | `DATABASE_URL` | `sqlite:reviews.db` | `SQLite` connection string |
//! | `USER_SERVICE_URL` | required | Base URL of the user service |
//! | `COACH_SERVICE_URL` | required | Base URL of the coach service |
//! | `EXTERNAL_SERVICE_TIMEOUT_SECS` | `5` | Per-request timeout for existence checks |

use crate::errors::{AppError, AppResult};
use crate::external::ExistenceServiceConfig;
use std::env;

/// Review service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database connection string
    pub database_url: String,
    /// User service existence-check endpoint
    pub user_service: ExistenceServiceConfig,
    /// Coach service existence-check endpoint
    pub coach_service: ExistenceServiceConfig,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or unparseable
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT: {e}")))?,
            Err(_) => 8080,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:reviews.db".to_owned());

        let timeout_secs = match env::var("EXTERNAL_SERVICE_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                AppError::config(format!("Invalid EXTERNAL_SERVICE_TIMEOUT_SECS: {e}"))
            })?,
            Err(_) => 5,
        };

        let user_service_url = env::var("USER_SERVICE_URL")
            .map_err(|_| AppError::config("USER_SERVICE_URL must be set"))?;
        let coach_service_url = env::var("COACH_SERVICE_URL")
            .map_err(|_| AppError::config("COACH_SERVICE_URL must be set"))?;

        Ok(Self {
            http_port,
            database_url,
            user_service: ExistenceServiceConfig {
                base_url: user_service_url,
                timeout_secs,
            },
            coach_service: ExistenceServiceConfig {
                base_url: coach_service_url,
                timeout_secs,
            },
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} database_url={} user_service={} coach_service={}",
            self.http_port,
            self.database_url,
            self.user_service.base_url,
            self.coach_service.base_url
        )
    }
}
