// ABOUTME: Main library entry point for the fitness center review service
// ABOUTME: Provides review orchestration, persistence, and HTTP transport for coach reviews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

#![deny(unsafe_code)]

//! # Review Service
//!
//! A service that manages reviews left by users about coaches in the fitness
//! center platform: create, fetch, update, delete a single review, and fetch
//! reviews for one or many coaches.
//!
//! ## Architecture
//!
//! The service follows a layered architecture:
//! - **Database**: transactional CRUD and aggregate queries over the `review`
//!   and `coach_review` tables
//! - **Validators**: existence checks against the external user and coach
//!   services, issued before any write
//! - **Services**: the orchestration layer that enforces validation-before-write
//!   and translates heterogeneous failures into one error taxonomy
//! - **Routes**: thin HTTP handlers mapping requests to service calls
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use review_service::config::environment::ServerConfig;
//! use review_service::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Review service configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management (environment-only)
pub mod config;

/// Review persistence over `SQLite`
pub mod database;

/// Unified error handling: error codes, domain errors, HTTP mapping
pub mod errors;

/// External API clients for the user and coach services
pub mod external;

/// Structured logging setup
pub mod logging;

/// Common data models for reviews
pub mod models;

/// HTTP routes for the review API
pub mod routes;

/// Review orchestration (validation-before-write, error translation)
pub mod services;

/// Existence validator contracts for remote user and coach lookups
pub mod validators;
