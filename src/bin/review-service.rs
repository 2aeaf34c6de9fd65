// ABOUTME: Server binary for the fitness center review service
// ABOUTME: Loads environment configuration, prepares the database, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

//! # Review Service Binary
//!
//! Starts the review HTTP API: environment configuration, structured logging,
//! `SQLite` pool with schema migration, existence-check clients for the user
//! and coach services, and an axum server with graceful shutdown.

use anyhow::Result;
use review_service::{
    config::environment::ServerConfig,
    database::{self, ReviewsManager},
    external::{CoachServiceClient, UserServiceClient},
    logging,
    routes::{self, ServerResources},
    services::ReviewService,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    logging::init_from_env()?;
    info!("Starting review service");
    info!("{}", config.summary());

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_options).await?;
    database::migrate(&pool).await?;
    info!("Database ready: {}", config.database_url);

    let user_validator = Arc::new(UserServiceClient::new(config.user_service.clone())?);
    let coach_validator = Arc::new(CoachServiceClient::new(config.coach_service.clone())?);

    let resources = Arc::new(ServerResources {
        reviews: ReviewService::new(ReviewsManager::new(pool), user_validator, coach_validator),
    });

    let app = routes::router(resources);
    let listener = TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Review service stopped");
    Ok(())
}

/// Resolve when the process receives a termination signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}
