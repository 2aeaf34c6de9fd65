// ABOUTME: User service client answering existence checks for review authors
// ABOUTME: Maps HTTP statuses to the ExistenceCheck taxonomy, never to silent success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

use crate::external::{classify_response, ExistenceServiceConfig};
use crate::validators::{ExistenceCheck, UserValidator};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;
use uuid::Uuid;

/// HTTP client for the user service existence endpoint
pub struct UserServiceClient {
    client: Client,
    config: ExistenceServiceConfig,
}

impl UserServiceClient {
    /// Create a new user service client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(config: ExistenceServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl UserValidator for UserServiceClient {
    async fn check_user(&self, id: Uuid) -> ExistenceCheck {
        let url = format!("{}/users/{id}", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => classify_response(&response),
            Err(e) => {
                warn!("User existence check for {id} produced no status: {e}");
                ExistenceCheck::Unclassified(e.to_string())
            }
        }
    }
}
