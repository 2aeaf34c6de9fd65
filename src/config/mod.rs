// ABOUTME: Configuration module organization for the review service
// ABOUTME: Environment variables are the only configuration source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

/// Environment-based server configuration
pub mod environment;

pub use environment::ServerConfig;
