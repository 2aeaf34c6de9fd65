// ABOUTME: Service layer organization for the review service
// ABOUTME: Hosts the orchestration logic sitting between transport and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Center Platform

/// Review orchestration: validation-before-write and error translation
pub mod reviews;

pub use reviews::ReviewService;
