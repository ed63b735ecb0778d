// ABOUTME: Core types and constants for the powerlifting attempt predictor
// ABOUTME: Foundation crate with error handling, prediction models, and weight-class tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Attempt Core
//!
//! Foundation crate providing shared types and constants for the attempt
//! predictor. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and form validation errors
//! - **constants**: Divisions, weight classes, endpoints, and display labels
//! - **models**: Prediction request and response types exchanged with the backend

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Prediction request and response data models
pub mod models;
