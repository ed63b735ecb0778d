// ABOUTME: Main library entry point for the powerlifting attempt predictor
// ABOUTME: Provides the prediction form, backend proxy, page sessions, and HTML rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Attempt Predictor
//!
//! A small web application in front of a machine learning backend that
//! recommends squat, bench and deadlift attempts for a powerlifting meet.
//!
//! ## Features
//!
//! - **Input collection**: division, sex and bodyweight class, with the
//!   class list tied to the selected sex
//! - **Same-origin proxy**: `POST /api/model` relays requests and replies
//!   to the prediction backend
//! - **Server-rendered page**: recommendation cards, estimated total and
//!   charts revealed on demand
//!
//! ## Architecture
//!
//! - **Form**: typed selections and validation
//! - **Gateway**: one-shot forwarding to the backend
//! - **Page**: per-session state and the submission pipeline
//! - **Render**: HTML and text views of the page state
//! - **Routes**: axum handlers over shared [`resources::ServerResources`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use attempt_predictor::config::environment::ServerConfig;
//! use attempt_predictor::resources::ServerResources;
//! use attempt_predictor::server::PredictorServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config)?);
//!     PredictorServer::new(resources).run().await
//! }
//! ```

/// Configuration management
pub mod config;

/// Input collector for the prediction form
pub mod form;

/// Gateway to the prediction backend
pub mod gateway;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request tracing and CORS
pub mod middleware;

/// Page sessions and the submission pipeline
pub mod page;

/// HTML and text rendering of page state
pub mod render;

/// Shared server resources
pub mod resources;

/// `HTTP` routes
pub mod routes;

/// Server lifecycle
pub mod server;

/// Utility functions and helpers
pub mod utils;
