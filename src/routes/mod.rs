// ABOUTME: Route module organization for the attempt predictor HTTP endpoints
// ABOUTME: Assembles page, proxy, and health routes with CORS and request tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the attempt predictor
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the page pipeline or the model gateway.

/// Health check and system status routes
pub mod health;
/// Same-origin proxy to the prediction backend
pub mod model;
/// Browser page routes
pub mod page;

/// Health check route handlers
pub use health::HealthRoutes;
/// Proxy route handler
pub use model::ModelProxyRoutes;
/// Page route handlers
pub use page::PageRoutes;

use crate::middleware::{setup_cors, with_request_tracing};
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// Build the complete application router
#[must_use]
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let router = Router::new()
        .merge(PageRoutes::routes(Arc::clone(resources)))
        .merge(ModelProxyRoutes::routes(Arc::clone(resources)))
        .merge(HealthRoutes::routes());

    with_request_tracing(router).layer(setup_cors(&resources.config))
}
