// ABOUTME: Same-origin proxy route forwarding prediction requests to the backend
// ABOUTME: Relays the backend status and JSON body, mapping failures to 500 { error }
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::gateway::ProxyReply;
use crate::resources::ServerResources;
use attempt_core::constants::endpoints;
use attempt_core::errors::AppError;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Model proxy routes handler
pub struct ModelProxyRoutes;

impl ModelProxyRoutes {
    /// Create the proxy route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::MODEL_PROXY, post(Self::handle_forward))
            .with_state(resources)
    }

    /// Handle POST /api/model
    ///
    /// The body is read raw so a malformed one produces the proxy's
    /// `500 { error }` rather than the extractor's rejection.
    async fn handle_forward(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<ProxyReply, AppError> {
        let payload: Value = serde_json::from_slice(&body).inspect_err(|e| {
            warn!(error = %e, "Rejected unparseable proxy request body");
        })?;

        debug!(body = %payload, "Received proxy request");
        Ok(resources.gateway.forward(payload).await)
    }
}
