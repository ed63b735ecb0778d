// ABOUTME: Browser page routes: render, form post, and chart reveal
// ABOUTME: Resolves the page session from its cookie and redirects back after every post
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::form::FormSelection;
use crate::page::{PredictionPage, Submission};
use crate::render::render_page;
use crate::resources::ServerResources;
use crate::utils::cookies::{session_cookie, session_id};
use attempt_core::constants::endpoints;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// `action` value that triggers a submission
const PREDICT_ACTION: &str = "predict";

/// Body of the page form post
#[derive(Debug, Deserialize)]
pub struct PageForm {
    /// Selections
    #[serde(flatten)]
    pub selection: FormSelection,
    /// Which button was pressed
    #[serde(default)]
    pub action: Option<String>,
}

/// Page routes handler
pub struct PageRoutes;

impl PageRoutes {
    /// Create the page routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::PAGE, get(Self::handle_show))
            .route(endpoints::PAGE, post(Self::handle_submit))
            .route(endpoints::REVEAL, post(Self::handle_reveal))
            .with_state(resources)
    }

    /// Handle GET / - render the caller's page
    async fn handle_show(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Response {
        let session = Self::resolve(&resources, &headers);
        let html = render_page(&session.page.snapshot());
        session.finish(&resources, Html(html))
    }

    /// Handle POST / - apply selections, and start a submission when asked
    ///
    /// Redirects as soon as the page is in `Submitting`; the backend call runs
    /// on its own task and the page refreshes until it settles.
    async fn handle_submit(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Form(form): Form<PageForm>,
    ) -> Response {
        let session = Self::resolve(&resources, &headers);

        if session.page.apply(&form.selection).is_ok()
            && form.action.as_deref() == Some(PREDICT_ACTION)
        {
            match session.page.start(Arc::clone(&resources.gateway)) {
                Ok(_task) => {
                    info!(session = %session.id, "Prediction submission started");
                }
                Err(Submission::Invalid(e)) => {
                    debug!(session = %session.id, error = %e, "Prediction form incomplete");
                }
                Err(rejected) => {
                    debug!(session = %session.id, ?rejected, "Prediction submission not started");
                }
            }
        }

        session.finish(&resources, Redirect::to(endpoints::PAGE))
    }

    /// Handle POST /reveal - show the received charts
    async fn handle_reveal(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Response {
        let session = Self::resolve(&resources, &headers);
        if !session.page.reveal_visualizations() {
            debug!(session = %session.id, "Reveal requested without visualizations");
        }
        session.finish(&resources, Redirect::to(endpoints::PAGE))
    }

    fn resolve(resources: &ServerResources, headers: &HeaderMap) -> ResolvedSession {
        let (id, page, created) = resources.sessions.resolve(session_id(headers));
        ResolvedSession { id, page, created }
    }
}

struct ResolvedSession {
    id: Uuid,
    page: PredictionPage,
    created: bool,
}

impl ResolvedSession {
    /// Attach the session cookie when the session is new
    fn finish(self, resources: &ServerResources, response: impl IntoResponse) -> Response {
        if self.created {
            let cookie = session_cookie(self.id, resources.config.environment.is_production());
            ([(SET_COOKIE, cookie)], response).into_response()
        } else {
            response.into_response()
        }
    }
}
