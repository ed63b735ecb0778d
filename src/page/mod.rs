// ABOUTME: Page state holder orchestrating the prediction request pipeline
// ABOUTME: Clears state, validates, forwards once, and records the outcome under a loading guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prediction Page
//!
//! A [`PredictionPage`] is the single owner of one browser's page state: the
//! form selections, the loading flag, the last error, the last results and
//! whether the charts have been revealed. The submission pipeline is:
//!
//! 1. reject if a submission is already in flight
//! 2. clear error, results and the reveal flag, then set loading
//! 3. validate the form; on failure record the message and stop
//! 4. forward the request through the [`ModelGateway`]
//! 5. interpret the reply the way the browser page does and record it
//!
//! Steps 1 to 3 run synchronously; [`PredictionPage::start`] runs steps 4
//! and 5 on a spawned task so the page can be shown as `Submitting` while the
//! backend works. Loading is cleared by [`LoadingGuard`] on every path after
//! step 3, including the task being aborted.
//!
//! The state mutex is synchronous and never held across an await.

/// Bounded store of page sessions keyed by cookie id
pub mod session;

pub use session::SessionStore;

use crate::form::{FormSelection, PredictionForm};
use crate::gateway::{ModelGateway, ProxyReply};
use attempt_core::errors::FormError;
use attempt_core::models::{PredictionRequest, PredictionResponse, Recommendation, VisualSet};
use serde::Deserialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Where the page is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet, or nothing to show
    Idle,
    /// A request is in flight
    Submitting,
    /// Recommendations are available
    Success,
    /// The last attempt failed with a message
    Error,
}

/// Recommendations and charts from one successful reply
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Attempt recommendations
    pub recommendations: Recommendation,
    /// Chart payloads
    pub visualizations: VisualSet,
}

/// Result of asking the page to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Another submission is in flight; nothing was sent
    InFlight,
    /// Local validation failed; nothing was sent
    Invalid(FormError),
    /// The gateway answered; the page settled in this phase
    Completed(Phase),
}

/// Snapshot of everything the renderer needs
#[derive(Debug, Clone, Default)]
pub struct PageState {
    form: PredictionForm,
    loading: bool,
    error: Option<String>,
    prediction: Option<Prediction>,
    show_visuals: bool,
}

impl PageState {
    /// Current form selections
    #[must_use]
    pub const fn form(&self) -> &PredictionForm {
        &self.form
    }

    /// Whether a submission is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failure
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Recommendations of the last successful reply
    #[must_use]
    pub fn recommendations(&self) -> Option<&Recommendation> {
        self.prediction.as_ref().map(|p| &p.recommendations)
    }

    /// Charts received with the last reply, revealed or not
    #[must_use]
    pub fn received_visualizations(&self) -> Option<&VisualSet> {
        self.prediction.as_ref().map(|p| &p.visualizations)
    }

    /// Charts to display: only after the reveal action
    #[must_use]
    pub fn visible_visualizations(&self) -> Option<&VisualSet> {
        self.received_visualizations()
            .filter(|_| self.show_visuals)
    }

    /// Whether the reveal action should be offered
    #[must_use]
    pub fn can_reveal(&self) -> bool {
        self.prediction.is_some() && !self.show_visuals
    }

    /// Lifecycle phase derived from the flags
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else if self.error.is_some() {
            Phase::Error
        } else if self.prediction.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    fn begin_submission(&mut self) {
        self.error = None;
        self.prediction = None;
        self.show_visuals = false;
        self.loading = true;
    }

    fn record(&mut self, outcome: Result<Option<Prediction>, String>) {
        match outcome {
            Ok(prediction) => self.prediction = prediction,
            Err(message) => self.error = Some(message),
        }
    }

    fn reject(&mut self, message: String) {
        self.error = Some(message);
        self.prediction = None;
        self.show_visuals = false;
    }
}

/// Clears the loading flag when dropped
///
/// Created only after the flag has been set, so every exit from the network
/// call, including cancellation, settles the page.
pub struct LoadingGuard {
    state: Arc<Mutex<PageState>>,
}

impl LoadingGuard {
    const fn new(state: Arc<Mutex<PageState>>) -> Self {
        Self { state }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        lock(&self.state).loading = false;
    }
}

/// Shared handle to one page's state
#[derive(Debug, Clone, Default)]
pub struct PredictionPage {
    state: Arc<Mutex<PageState>>,
}

impl PredictionPage {
    /// Empty page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the given selections already made
    #[must_use]
    pub fn with_form(form: PredictionForm) -> Self {
        Self {
            state: Arc::new(Mutex::new(PageState {
                form,
                ..PageState::default()
            })),
        }
    }

    /// Copy of the current state for rendering
    #[must_use]
    pub fn snapshot(&self) -> PageState {
        lock(&self.state).clone()
    }

    /// Apply a browser form post to the selections
    ///
    /// A rejected post keeps the previous selections, replaces any shown
    /// results with the page error.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the first field that failed to parse
    pub fn apply(&self, selection: &FormSelection) -> Result<(), FormError> {
        let mut state = lock(&self.state);
        let applied = state.form.apply(selection);
        if let Err(e) = &applied {
            debug!(error = %e, "Rejected form selection");
            state.reject(e.to_string());
        }
        applied
    }

    /// Show the charts of the last reply. Returns whether any were shown.
    pub fn reveal_visualizations(&self) -> bool {
        let mut state = lock(&self.state);
        if state.prediction.is_some() {
            state.show_visuals = true;
        }
        state.show_visuals
    }

    /// Run one submission through `gateway` to completion
    pub async fn submit(&self, gateway: &dyn ModelGateway) -> Submission {
        match self.begin() {
            Ok((request, guard)) => self.complete(request, guard, gateway).await,
            Err(rejected) => rejected,
        }
    }

    /// Clear the page and set loading now, then forward on a spawned task.
    ///
    /// The loading guard moves into the task, so the page stays in
    /// `Submitting` until the gateway answers even after the caller returns.
    ///
    /// # Errors
    ///
    /// Returns [`Submission::InFlight`] or [`Submission::Invalid`] when nothing
    /// was sent
    pub fn start(
        &self,
        gateway: Arc<dyn ModelGateway>,
    ) -> Result<JoinHandle<Submission>, Submission> {
        let (request, guard) = self.begin()?;
        let page = self.clone();
        Ok(tokio::spawn(async move {
            page.complete(request, guard, gateway.as_ref()).await
        }))
    }

    fn begin(&self) -> Result<(PredictionRequest, LoadingGuard), Submission> {
        let mut state = lock(&self.state);
        if state.loading {
            debug!("Submission rejected: request already in flight");
            return Err(Submission::InFlight);
        }
        state.begin_submission();

        let validated = state.form.validate();
        match validated {
            Ok(request) => {
                drop(state);
                Ok((request, LoadingGuard::new(Arc::clone(&self.state))))
            }
            Err(e) => {
                state.error = Some(e.to_string());
                state.loading = false;
                drop(state);
                Err(Submission::Invalid(e))
            }
        }
    }

    async fn complete(
        &self,
        request: PredictionRequest,
        guard: LoadingGuard,
        gateway: &dyn ModelGateway,
    ) -> Submission {
        info!(
            division = %request.division,
            sex = request.sex.code(),
            bodyweight = request.bodyweight,
            "Submitting prediction request"
        );

        let outcome = match serde_json::to_value(request) {
            Ok(body) => interpret_reply(&gateway.forward(body).await),
            Err(e) => Err(e.to_string()),
        };

        if let Err(message) = &outcome {
            warn!(error = %message, "Prediction request failed");
        }

        let phase = {
            let mut state = lock(&self.state);
            state.record(outcome);
            state.loading = false;
            state.phase()
        };
        drop(guard);

        debug!(?phase, "Prediction submission settled");
        Submission::Completed(phase)
    }
}

/// Turn a proxy reply into the page outcome.
///
/// A non-OK reply surfaces its `error` field or the status. An OK reply with a
/// non-empty `error` surfaces that. An OK reply whose `error` is empty carries
/// no message and yields whatever results it holds, possibly none. Anything
/// else must parse as a prediction.
///
/// # Errors
///
/// Returns the message to display when the reply is not a prediction
pub fn interpret_reply(reply: &ProxyReply) -> Result<Option<Prediction>, String> {
    if !reply.is_success() {
        return Err(reply.error_message().map_or_else(
            || format!("HTTP error! Status: {}", reply.status.as_u16()),
            str::to_owned,
        ));
    }
    if let Some(message) = reply.error_message() {
        return Err(message.to_owned());
    }

    match PredictionResponse::deserialize(&reply.body) {
        Ok(PredictionResponse::Success {
            recommendations,
            visualizations,
        }) => Ok(Some(Prediction {
            recommendations,
            visualizations,
        })),
        Ok(PredictionResponse::Failure { .. }) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

fn lock(state: &Mutex<PageState>) -> MutexGuard<'_, PageState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
