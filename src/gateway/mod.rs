// ABOUTME: Model gateway abstraction in front of the external prediction backend
// ABOUTME: Defines the ProxyReply status/body pair every gateway implementation returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request Proxy
//!
//! A [`ModelGateway`] forwards one JSON body to the prediction backend and
//! always answers with a [`ProxyReply`]: failures are folded into the reply as
//! `{ "error": ... }` with a status code, never raised. The `/api/model` route
//! returns the reply as-is; the page pipeline interprets it the same way a
//! browser client would.

/// Reqwest-backed gateway to the prediction backend
pub mod backend;

pub use backend::HttpModelGateway;

use async_trait::async_trait;
use attempt_core::constants::backend::UNKNOWN_ERROR;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// Status and JSON body relayed to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    /// Status code to answer with
    pub status: StatusCode,
    /// JSON body to answer with
    pub body: Value,
}

impl ProxyReply {
    /// Relay a backend body unchanged
    #[must_use]
    pub const fn relay(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// Wrap an error value as `{ "error": error }`
    #[must_use]
    pub fn failure(status: StatusCode, error: Value) -> Self {
        Self {
            status,
            body: json!({ "error": error }),
        }
    }

    /// 500 reply for a transport or parse failure
    #[must_use]
    pub fn internal(message: &str) -> Self {
        let message = if message.trim().is_empty() {
            UNKNOWN_ERROR
        } else {
            message
        };
        Self::failure(StatusCode::INTERNAL_SERVER_ERROR, Value::from(message))
    }

    /// Whether the status is 2xx
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The `error` field when it is a non-empty string
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }
}

impl IntoResponse for ProxyReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Forwards prediction requests to the backend.
///
/// Implementations make exactly one attempt per call: no retry, no timeout.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Forward `body` verbatim and relay the outcome
    async fn forward(&self, body: Value) -> ProxyReply;
}
