// ABOUTME: Reqwest implementation of the model gateway
// ABOUTME: Posts the JSON body to the backend once and folds every failure into a ProxyReply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ModelGateway, ProxyReply};
use crate::utils::http_client::proxy_client;
use async_trait::async_trait;
use attempt_core::constants::backend::GENERIC_BACKEND_ERROR;
use attempt_core::errors::{AppError, AppResult};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Gateway forwarding to a fixed backend URL over HTTP
#[derive(Debug, Clone)]
pub struct HttpModelGateway {
    client: Client,
    backend_url: String,
}

impl HttpModelGateway {
    /// Gateway using the shared proxy client
    #[must_use]
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self::with_client(proxy_client().clone(), backend_url)
    }

    /// Gateway using a caller-provided client
    #[must_use]
    pub fn with_client(client: Client, backend_url: impl Into<String>) -> Self {
        Self {
            client,
            backend_url: backend_url.into(),
        }
    }

    async fn try_forward(&self, body: &Value) -> AppResult<ProxyReply> {
        let response = self
            .client
            .post(&self.backend_url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::external_service(e.to_string()).with_source(e))?;

        let status = response.status();
        let data: Value = response
            .json()
            .await
            .map_err(|e| AppError::external_service(e.to_string()).with_source(e))?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                body = %data,
                "Prediction backend returned an error status"
            );
            let message = data
                .get("error")
                .filter(|value| is_truthy(value))
                .cloned()
                .unwrap_or_else(|| Value::from(GENERIC_BACKEND_ERROR));
            return Ok(ProxyReply::failure(status, message));
        }

        Ok(ProxyReply::relay(status, data))
    }
}

#[async_trait]
impl ModelGateway for HttpModelGateway {
    async fn forward(&self, body: Value) -> ProxyReply {
        debug!(backend = %self.backend_url, body = %body, "Forwarding prediction request");

        match self.try_forward(&body).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(backend = %self.backend_url, error = %e, "Prediction backend request failed");
                ProxyReply::internal(&e.message)
            }
        }
    }
}

/// Whether a backend `error` field carries a usable value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
