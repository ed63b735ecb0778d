// ABOUTME: Centralized resource container shared by every route
// ABOUTME: Holds configuration, the model gateway, and the page session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Built once at startup and shared behind an `Arc`. Tests build it with a
//! stub [`ModelGateway`] in place of the HTTP one.

use crate::config::environment::ServerConfig;
use crate::gateway::{HttpModelGateway, ModelGateway};
use crate::page::SessionStore;
use attempt_core::errors::{AppError, AppResult};
use std::sync::Arc;

/// Shared server resources
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Gateway to the prediction backend
    pub gateway: Arc<dyn ModelGateway>,
    /// Page sessions
    pub sessions: SessionStore,
}

impl ServerResources {
    /// Resources using the given gateway
    ///
    /// # Errors
    ///
    /// Returns an error if the configured session capacity is zero
    pub fn new(config: ServerConfig, gateway: Arc<dyn ModelGateway>) -> AppResult<Self> {
        let capacity = config
            .session_capacity()
            .ok_or_else(|| AppError::config("PAGE_SESSION_CAPACITY must be at least 1"))?;

        Ok(Self {
            config: Arc::new(config),
            gateway,
            sessions: SessionStore::new(capacity),
        })
    }

    /// Resources forwarding to the configured backend URL over HTTP
    ///
    /// # Errors
    ///
    /// Returns an error if the configured session capacity is zero
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let gateway = Arc::new(HttpModelGateway::new(config.backend.url.clone()));
        Self::new(config, gateway)
    }
}
