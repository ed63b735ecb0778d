// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-driven settings for the web application and proxy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only: there are no config files. Command line
//! flags on the binary may override individual values after loading.

/// Environment and server configuration
pub mod environment;

pub use environment::{BackendConfig, CorsConfig, Environment, ServerConfig, SessionConfig};
