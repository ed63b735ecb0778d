// ABOUTME: CORS middleware configuration for the HTTP endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for browser clients of the proxy
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::environment::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the predictor
///
/// Configures cross-origin requests based on the `CORS_ALLOWED_ORIGINS`
/// setting. Supports both wildcard (`*`) for development and specific origin
/// lists for production.
///
/// # Allowed Headers
///
/// - Standard headers: content-type, accept, origin
/// - CORS headers: x-requested-with, access-control-request-*
/// - Correlation header: x-request-id
///
/// # Examples
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ALLOWED_ORIGINS="https://lift.example.com,https://meet.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.cors.allowed_origins))
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("access-control-request-method"),
            HeaderName::from_static("access-control-request-headers"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

fn allowed_origins(setting: &str) -> AllowOrigin {
    if setting.is_empty() || setting == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = setting
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        // Nothing parsed; fall back to any
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
