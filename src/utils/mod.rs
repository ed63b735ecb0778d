// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains shared utilities for cookies, HTML escaping, and the backend HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Page session cookie helpers
pub mod cookies;
/// HTML escaping utilities for server-rendered pages
pub mod html;
/// HTTP client configuration and helpers
pub mod http_client;
