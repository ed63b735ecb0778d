// ABOUTME: Shared HTTP client used to reach the prediction backend
// ABOUTME: Single pooled client without request timeouts, matching the single-attempt proxy contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;

/// Global shared HTTP client for backend forwarding
static PROXY_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared proxy client
///
/// The client keeps connections pooled but sets no request or connect
/// timeout: a hung backend keeps the caller waiting, as the proxy contract
/// specifies.
///
/// # Returns
/// A reference to the shared `reqwest::Client`
#[must_use]
pub fn proxy_client() -> &'static Client {
    PROXY_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .user_agent(concat!("attempt-predictor/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
