// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for endpoints, weight classes, and display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// API endpoints
pub mod endpoints {
    /// Page served to the browser
    pub const PAGE: &str = "/";
    /// Reveal action for received visualizations
    pub const REVEAL: &str = "/reveal";
    /// Same-origin proxy route in front of the prediction backend
    pub const MODEL_PROXY: &str = "/api/model";
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
}

/// Defaults for the external prediction backend
pub mod backend {
    /// Backend endpoint used when `PREDICTOR_BACKEND_URL` is not set
    pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/api/model";
    /// Message relayed when a failing backend does not provide one
    pub const GENERIC_BACKEND_ERROR: &str = "Backend error";
    /// Message relayed when a failure carries no description
    pub const UNKNOWN_ERROR: &str = "Unknown error";
}

/// Competition weight classes
pub mod weight_classes {
    /// Suffix marking the open-ended top class of each sex
    pub const OPEN_ENDED_SUFFIX: char = '+';
}

/// Labels shown to the user
pub mod labels {
    /// Alt text for the box plot image
    pub const BOX_PLOT: &str = "Box Plot";
    /// Alt text for the attempt heatmap image
    pub const HEATMAP_PLOT: &str = "Attempt Progression Heatmap";
    /// Alt text for the stacked bar image
    pub const BAR_PLOT: &str = "Lift Contributions Stacked Bar";
    /// Data URI prefix used for every plot payload
    pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";
}

/// Page session settings
pub mod sessions {
    /// Cookie carrying the page session identifier
    pub const COOKIE_NAME: &str = "predictor_session";
    /// Default number of page sessions kept in memory
    pub const DEFAULT_CAPACITY: usize = 1024;
}

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the web application service
    pub const ATTEMPT_PREDICTOR: &str = "attempt-predictor";
}
