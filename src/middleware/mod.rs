// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and CORS configuration

/// CORS layer built from configuration
pub mod cors;
/// Request id and tracing layers
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use self::tracing::{create_request_span, with_request_tracing, REQUEST_ID_HEADER};
