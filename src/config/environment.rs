// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use attempt_core::constants::{backend, sessions};
use attempt_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;
use std::str::FromStr;
use tracing::info;
use url::Url;

/// Default HTTP port for the web application
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Environment type for logging and diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Prediction backend the proxy forwards to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Full URL of the backend's model endpoint
    pub url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: backend::DEFAULT_BACKEND_URL.to_owned(),
        }
    }
}

/// Cross-origin settings for the proxy route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*` for any
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Page session store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of page sessions kept before LRU eviction
    pub capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: sessions::DEFAULT_CAPACITY,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: IpAddr,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Prediction backend
    pub backend: BackendConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Page session settings
    pub sessions: SessionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            backend: BackendConfig::default(),
            cors: CorsConfig::default(),
            sessions: SessionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails [`ServerConfig::validate`]
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: parse_env("HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?,
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            backend: BackendConfig {
                url: env_var_or("PREDICTOR_BACKEND_URL", backend::DEFAULT_BACKEND_URL),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            sessions: SessionConfig {
                capacity: parse_env("PAGE_SESSION_CAPACITY", sessions::DEFAULT_CAPACITY)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the backend URL is not an absolute http(s) URL or
    /// the session capacity is zero
    pub fn validate(&self) -> AppResult<()> {
        let url = Url::parse(&self.backend.url).map_err(|e| {
            AppError::config(format!(
                "Invalid PREDICTOR_BACKEND_URL '{}': {e}",
                self.backend.url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "PREDICTOR_BACKEND_URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.session_capacity().is_none() {
            return Err(AppError::config("PAGE_SESSION_CAPACITY must be at least 1"));
        }

        Ok(())
    }

    /// Session capacity as the non-zero value the LRU store needs
    #[must_use]
    pub const fn session_capacity(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.sessions.capacity)
    }

    /// Socket address to bind
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Attempt Predictor Configuration:\n\
             - Listen: {}\n\
             - Environment: {}\n\
             - Prediction Backend: {}\n\
             - CORS Origins: {}\n\
             - Page Session Capacity: {}",
            self.bind_addr(),
            self.environment,
            self.backend.url,
            self.cors.allowed_origins,
            self.sessions.capacity,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
