// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, limits};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated tests
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
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL, e.g. `sqlite:./data/jobly.db` or `sqlite::memory:`
    pub url: String,
}

impl DatabaseConfig {
    /// Whether the URL points at an in-memory database
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Token and password hashing settings
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

/// HTTP transport limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum accepted request body in bytes
    pub max_body_bytes: usize,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database settings
    pub database: DatabaseConfig,
    /// Auth settings
    pub auth: AuthConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// HTTP transport settings
    pub http: HttpConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse, or if the
    /// development signing secret is used in production.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", defaults::DATABASE_URL),
            },
            auth: AuthConfig {
                jwt_secret: env_var_or("JWT_SECRET", defaults::DEV_JWT_SECRET),
                jwt_expiry_hours: env_var_or(
                    "JWT_EXPIRY_HOURS",
                    &defaults::JWT_EXPIRY_HOURS.to_string(),
                )
                .parse()
                .context("Invalid JWT_EXPIRY_HOURS value")?,
                bcrypt_cost: env_var_or("BCRYPT_COST", &defaults::BCRYPT_COST.to_string())
                    .parse()
                    .context("Invalid BCRYPT_COST value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            http: HttpConfig {
                request_timeout_secs: env_var_or(
                    "REQUEST_TIMEOUT_SECS",
                    &defaults::REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS value")?,
                max_body_bytes: env_var_or(
                    "MAX_BODY_BYTES",
                    &defaults::MAX_BODY_BYTES.to_string(),
                )
                .parse()
                .context("Invalid MAX_BODY_BYTES value")?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Configuration for tests: in-memory database and the minimum bcrypt cost
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            http_port: 0,
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: "sqlite::memory:".to_owned(),
            },
            auth: AuthConfig {
                jwt_secret: "test-secret".to_owned(),
                jwt_expiry_hours: defaults::JWT_EXPIRY_HOURS,
                bcrypt_cost: 4,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            http: HttpConfig {
                request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
                max_body_bytes: defaults::MAX_BODY_BYTES,
            },
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable.
    pub fn validate(&self) -> Result<()> {
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(anyhow::anyhow!(
                "BCRYPT_COST must be between 4 and 31, got {}",
                self.auth.bcrypt_cost
            ));
        }

        if !(1..=limits::JWT_EXPIRY_MAX_HOURS).contains(&self.auth.jwt_expiry_hours) {
            return Err(anyhow::anyhow!(
                "JWT_EXPIRY_HOURS must be between 1 and {}, got {}",
                limits::JWT_EXPIRY_MAX_HOURS,
                self.auth.jwt_expiry_hours
            ));
        }

        if self.auth.jwt_secret == defaults::DEV_JWT_SECRET {
            if self.environment.is_production() {
                return Err(anyhow::anyhow!(
                    "JWT_SECRET must be set explicitly in production"
                ));
            }
            warn!("Using the development JWT secret; set JWT_SECRET before deploying");
        }

        Ok(())
    }

    /// Log-safe configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Jobly API Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Token Lifetime: {}h\n\
             - bcrypt Cost: {}\n\
             - CORS Origins: {}",
            self.http_port,
            self.environment,
            if self.database.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite (file)"
            },
            self.auth.jwt_expiry_hours,
            self.auth.bcrypt_cost,
            self.cors.allowed_origins,
        )
    }
}

/// Read an environment variable, falling back to `default` when unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
