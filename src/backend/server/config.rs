/**
 * Server Configuration
 *
 * Loads process-wide settings once at startup and hands them out as an
 * immutable value. The auth service and access gate receive the secrets they
 * need through their constructors; nothing reads the environment afterwards.
 *
 * # Environment
 *
 * | Variable                   | Required | Default                 |
 * |----------------------------|----------|-------------------------|
 * | `JWT_ACCESS_TOKEN_SECRET`  | yes      |                         |
 * | `JWT_REFRESH_TOKEN_SECRET` | yes      |                         |
 * | `DATABASE_URL`             | no       | in-memory store         |
 * | `SERVER_PORT`              | no       | `3000`                  |
 * | `BCRYPT_COST`              | no       | `bcrypt::DEFAULT_COST`  |
 * | `COOKIE_SECURE`            | no       | `false`                 |
 *
 * There is no fallback signing secret: a missing secret aborts startup.
 */

use std::fmt;

use thiserror::Error;

pub const ACCESS_SECRET_VAR: &str = "JWT_ACCESS_TOKEN_SECRET";
pub const REFRESH_SECRET_VAR: &str = "JWT_REFRESH_TOKEN_SECRET";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const PORT_VAR: &str = "SERVER_PORT";
pub const BCRYPT_COST_VAR: &str = "BCRYPT_COST";
pub const COOKIE_SECURE_VAR: &str = "COOKIE_SECURE";

/// Lowest and highest work factors bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },

    #[error("access and refresh tokens must be signed with different secrets")]
    SharedSecret,
}

/// Settings for the auth service and access gate
#[derive(Clone)]
pub struct AuthConfig {
    /// Signing key for access tokens
    pub access_secret: String,
    /// Signing key for refresh tokens
    pub refresh_secret: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Add `Secure` to the refresh cookie
    pub secure_cookies: bool,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
    /// Postgres URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup(ACCESS_SECRET_VAR) {
            builder = builder.access_secret(secret);
        }
        if let Some(secret) = lookup(REFRESH_SECRET_VAR) {
            builder = builder.refresh_secret(secret);
        }
        if let Some(url) = lookup(DATABASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup(PORT_VAR) {
            let port = port.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: PORT_VAR,
                message: e.to_string(),
            })?;
            builder = builder.port(port);
        }
        if let Some(cost) = lookup(BCRYPT_COST_VAR) {
            let cost = cost.trim().parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                key: BCRYPT_COST_VAR,
                message: e.to_string(),
            })?;
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(flag) = lookup(COOKIE_SECURE_VAR) {
            builder = builder.secure_cookies(parse_flag(COOKIE_SECURE_VAR, &flag)?);
        }

        builder.build()
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key,
            message: format!("expected a boolean, got '{}'", other),
        }),
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    access_secret: Option<String>,
    refresh_secret: Option<String>,
    bcrypt_cost: Option<u32>,
    secure_cookies: bool,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn access_secret(mut self, secret: impl Into<String>) -> Self {
        self.access_secret = Some(secret.into());
        self
    }

    pub fn refresh_secret(mut self, secret: impl Into<String>) -> Self {
        self.refresh_secret = Some(secret.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let access_secret = self
            .access_secret
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingValue(ACCESS_SECRET_VAR))?;
        let refresh_secret = self
            .refresh_secret
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingValue(REFRESH_SECRET_VAR))?;

        if access_secret == refresh_secret {
            return Err(ConfigError::SharedSecret);
        }

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST);
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: BCRYPT_COST_VAR,
                message: format!(
                    "must be between {} and {}",
                    MIN_BCRYPT_COST, MAX_BCRYPT_COST
                ),
            });
        }

        Ok(ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
            auth: AuthConfig {
                access_secret,
                refresh_secret,
                bcrypt_cost,
                secure_cookies: self.secure_cookies,
            },
        })
    }
}
