//! Configuration module for the Campus Connect backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Signing secret used when `CAMPUS_JWT_SECRET` is not set. Development only.
pub const DEV_JWT_SECRET: &str = "campus-connect-dev-secret";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HMAC secret for signing session tokens (required in production)
    pub jwt_secret: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Session token validity in hours
    pub token_ttl_hours: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("CAMPUS_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        let db_path = env::var("CAMPUS_DB_PATH")
            .unwrap_or_else(|_| "./data/campus.sqlite".to_string())
            .into();

        let bind_addr = env::var("CAMPUS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid CAMPUS_BIND_ADDR format: {}", e)))?;

        let log_level = env::var("CAMPUS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let token_ttl_hours = match env::var("CAMPUS_TOKEN_TTL_HOURS") {
            Ok(v) => v
                .parse::<i64>()
                .ok()
                .filter(|h| *h > 0)
                .ok_or_else(|| {
                    AppError::Internal(format!("Invalid CAMPUS_TOKEN_TTL_HOURS: {}", v))
                })?,
            Err(_) => 24,
        };

        let bcrypt_cost = match env::var("CAMPUS_BCRYPT_COST") {
            Ok(v) => v
                .parse::<u32>()
                .ok()
                .filter(|c| (4..=31).contains(c))
                .ok_or_else(|| AppError::Internal(format!("Invalid CAMPUS_BCRYPT_COST: {}", v)))?,
            Err(_) => 10,
        };

        Ok(Self {
            jwt_secret,
            db_path,
            bind_addr,
            log_level,
            token_ttl_hours,
            bcrypt_cost,
        })
    }

    /// The secret tokens are signed with, falling back to the development secret.
    pub fn signing_secret(&self) -> &str {
        self.jwt_secret.as_deref().unwrap_or(DEV_JWT_SECRET)
    }
}
