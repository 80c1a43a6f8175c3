use crate::domain::types::{DEFAULT_KEY_CODE_BYTES, DEFAULT_KEY_TTL_SECS};

/// Access service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AccessConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3110). Env var: `ACCESS_PORT`.
    pub access_port: u16,
    /// Validity window granted at activation (default 300s). Env var: `KEY_TTL_SECS`.
    pub key_ttl_secs: i64,
    /// Random bytes per key code (default 8, i.e. 16 hex chars). Env var: `KEY_CODE_BYTES`.
    pub key_code_bytes: usize,
}

impl AccessConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            access_port: std::env::var("ACCESS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3110),
            key_ttl_secs: std::env::var("KEY_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_KEY_TTL_SECS),
            key_code_bytes: std::env::var("KEY_CODE_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_KEY_CODE_BYTES),
        }
    }
}
