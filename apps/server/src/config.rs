use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub upload_dir: PathBuf,
    /// Raw `PMAJAY_JWT_SECRET`; decoded by the auth layer.
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
    pub seed_sample_data: bool,
    pub max_upload_bytes: usize,
    /// JSON log lines unless `PMAJAY_LOG_FORMAT=text`.
    pub log_json: bool,
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("PMAJAY_LISTEN_ADDR", "0.0.0.0:5000")
            .parse()
            .context("Invalid PMAJAY_LISTEN_ADDR")?;
        let db_path = env_or("PMAJAY_DB_PATH", "./db/pm_ajay.db");
        let cors_allow = env_or("PMAJAY_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("PMAJAY_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(30000);
        let static_dir = env_or("PMAJAY_STATIC_DIR", "dist");
        let upload_dir = PathBuf::from(env_or("PMAJAY_UPLOAD_DIR", "uploads"));
        let jwt_secret = std::env::var("PMAJAY_JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let ttl_secs: u64 = env_or("PMAJAY_TOKEN_TTL_SECS", "86400")
            .parse()
            .unwrap_or(86400);
        let max_upload_bytes: usize = std::env::var("PMAJAY_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            upload_dir,
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_secs),
            seed_sample_data: env_flag("PMAJAY_SEED_SAMPLE_DATA", true),
            max_upload_bytes,
            log_json: !env_or("PMAJAY_LOG_FORMAT", "json").eq_ignore_ascii_case("text"),
        })
    }
}
