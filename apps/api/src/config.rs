use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::aggregation::absence::DEFAULT_ABSENCE_THRESHOLD;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Optional. When set, the fetched website knowledge is memoized in Redis.
    pub redis_url: Option<String>,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub knowledge_url: String,
    pub knowledge_base_path: PathBuf,
    pub syllabus_path: PathBuf,
    pub knowledge_fetch_timeout_secs: u64,
    pub knowledge_cache_ttl_secs: u64,
    pub absence_window_days: i64,
    pub absence_threshold: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: std::env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: env_or("GEMINI_MODEL", "gemini-1.5-flash-latest"),
            gemini_api_base: env_or(
                "GEMINI_API_BASE",
                "https://generativelanguage.googleapis.com/v1beta",
            ),
            knowledge_url: env_or("KNOWLEDGE_URL", "https://www.upay.org.in/"),
            knowledge_base_path: env_or("KNOWLEDGE_BASE_PATH", "data/ngo-knowledge-base.txt")
                .into(),
            syllabus_path: env_or("SYLLABUS_PATH", "data/syllabus.json").into(),
            knowledge_fetch_timeout_secs: parse_env("KNOWLEDGE_FETCH_TIMEOUT_SECS", 10)?,
            knowledge_cache_ttl_secs: parse_env("KNOWLEDGE_CACHE_TTL_SECS", 300)?,
            absence_window_days: parse_env("ABSENCE_WINDOW_DAYS", 7)?,
            absence_threshold: parse_env("ABSENCE_THRESHOLD", DEFAULT_ABSENCE_THRESHOLD)?,
            port: parse_env("PORT", 5001)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration pointing at the bundled data files and an unroutable
    /// knowledge URL, so tests never leave the machine.
    pub fn for_tests() -> Self {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
        Config {
            database_url: "postgres://localhost/sahay_test".to_string(),
            redis_url: None,
            s3_bucket: "sahay-test".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            aws_access_key_id: "test".to_string(),
            aws_secret_access_key: "test".to_string(),
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-1.5-flash-latest".to_string(),
            gemini_api_base: "http://127.0.0.1:9".to_string(),
            knowledge_url: "http://127.0.0.1:9/".to_string(),
            knowledge_base_path: data_dir.join("ngo-knowledge-base.txt"),
            syllabus_path: data_dir.join("syllabus.json"),
            knowledge_fetch_timeout_secs: 2,
            knowledge_cache_ttl_secs: 0,
            absence_window_days: 7,
            absence_threshold: DEFAULT_ABSENCE_THRESHOLD,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
