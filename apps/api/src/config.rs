use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a set variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a single multipart upload.
    pub max_upload_bytes: usize,
    /// Optional JSON keyword catalog replacing the built-in lists.
    pub keywords_file: Option<PathBuf>,
    pub anthropic_api_key: Option<String>,
    pub enable_llm_name_recognition: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            keywords_file: optional_env("KEYWORDS_FILE").map(PathBuf::from),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            enable_llm_name_recognition: match optional_env("ENABLE_LLM_NAME_RECOGNITION") {
                Some(v) => parse_flag(&v).with_context(|| {
                    format!("ENABLE_LLM_NAME_RECOGNITION must be true or false, got '{v}'")
                })?,
                None => false,
            },
        })
    }

    /// The LLM recognizer needs both the opt-in flag and a key.
    pub fn llm_api_key(&self) -> Option<&str> {
        if self.enable_llm_name_recognition {
            self.anthropic_api_key.as_deref()
        } else {
            None
        }
    }
}

/// Unset and blank variables are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
