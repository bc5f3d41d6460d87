//! Startup configuration for Employee Desk

use anyhow::{bail, Result};

/// Environment variable holding the backend base address
pub const API_URL_VAR: &str = "EMPLOYEE_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// App configuration resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Load from the environment, reading `.env` first if present
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_value(std::env::var(API_URL_VAR).ok())
    }

    fn from_value(raw: Option<String>) -> Result<Self> {
        let api_base_url = match raw {
            Some(value) => normalize_base_url(&value)?,
            None => {
                tracing::info!("{} not set; using {}", API_URL_VAR, DEFAULT_API_URL);
                DEFAULT_API_URL.to_string()
            }
        };
        Ok(Self { api_base_url })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Strip trailing slashes and a trailing `/employees` collection path,
/// so both the server root and the collection URL are accepted.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("{} is empty", API_URL_VAR);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        bail!("{} must start with http:// or https://, got '{}'", API_URL_VAR, trimmed);
    }

    let mut url = trimmed.trim_end_matches('/');
    if let Some(stripped) = url.strip_suffix("/employees") {
        url = stripped.trim_end_matches('/');
    }
    Ok(url.to_string())
}
