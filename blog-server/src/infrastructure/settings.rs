use anyhow::{Context, Result, anyhow};
use validator::ValidateEmail;

use crate::domain::pagination::PaginationConfig;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub database_max_connections: u32,
    pub http_addr: String,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub http_request_body_limit_bytes: usize,
    pub http_concurrency_limit: usize,
    pub http_request_timeout_secs: u64,
    pub posts_per_page: u64,
    pub posts_orphans: u64,
    pub contact_recipient: String,
    pub contact_subject_tag: String,
    pub mail_api_url: Option<String>,
    pub mail_api_token: Option<String>,
    pub mail_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let database_url = get_required("DATABASE_URL").context("DATABASE_URL is required")?;
        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("Failed to parse DATABASE_MAX_CONNECTIONS, expecting integer")?;
        if database_max_connections == 0 {
            return Err(anyhow!("DATABASE_MAX_CONNECTIONS must be > 0"));
        }

        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let cors_origins = parse_cors_origins(
            std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:8000,http://127.0.0.1:8000".to_string()),
        );
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let http_request_body_limit_bytes =
            parse_usize_env("HTTP_REQUEST_BODY_LIMIT_BYTES", 64 * 1024)?;
        let http_concurrency_limit = parse_usize_env("HTTP_CONCURRENCY_LIMIT", 256)?;
        let http_request_timeout_secs = parse_u64_env("HTTP_REQUEST_TIMEOUT_SECS", 10)?;

        let posts_per_page =
            parse_u64_env("POSTS_PER_PAGE", PaginationConfig::DEFAULT_PER_PAGE)?;
        let posts_orphans: u64 = std::env::var("POSTS_ORPHANS")
            .unwrap_or_else(|_| PaginationConfig::DEFAULT_ORPHANS.to_string())
            .parse()
            .context("Failed to parse POSTS_ORPHANS, expecting non-negative integer")?;

        let contact_recipient =
            get_required("CONTACT_RECIPIENT").context("CONTACT_RECIPIENT is required")?;
        if !contact_recipient.validate_email() {
            return Err(anyhow!("CONTACT_RECIPIENT must be a valid email"));
        }
        let contact_subject_tag = get_optional("CONTACT_SUBJECT_TAG")
            .unwrap_or_else(|| "[blog]".to_string());

        let mail_api_url = get_optional("MAIL_API_URL");
        let mail_api_token = get_optional("MAIL_API_TOKEN");
        let mail_timeout_secs = parse_u64_env("MAIL_TIMEOUT_SECS", 10)?;

        Ok(Self {
            database_url,
            database_max_connections,
            http_addr,
            cors_origins,
            log_level,
            http_request_body_limit_bytes,
            http_concurrency_limit,
            http_request_timeout_secs,
            posts_per_page,
            posts_orphans,
            contact_recipient,
            contact_subject_tag,
            mail_api_url,
            mail_api_token,
            mail_timeout_secs,
        })
    }

    pub(crate) fn pagination(&self) -> Result<PaginationConfig> {
        PaginationConfig::new(self.posts_per_page, self.posts_orphans)
            .map_err(|err| anyhow!("invalid pagination settings: {err}"))
    }
}

fn get_required(key: &str) -> Result<String> {
    let value = std::env::var(key)?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn get_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_usize_env(key: &str, default: usize) -> Result<usize> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<usize>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
