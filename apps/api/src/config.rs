use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Public origin that serves published portfolio sites out of the bucket.
    pub site_base_url: String,
    /// Stylesheet linked from exported HTML documents.
    pub export_stylesheet_url: String,
    pub pdf_renderer_bin: String,
    pub session_idle_secs: u64,
}

pub const DEFAULT_STYLESHEET_URL: &str =
    "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let s3_endpoint = require_env("S3_ENDPOINT")?;
        let s3_bucket = require_env("S3_BUCKET")?;
        let site_base_url = std::env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| format!("{}/{}", s3_endpoint.trim_end_matches('/'), s3_bucket));

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            s3_bucket,
            s3_endpoint,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            site_base_url: site_base_url.trim_end_matches('/').to_string(),
            export_stylesheet_url: std::env::var("EXPORT_STYLESHEET_URL")
                .unwrap_or_else(|_| DEFAULT_STYLESHEET_URL.to_string()),
            pdf_renderer_bin: std::env::var("PDF_RENDERER_BIN")
                .unwrap_or_else(|_| "wkhtmltopdf".to_string()),
            session_idle_secs: std::env::var("SESSION_IDLE_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse::<u64>()
                .context("SESSION_IDLE_SECS must be a whole number of seconds")?,
        })
    }

    /// Configuration used by router tests; nothing here reaches a real service.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/resumify_test".to_string(),
            s3_bucket: "resumify-sites".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            aws_access_key_id: "test".to_string(),
            aws_secret_access_key: "test".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            site_base_url: "https://sites.example.com".to_string(),
            export_stylesheet_url: DEFAULT_STYLESHEET_URL.to_string(),
            pdf_renderer_bin: "wkhtmltopdf".to_string(),
            session_idle_secs: 3600,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
