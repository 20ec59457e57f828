//! Server configuration.
//!
//! Mail settings come from [`MailConfig`]; this layer adds the listening port
//! and the CORS allow-list.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use portfolio_mail::MailConfig;

/// Port used when neither `--port` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3001;

/// Everything `serve` needs before it binds.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub mail: MailConfig,
    pub port: u16,
    /// Empty means any origin.
    pub cors_origins: Vec<HeaderValue>,
}

impl ServeConfig {
    /// Load from the process environment after reading `.env`.
    pub fn load(port: Option<u16>) -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        Self::from_lookup(port, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(port: Option<u16>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mail = MailConfig::from_lookup(&lookup)?;

        let port = match port {
            Some(port) => port,
            None => match lookup("PORT").filter(|p| !p.trim().is_empty()) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid PORT: {raw:?}"))?,
                None => DEFAULT_PORT,
            },
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            mail,
            port,
            cors_origins,
        })
    }
}

/// Parse a comma-separated origin list, skipping blanks.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin: {origin:?}"))
        })
        .collect()
}
