use std::net::IpAddr;

use anyhow::Context;
use axum::http::HeaderValue;

/// Which origins CORS admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: every origin, mirrored back so credentials still work.
    Any,
    List(Vec<HeaderValue>),
}

/// Document store connection settings. Either being absent leaves the store
/// unavailable rather than failing startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Parsed from comma-separated `CORS_ORIGINS` (default: `*`).
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `8000`    |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `DATABASE_URL`         | unset     |
    /// | `DATABASE_NAME`        | unset     |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host: IpAddr = var("HOST")
            .unwrap_or_else(|| "0.0.0.0".into())
            .parse()
            .context("HOST must be a valid IP address")?;

        let port: u16 = var("PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .context("PORT must be a valid u16")?;

        let cors_origins = parse_cors_origins(&var("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .context("REQUEST_TIMEOUT_SECS must be a valid u64")?;

        let database = DatabaseConfig {
            url: var("DATABASE_URL"),
            name: var("DATABASE_NAME"),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
        })
    }
}

fn parse_cors_origins(raw: &str) -> anyhow::Result<CorsOrigins> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .map(CorsOrigins::List)
}
