use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_url: String,
    pub upstream_name: String,
    pub upstream_api_prefix: String,
    pub upstream_timeout_secs: u64,
    pub static_dir: PathBuf,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let upstream_url = env::var("UPSTREAM_URL")
            .unwrap_or_else(|_| "https://argus.meetrhea.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let upstream_name = env::var("UPSTREAM_NAME")
            .unwrap_or_else(|_| "argus".to_string());

        let upstream_api_prefix = env::var("UPSTREAM_API_PREFIX")
            .unwrap_or_else(|_| "/api".to_string());

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .context("UPSTREAM_TIMEOUT_SECS must be a number of seconds")?;

        let static_dir = PathBuf::from(
            env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        );

        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            upstream_url,
            upstream_name,
            upstream_api_prefix,
            upstream_timeout_secs,
            static_dir,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Upstream ({}): {}", self.upstream_name, self.upstream_url);
        tracing::info!("  Upstream API prefix: {}", self.upstream_api_prefix);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!("  Static assets from: {}", self.static_dir.display());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
