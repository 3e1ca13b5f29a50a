//! Service configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use lift_pass::async_client::AsyncLiftPassBuilder;
use lift_pass::AsyncLiftPass;

/// Where the price and holiday tables live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSetting {
    /// Platform data directory.
    Default,
    InMemory,
    File(PathBuf),
}

/// Lift pass API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Service host
    pub host: String,
    /// Service port
    pub port: u16,
    pub database: DatabaseSetting,
    /// Load the default prices and holidays on startup
    pub seed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database: DatabaseSetting::Default,
            seed: true,
        }
    }
}

impl ApiConfig {
    /// Load configuration from a `.env` file and the environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, starting from the defaults.
    ///
    /// `PORT` is honoured, but `LIFT_PASS_PORT` wins when both are set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(port) = lookup("PORT") {
            cfg.port = port.parse().with_context(|| format!("invalid PORT: {port}"))?;
        }
        if let Some(port) = lookup("LIFT_PASS_PORT") {
            cfg.port = port
                .parse()
                .with_context(|| format!("invalid LIFT_PASS_PORT: {port}"))?;
        }
        if let Some(host) = lookup("LIFT_PASS_HOST") {
            cfg.host = host;
        }
        if let Some(db) = lookup("LIFT_PASS_DATABASE") {
            cfg.database = match db.trim() {
                "" => DatabaseSetting::Default,
                ":memory:" => DatabaseSetting::InMemory,
                path => DatabaseSetting::File(PathBuf::from(path)),
            };
        }
        if let Some(seed) = lookup("LIFT_PASS_SEED") {
            cfg.seed = match seed.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => anyhow::bail!("invalid LIFT_PASS_SEED: {other}"),
            };
        }

        Ok(cfg)
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    pub fn builder(&self) -> AsyncLiftPassBuilder {
        let builder = AsyncLiftPass::builder().seed_defaults(self.seed);
        match &self.database {
            DatabaseSetting::Default => builder,
            DatabaseSetting::InMemory => builder.in_memory(),
            DatabaseSetting::File(path) => builder.database_path(path),
        }
    }
}
