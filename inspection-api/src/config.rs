//! Process configuration
//!
//! Values come from command line flags, falling back to environment
//! variables (a `.env` file is loaded first) and then to defaults.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use shared::logging::LoggingConfig;

use crate::error::{ApiError, ApiResult};
use crate::services::redis_store::DEFAULT_KEY_NAMESPACE;

/// Store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Redis,
    /// Process-local store, for local runs without a backend
    Memory,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "inspection-api")]
#[command(about = "Retest decision API for manufacturing inspection equipment")]
pub struct ServerConfig {
    /// Redis host
    #[arg(long, env = "REDIS_HOST", default_value = "localhost")]
    pub redis_host: String,

    /// Redis port
    #[arg(long, env = "REDIS_PORT", default_value_t = 6379)]
    pub redis_port: u16,

    /// Prefix joined to every composite key in Redis
    #[arg(long, env = "REDIS_KEY_NAMESPACE", default_value = DEFAULT_KEY_NAMESPACE)]
    pub redis_key_namespace: String,

    /// Host the HTTP server binds to
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    pub app_host: String,

    /// Port the HTTP server binds to
    #[arg(long, env = "APP_PORT", default_value_t = 8000)]
    pub app_port: u16,

    /// Store backend
    #[arg(long, env = "INSPECTION_STORE", value_enum, default_value_t = StoreKind::Redis)]
    pub store: StoreKind,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Directory for the JSON log file
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load `.env` if present, then parse flags and environment
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }

    /// Resolve the bind host, which may be an IP literal or a hostname
    pub fn bind_address(&self) -> ApiResult<SocketAddr> {
        let invalid = |reason: String| {
            ApiError::config(format!(
                "Invalid bind address {}:{}: {reason}",
                self.app_host, self.app_port
            ))
        };
        (self.app_host.as_str(), self.app_port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }

    pub fn logging(&self) -> ApiResult<LoggingConfig> {
        Ok(LoggingConfig::new(self.log_level.clone(), self.log_dir.clone())?)
    }
}
