//! Shared logging utilities for consistent tracing across the service

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::errors::{SharedError, SharedResult};

/// Service name attached to every log line - set once at startup
static SERVICE_NAME: OnceLock<String> = OnceLock::new();

const DEFAULT_SERVICE_NAME: &str = "inspection-api";
const LOG_FILE_PREFIX: &str = "inspection-api";
const LOG_FILE_SUFFIX: &str = "log";
/// Rolled files kept on disk, one per day
const MAX_LOG_FILES: usize = 7;
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolled JSON log files; stderr only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: Option<PathBuf>) -> SharedResult<Self> {
        let level = level.into().to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(SharedError::InvalidConfig {
                field: "log_level".to_string(),
                value: level,
            });
        }
        Ok(Self { level, log_dir })
    }

    /// Directive string scoped to this workspace's crates
    pub fn filter_directives(&self) -> String {
        let level = &self.level;
        format!("inspection_api={level},shared={level},tower_http={level},redis=warn")
    }
}

/// Set the service name used by the `service_*` macros
pub fn init_service(name: &str) -> &'static str {
    SERVICE_NAME.get_or_init(|| name.to_string())
}

/// Current service name, falling back to the default before `init_service`
pub fn service() -> &'static str {
    SERVICE_NAME
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_SERVICE_NAME)
}

/// Initialize the tracing subscriber: compact stderr output plus optional JSON files
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_tracing(config: &LoggingConfig) -> SharedResult<Option<WorkerGuard>> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter = EnvFilter::new(config.filter_directives());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(log_file_appender(dir)?);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(true)
                .with_file(true)
                .with_line_number(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SharedError::InvalidConfig {
            field: "tracing".to_string(),
            value: e.to_string(),
        })?;

    info!(level = %config.level, "Logger configured");
    Ok(guard)
}

/// Daily rolling appender under `dir`, pruned to `MAX_LOG_FILES`
fn log_file_appender(dir: &Path) -> SharedResult<RollingFileAppender> {
    let invalid = |e: &dyn std::fmt::Display| SharedError::InvalidConfig {
        field: "log_dir".to_string(),
        value: format!("{}: {e}", dir.display()),
    };
    fs::create_dir_all(dir).map_err(|e| invalid(&e))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .map_err(|e| invalid(&e))
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for service-tagged info logging
#[macro_export]
macro_rules! service_info {
    ($($arg:tt)*) => {
        tracing::info!(
            service = $crate::logging::service(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-tagged warning logging
#[macro_export]
macro_rules! service_warn {
    ($($arg:tt)*) => {
        tracing::warn!(
            service = $crate::logging::service(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-tagged error logging
#[macro_export]
macro_rules! service_error {
    ($($arg:tt)*) => {
        tracing::error!(
            service = $crate::logging::service(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-tagged debug logging
#[macro_export]
macro_rules! service_debug {
    ($($arg:tt)*) => {
        tracing::debug!(
            service = $crate::logging::service(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(
        service = service(),
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(reason: &str) {
    info!(
        service = service(),
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = service(),
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!(
        service = service(),
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
