// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure, immutable for the process lifetime
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Listen host; stays on loopback, the server is not meant to be exposed
    pub host: String,
    pub port: u16,
    /// Directory holding the pre-built static assets
    pub static_dir: PathBuf,
    /// Entry document served for `/` and for SPA fallback routing
    pub index_document: String,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Emit one access log line per request
    pub access_log: bool,
    /// Access log format (`combined` or `json`)
    pub format: String,
}
