//! Startup error taxonomy
//!
//! Everything here is fatal before the server starts accepting connections
//! and maps to process exit code 1. Per-request failures never appear here;
//! they are converted to responses at the dispatcher boundary.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal pre-serve errors. `Display` output doubles as the remediation
/// message printed before exiting.
#[derive(Debug)]
pub enum StartupError {
    /// The static build directory does not exist
    MissingStaticDir(PathBuf),
    /// The index document is absent from the static build
    MissingIndexDocument(PathBuf),
    /// The port argument or `PORT` variable is not a valid port number
    InvalidPort(String),
    /// Configuration sources could not be read or deserialized
    Config(config::ConfigError),
    /// The configured host/port pair is not a valid socket address
    InvalidAddr(std::net::AddrParseError),
    /// Binding the listener failed
    Bind { port: u16, source: io::Error },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStaticDir(dir) => write!(
                f,
                "Error: static build directory not found!\n  Expected: {}\n  Run the static build first to populate it.",
                dir.display()
            ),
            Self::MissingIndexDocument(path) => write!(
                f,
                "Error: index document not found in static build!\n  Expected: {}\n  Rebuild the static assets before serving.",
                path.display()
            ),
            Self::InvalidPort(value) => {
                write!(f, "Error: invalid port number '{value}'")
            }
            Self::Config(err) => write!(f, "Error: invalid configuration: {err}"),
            Self::InvalidAddr(err) => write!(f, "Error: invalid listen address: {err}"),
            Self::Bind { port, source } if source.kind() == io::ErrorKind::AddrInUse => {
                write!(
                    f,
                    "Error: port {port} is already in use!\n  Try a different port, e.g. PORT={} spa-static-server",
                    port.wrapping_add(1).max(1024)
                )
            }
            Self::Bind { port, source } => {
                write!(f, "Error: failed to bind port {port}: {source}")
            }
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::InvalidAddr(err) => Some(err),
            Self::Bind { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for StartupError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err)
    }
}
