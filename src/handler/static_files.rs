//! Request dispatcher
//!
//! Turns method + path into a [`ResponseDescriptor`]: path resolution,
//! SPA fallback routing and the MIME/caching header policy. Stateless and
//! re-entrant; safe to invoke concurrently from any number of connections.

use std::path::PathBuf;

use hyper::Method;
use percent_encoding::percent_decode_str;
use tokio::fs;

use crate::config::ServerConfig;
use crate::handler::resolver::{self, Resolution};
use crate::http::{self, CachePolicy, ResponseDescriptor};
use crate::http::mime;
use crate::logger::Logger;

/// A file selected for serving
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    pub absolute_path: PathBuf,
    pub mime_type: &'static str,
    /// True when the entry document is substituted for a client-side route
    pub is_fallback: bool,
}

/// Handle one request. GET and HEAD go through path resolution; OPTIONS is a
/// bare preflight acknowledgment; anything else is rejected.
pub async fn dispatch(
    config: &ServerConfig,
    logger: &dyn Logger,
    method: &Method,
    raw_path: &str,
) -> ResponseDescriptor {
    match *method {
        Method::GET | Method::HEAD => serve_path(config, logger, raw_path).await,
        Method::OPTIONS => http::build_options_response(),
        _ => {
            logger.warn(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    }
}

async fn serve_path(
    config: &ServerConfig,
    logger: &dyn Logger,
    raw_path: &str,
) -> ResponseDescriptor {
    let decoded = percent_decode_str(raw_path).decode_utf8_lossy();

    match resolver::resolve(&config.static_dir, &decoded, &config.index_document) {
        Resolution::File(path) => {
            let target = ResolvedTarget {
                mime_type: mime::from_path(&path),
                absolute_path: path,
                is_fallback: false,
            };
            serve_file(&target, logger).await
        }
        Resolution::Escaped => {
            logger.warn(&format!(
                "Attempted access outside static directory: {decoded}"
            ));
            http::build_403_response()
        }
        Resolution::DirectoryWithoutIndex => {
            http::build_404_response("Directory listing not allowed")
        }
        Resolution::Missing => serve_fallback(config, logger, &decoded).await,
    }
}

/// Client-side-routed paths have no file on disk; serve the entry document
/// instead so the application's own router can take over.
async fn serve_fallback(
    config: &ServerConfig,
    logger: &dyn Logger,
    requested: &str,
) -> ResponseDescriptor {
    let index_path = config.static_dir.join(&config.index_document);
    if !index_path.is_file() {
        return http::build_404_response("Not Found");
    }

    logger.info(&format!(
        "[SPA fallback] {requested} -> {}",
        config.index_document
    ));

    let target = ResolvedTarget {
        mime_type: mime::from_path(&index_path),
        absolute_path: index_path,
        is_fallback: true,
    };
    serve_file(&target, logger).await
}

async fn serve_file(target: &ResolvedTarget, logger: &dyn Logger) -> ResponseDescriptor {
    match fs::read(&target.absolute_path).await {
        Ok(content) => {
            let cache = CachePolicy::for_path(&target.absolute_path);
            http::build_ok_response(content, target.mime_type, cache)
        }
        Err(err) => {
            // File vanished or became unreadable between resolution and
            // read; the client gets a generic 500.
            logger.error(&format!(
                "Failed to read file '{}': {err}",
                target.absolute_path.display()
            ));
            http::build_500_response()
        }
    }
}
