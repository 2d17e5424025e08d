//! Request routing dispatch module
//!
//! hyper-facing entry point: adapts an incoming request to the dispatcher
//! and emits the access log line.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::ServerConfig;
use crate::handler::static_files;
use crate::logger::{AccessLogEntry, Logger};

/// Request facts extracted from the wire before dispatching
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub remote_addr: SocketAddr,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestContext {
    fn from_request(req: &Request<hyper::body::Incoming>, remote_addr: SocketAddr) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string)
        };
        Self {
            method: req.method().clone(),
            // uri.path() excludes the query string
            path: req.uri().path().to_string(),
            remote_addr,
            referer: header("referer"),
            user_agent: header("user-agent"),
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    remote_addr: SocketAddr,
    config: Arc<ServerConfig>,
    logger: Arc<dyn Logger>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let ctx = RequestContext::from_request(&req, remote_addr);
    let is_head = ctx.method == Method::HEAD;

    let descriptor =
        static_files::dispatch(&config, logger.as_ref(), &ctx.method, &ctx.path).await;

    if config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            ctx.remote_addr.ip().to_string(),
            ctx.method.to_string(),
            ctx.path,
        );
        entry.status = descriptor.status.as_u16();
        entry.body_bytes = descriptor.body.len();
        entry.referer = ctx.referer;
        entry.user_agent = ctx.user_agent;
        logger.info(&entry.format(&config.logging.format));
    }

    Ok(descriptor.into_response(is_head))
}
