// Connection handling module
// Serves one accepted TCP connection on a spawned task.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::ServerConfig;
use crate::handler;
use crate::logger::Logger;

/// Spawn a task serving HTTP/1.1 on `stream`. Errors are logged, never
/// propagated; one broken connection must not affect the accept loop.
pub fn spawn_connection(
    stream: TcpStream,
    remote_addr: SocketAddr,
    config: Arc<ServerConfig>,
    logger: Arc<dyn Logger>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service_config = Arc::clone(&config);
        let service_logger = Arc::clone(&logger);
        let service = service_fn(move |req| {
            let config = Arc::clone(&service_config);
            let logger = Arc::clone(&service_logger);
            async move { handler::handle_request(req, remote_addr, config, logger).await }
        });

        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
            logger.error(&format!("Failed to serve connection: {err:?}"));
        }
    });
}
