use std::net::SocketAddr;
use std::sync::Arc;

use spa_static_server::config::ServerConfig;
use spa_static_server::error::StartupError;
use spa_static_server::logger::{Logger, StdLogger};
use spa_static_server::server;

fn main() {
    if let Err(err) = run() {
        // Remediation messages go to stdout where the operator is looking
        println!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli_port = std::env::args().nth(1);
    let config = ServerConfig::load(cli_port.as_deref())?;
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(config))?;
    Ok(())
}

async fn async_main(config: ServerConfig) -> Result<(), StartupError> {
    let addr = config.socket_addr()?;
    let listener = server::create_listener(addr).map_err(|source| StartupError::Bind {
        port: config.port,
        source,
    })?;

    print_banner(&config, addr);

    let config = Arc::new(config);
    let logger: Arc<dyn Logger> = Arc::new(StdLogger);

    let shutdown = server::shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, remote_addr)) => {
                        server::spawn_connection(
                            stream,
                            remote_addr,
                            Arc::clone(&config),
                            Arc::clone(&logger),
                        );
                    }
                    Err(err) => {
                        logger.error(&format!("Failed to accept connection: {err}"));
                    }
                }
            }

            () = &mut shutdown => {
                println!("\nShutting down server...");
                break;
            }
        }
    }

    Ok(())
}

fn print_banner(config: &ServerConfig, addr: SocketAddr) {
    println!("======================================");
    println!("Static asset server started");
    println!("Serving: {}", config.static_dir.display());
    println!("URL: http://{addr}");
    println!("Cross-origin isolation headers enabled:");
    println!("  - Cross-Origin-Embedder-Policy: credentialless");
    println!("  - Cross-Origin-Opener-Policy: same-origin");
    println!("  - Cross-Origin-Resource-Policy: cross-origin");
    println!("SPA fallback routing to {}", config.index_document);
    println!("Press Ctrl+C to stop");
    println!("======================================\n");
}
