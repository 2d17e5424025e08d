// Configuration module entry point
// Builds the immutable ServerConfig from defaults, an optional config file,
// the environment and the command line, then validates the static build.

mod types;

pub use types::{LoggingConfig, ServerConfig};

use std::net::SocketAddr;

use crate::error::StartupError;

const DEFAULT_PORT: u16 = 3000;

impl ServerConfig {
    /// Load configuration with precedence: CLI argument over `PORT`
    /// environment variable over `static-server.toml` over compiled-in
    /// defaults.
    ///
    /// `cli_port` is the first positional argument when present; a value that
    /// does not parse as a port is a fatal startup error.
    pub fn load(cli_port: Option<&str>) -> Result<Self, StartupError> {
        let mut builder = config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("static_dir", "dist/static")?
            .set_default("index_document", "index.html")?
            .set_default("logging.access_log", true)?
            .set_default("logging.format", "combined")?
            .add_source(config::File::with_name("static-server").required(false))
            .add_source(config::Environment::default());

        if let Some(arg) = cli_port {
            let port: u16 = arg
                .parse()
                .map_err(|_| StartupError::InvalidPort(arg.to_string()))?;
            builder = builder.set_override("port", i64::from(port))?;
        }

        let settings = builder.build()?;
        settings.try_deserialize().map_err(|err| {
            // A garbage PORT variable surfaces as a deserialization error;
            // report it as the invalid-port case it really is.
            match std::env::var("PORT") {
                Ok(value) if value.parse::<u16>().is_err() => StartupError::InvalidPort(value),
                _ => StartupError::Config(err),
            }
        })
    }

    /// Startup guard: the static build must exist and contain the index
    /// document before any bind is attempted.
    pub fn validate(&self) -> Result<(), StartupError> {
        if !self.static_dir.is_dir() {
            return Err(StartupError::MissingStaticDir(self.static_dir.clone()));
        }
        let index_path = self.static_dir.join(&self.index_document);
        if !index_path.is_file() {
            return Err(StartupError::MissingIndexDocument(index_path));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, StartupError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(StartupError::InvalidAddr)
    }
}
