//! Server configuration and command-line parsing.

use clap::Parser;
use receipt_points::{ProcessorConfig, DEFAULT_MAX_BODY_BYTES};

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Emit a span per request with method, URI and headers.
    pub log_requests: bool,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// The processor configuration implied by this server configuration.
    pub fn processor(&self) -> ProcessorConfig {
        ProcessorConfig {
            max_body_bytes: self.max_body_bytes,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_requests: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Score purchase receipts over HTTP.
#[derive(Debug, Parser)]
#[command(name = "receipt-points")]
#[command(version)]
pub struct Cli {
    /// Host name or IP address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port used for the web server
    #[arg(short, long, default_value_t = 8080, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Enable logging for all requests
    #[arg(long)]
    pub logging: bool,

    /// Largest accepted request body, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

impl Cli {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            log_requests: self.logging,
            max_body_bytes: self.max_body_bytes,
        }
    }
}
