use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP server binds to
    /// Default: 127.0.0.1
    pub host: String,

    /// Port the HTTP server binds to
    /// Default: 8080
    pub port: u16,

    /// Maximum accepted request body size (in bytes)
    /// Default: 10MB (10 * 1024 * 1024)
    pub max_payload_size: usize,

    /// Directory holding the log file
    /// Default: current working directory
    pub log_dir: PathBuf,

    /// Name of the append-only log file
    /// Default: log.txt
    pub log_file: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - HOST: bind address (default: 127.0.0.1)
    /// - PORT: bind port (default: 8080)
    /// - MAX_PAYLOAD_SIZE: Maximum request payload size in bytes (default: 10485760 = 10MB)
    /// - LOG_DIR: directory for the log file (default: .)
    /// - LOG_FILE: log file name (default: log.txt)
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| format!("PORT must be a valid port number, got {:?}", value))?,
            Err(_) => 8080,
        };

        // Parse MAX_PAYLOAD_SIZE with default fallback
        let max_payload_size = env::var("MAX_PAYLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10 * 1024 * 1024); // Default: 10MB

        let log_dir = env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "log.txt".to_string());

        Ok(Config {
            host,
            port,
            max_payload_size,
            log_dir,
            log_file,
        })
    }

    /// Command line flags take precedence over the environment
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(log_dir) = &cli.log_dir {
            self.log_dir = log_dir.clone();
        }
        self
    }
}
