//! Server configuration
//!
//! Defaults are suitable for local single-user use; environment variables
//! override them, and CLI flags override the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Path to the SQLite database file (default: datashelf.db)
    pub database_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            database_path: PathBuf::from("datashelf.db"),
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the environment.
    ///
    /// Recognized variables:
    /// - `DATASHELF_ADDR` - bind address (`host:port`)
    /// - `DATASHELF_DB` - database file path
    ///
    /// Unset variables fall back to defaults; an unparsable address is
    /// ignored with a warning rather than aborting startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = env::var("DATASHELF_ADDR") {
            match addr.parse() {
                Ok(parsed) => config.bind_addr = parsed,
                Err(_) => {
                    tracing::warn!(%addr, "ignoring unparsable DATASHELF_ADDR");
                }
            }
        }

        if let Ok(path) = env::var("DATASHELF_DB") {
            config.database_path = PathBuf::from(path);
        }

        config
    }
}
