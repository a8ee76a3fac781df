//! datashelf CLI - record-management web application
//!
//! Starts the HTTP server that serves the record listing page and its
//! form endpoints, backed by a local SQLite file.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use datashelf_core::ServerConfig;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "datashelf", version, about = "Record-management web app")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Bind address (overrides DATASHELF_ADDR)
        #[arg(long)]
        addr: Option<SocketAddr>,

        /// Database file path (overrides DATASHELF_DB)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    match cli.command {
        Command::Serve { addr, db } => {
            let mut config = ServerConfig::from_env();
            if let Some(addr) = addr {
                config.bind_addr = addr;
            }
            if let Some(db) = db {
                config.database_path = db;
            }

            tracing::info!(
                db = %config.database_path.display(),
                "starting datashelf"
            );
            datashelf_server::serve(config).await?;
        }
    }

    Ok(())
}
