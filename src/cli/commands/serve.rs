//! Serve command implementation
//!
//! This module implements the `serve` command for running the HTTP read
//! surface over the record collection.

use crate::adapters::store::CsvRecordStore;
use crate::config::load_config;
use crate::server::{serve, AppState};
use clap::Args;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the bind address from configuration
    #[arg(long)]
    pub bind: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting serve command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(bind) = &self.bind {
            tracing::info!(bind = %bind, "Overriding bind address from CLI");
            config.server.bind = bind.clone();
        }

        let addr: SocketAddr = match config.server.bind.parse() {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Invalid bind address '{}': {e}", config.server.bind);
                return Ok(2);
            }
        };

        let store = Arc::new(CsvRecordStore::new(&config.store.path));
        let state = AppState::new(store);

        println!("🌐 Serving hospital records from {}", config.store.path);
        println!("   http://{addr}/api/hospitals");
        println!();

        if let Err(e) = serve(addr, state, config.server.cors_enabled, shutdown_signal).await {
            tracing::error!(error = %e, "Server failed");
            eprintln!("Server failed: {e}");
            return Ok(5); // Fatal error exit code
        }

        println!("Server stopped.");
        Ok(0)
    }
}
