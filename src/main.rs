//! Ledger Service
//!
//! Serves the in-memory account and transaction ledger over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- -p 8080
//! cargo run -- -p 8080 -n 100
//! RUST_LOG=debug cargo run -- --port 8080 --workers 4
//! ```
//!
//! # Endpoints
//!
//! - `POST /accounts` with `{"document_number": "..."}`
//! - `GET /accounts/{account_id}`
//! - `POST /transactions` with `{"account_id": 1, "operation_type_id": 4, "amount": 12.5}`
//! - `GET /health`
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown
//! - 1: Error (address in use, runtime failure, etc.)

use ledger_service::{cli, server};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,ledger_service=debug")),
        )
        .init();

    let config = args.to_service_config();

    // Multi-threaded runtime sized from the configuration
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(server::serve(config)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
