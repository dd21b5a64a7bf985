use crate::server::ServiceConfig;
use clap::Parser;

/// Serve the in-memory account and transaction ledger over HTTP
#[derive(Parser, Debug)]
#[command(name = "ledger-service")]
#[command(about = "Serve the in-memory account and transaction ledger over HTTP", long_about = None)]
pub struct CliArgs {
    /// Port to listen on
    #[arg(short = 'p', long = "port", env = "LEDGER_PORT", default_value_t = 80)]
    pub port: u16,

    /// Address to bind
    #[arg(long = "host", env = "LEDGER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Maximum number of accounts per shard
    #[arg(
        short = 'n',
        long = "cluster-size",
        env = "LEDGER_CLUSTER_SIZE",
        default_value_t = 10,
        help = "Maximum number of accounts per shard (0 disables account creation)"
    )]
    pub cluster_size: u64,

    /// Number of runtime worker threads
    #[arg(
        long = "workers",
        env = "LEDGER_WORKERS",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long = "request-timeout", env = "LEDGER_REQUEST_TIMEOUT", value_name = "SECONDS")]
    pub request_timeout_secs: Option<u64>,

    /// Maximum accepted request body size
    #[arg(long = "max-body-bytes", env = "LEDGER_MAX_BODY_BYTES", value_name = "BYTES")]
    pub max_body_bytes: Option<usize>,

    /// How many times account creation is retried after a transient store error
    #[arg(
        long = "create-retries",
        env = "LEDGER_CREATE_RETRIES",
        default_value_t = 3
    )]
    pub create_retries: u32,
}

impl CliArgs {
    /// Create a ServiceConfig from CLI arguments
    ///
    /// Unset options take their defaults; zero values for workers, timeout
    /// and body limit are replaced by defaults (with a warning) inside
    /// [`ServiceConfig::new`].
    pub fn to_service_config(&self) -> ServiceConfig {
        let default = ServiceConfig::default();
        ServiceConfig::new(
            format!("{}:{}", self.host, self.port),
            self.cluster_size,
            self.workers.unwrap_or(default.workers),
            self.request_timeout_secs
                .unwrap_or(default.request_timeout_secs),
            self.max_body_bytes.unwrap_or(default.max_body_bytes),
            self.create_retries,
        )
    }
}
