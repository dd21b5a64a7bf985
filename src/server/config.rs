//! Service configuration.

/// Default accounts per shard.
pub const DEFAULT_CLUSTER_SIZE: u64 = 10;

/// Runtime and HTTP settings for the ledger service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:80").
    pub listen_addr: String,

    /// Maximum accounts per shard.
    pub cluster_size: u64,

    /// Runtime worker threads (default: CPU cores).
    pub workers: usize,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Extra attempts for account creation after a transient store error.
    pub create_retries: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:80".into(),
            cluster_size: DEFAULT_CLUSTER_SIZE,
            workers: num_cpus::get(),
            request_timeout_secs: 30,
            max_body_bytes: 64 * 1024,
            create_retries: 3,
        }
    }
}

impl ServiceConfig {
    /// Create a configuration, replacing invalid zero values with defaults.
    ///
    /// `cluster_size` is kept as given: a zero cluster size is a valid (if
    /// degenerate) store configuration that rejects account creation.
    pub fn new(
        listen_addr: String,
        cluster_size: u64,
        workers: usize,
        request_timeout_secs: u64,
        max_body_bytes: usize,
        create_retries: u32,
    ) -> Self {
        let default = Self::default();

        let workers = if workers == 0 {
            tracing::warn!(workers, fallback = default.workers, "invalid worker count, using default");
            default.workers
        } else {
            workers
        };

        let request_timeout_secs = if request_timeout_secs == 0 {
            tracing::warn!(
                request_timeout_secs,
                fallback = default.request_timeout_secs,
                "invalid request timeout, using default"
            );
            default.request_timeout_secs
        } else {
            request_timeout_secs
        };

        let max_body_bytes = if max_body_bytes == 0 {
            tracing::warn!(
                max_body_bytes,
                fallback = default.max_body_bytes,
                "invalid body limit, using default"
            );
            default.max_body_bytes
        } else {
            max_body_bytes
        };

        if cluster_size == 0 {
            tracing::warn!("cluster size is 0; account creation will be rejected");
        }

        Self {
            listen_addr,
            cluster_size,
            workers,
            request_timeout_secs,
            max_body_bytes,
            create_retries,
        }
    }
}
