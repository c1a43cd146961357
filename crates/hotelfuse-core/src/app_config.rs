use std::path::PathBuf;

/// Runtime configuration for one aggregation host, read from the
/// environment by [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the supplier configuration YAML.
    pub suppliers_path: PathBuf,
    /// Log filter passed to the subscriber (e.g. "info", "debug").
    pub log_level: String,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// User-Agent sent on supplier requests.
    pub user_agent: String,
    /// Additional attempts after the first failure for retriable errors.
    pub max_retries: u32,
    /// Base delay for exponential backoff between attempts.
    pub backoff_base_ms: u64,
}
