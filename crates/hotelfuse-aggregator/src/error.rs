use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by supplier {supplier} (HTTP 429)")]
    RateLimited { supplier: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Returns `true` if `err` represents a transient condition worth retrying
/// after a backoff delay.
///
/// Retriable:
/// - [`AggregatorError::Http`]: network-level failure (timeout, DNS, reset)
///   or any request that never produced a response.
/// - [`AggregatorError::RateLimited`]: HTTP 429; the supplier asked us to
///   back off.
/// - [`AggregatorError::UnexpectedStatus`] with a 5xx status.
///
/// Non-retriable (fail the supplier immediately):
/// - [`AggregatorError::UnexpectedStatus`] with a 4xx other than 429;
///   retrying would return the same result.
/// - [`AggregatorError::Deserialize`]: the body does not parse; retrying
///   won't fix it.
#[must_use]
pub fn is_retriable(err: &AggregatorError) -> bool {
    match err {
        AggregatorError::Http(_) | AggregatorError::RateLimited { .. } => true,
        AggregatorError::UnexpectedStatus { status, .. } => *status >= 500,
        AggregatorError::Deserialize { .. } => false,
    }
}
