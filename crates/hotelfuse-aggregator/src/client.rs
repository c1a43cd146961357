//! HTTP client for supplier endpoints.
//!
//! One [`SupplierClient`] is shared across suppliers; [`fetch_all`] issues
//! the configured endpoints concurrently and degrades per-supplier failures
//! to empty record sets so one bad supplier never sinks the batch.
//!
//! [`fetch_all`]: SupplierClient::fetch_all

use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde_json::Value;

use hotelfuse_core::SupplierConfig;

use crate::error::{is_retriable, AggregatorError};
use crate::retry::{retry_with_backoff, RetryPolicy};

/// Raw supplier payloads keyed by supplier name, in configured order.
///
/// Order matters downstream: the merge folds suppliers in this order and
/// uses it for tie-breaks, so the map preserves insertion order rather than
/// hashing.
#[derive(Debug, Clone, Default)]
pub struct SupplierDataMap {
    entries: Vec<(String, Vec<Value>)>,
}

impl SupplierDataMap {
    #[must_use]
    pub fn from_entries(entries: Vec<(String, Vec<Value>)>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, supplier: String, records: Vec<Value>) {
        self.entries.push((supplier, records));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Value>)> {
        self.entries.iter().map(|(name, records)| (name, records))
    }

    #[must_use]
    pub fn get(&self, supplier: &str) -> Option<&[Value]> {
        self.entries
            .iter()
            .find(|(name, _)| name == supplier)
            .map(|(_, records)| records.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total record count across all suppliers.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }
}

/// Fetches raw hotel records from supplier endpoints with retry.
#[derive(Debug, Clone)]
pub struct SupplierClient {
    http: reqwest::Client,
    policy: RetryPolicy,
}

impl SupplierClient {
    /// Build a client with the given per-request timeout and retry policy.
    ///
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, AggregatorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            http,
            policy: RetryPolicy {
                max_retries,
                backoff_base_ms,
            },
        })
    }

    /// Fetch one supplier's records, retrying transient failures.
    ///
    /// A payload that is JSON `null`, empty, or not an array yields an
    /// empty record set; malformed JSON is an error and is not retried.
    ///
    /// # Errors
    /// Returns the final error once the retry budget is exhausted, or
    /// immediately for non-retriable failures.
    pub async fn fetch_supplier(
        &self,
        supplier: &SupplierConfig,
    ) -> Result<Vec<Value>, AggregatorError> {
        retry_with_backoff(self.policy, is_retriable, || self.fetch_once(supplier)).await
    }

    async fn fetch_once(&self, supplier: &SupplierConfig) -> Result<Vec<Value>, AggregatorError> {
        let response = self.http.get(&supplier.url).send().await?;
        let status = response.status();
        if status.as_u16() == 429 {
            return Err(AggregatorError::RateLimited {
                supplier: supplier.name.clone(),
            });
        }
        if !status.is_success() {
            return Err(AggregatorError::UnexpectedStatus {
                status: status.as_u16(),
                url: supplier.url.clone(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let payload: Value =
            serde_json::from_str(&body).map_err(|source| AggregatorError::Deserialize {
                context: format!("response body from supplier '{}'", supplier.name),
                source,
            })?;
        match payload {
            Value::Array(records) => Ok(records),
            Value::Null => Ok(Vec::new()),
            other => {
                tracing::warn!(
                    supplier = %supplier.name,
                    kind = json_kind(&other),
                    "supplier payload is not an array, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Fetch every supplier concurrently.
    ///
    /// Failures are logged and degrade to an empty record set; the returned
    /// map always has one entry per configured supplier, in configured
    /// order.
    pub async fn fetch_all(&self, suppliers: &[SupplierConfig]) -> SupplierDataMap {
        let entries: Vec<(String, Vec<Value>)> = stream::iter(suppliers)
            .map(|supplier| async move {
                let records = match self.fetch_supplier(supplier).await {
                    Ok(records) => {
                        tracing::info!(
                            supplier = %supplier.name,
                            count = records.len(),
                            "fetched supplier records"
                        );
                        records
                    }
                    Err(err) => {
                        tracing::warn!(
                            supplier = %supplier.name,
                            error = %err,
                            "supplier fetch failed, continuing with empty record set"
                        );
                        Vec::new()
                    }
                };
                (supplier.name.clone(), records)
            })
            // buffered, not buffer_unordered: the map must come back in
            // configured supplier order.
            .buffered(suppliers.len().max(1))
            .collect()
            .await;

        SupplierDataMap::from_entries(entries)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn data_map_preserves_insertion_order() {
        let mut map = SupplierDataMap::default();
        map.push("zeta".into(), vec![json!({"id": 1})]);
        map.push("alpha".into(), Vec::new());
        let names: Vec<&str> = map.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.record_count(), 1);
    }

    #[test]
    fn data_map_lookup_by_name() {
        let map = SupplierDataMap::from_entries(vec![
            ("acme".into(), vec![json!({"Id": "iJhz"})]),
            ("patagonia".into(), Vec::new()),
        ]);
        assert_eq!(map.get("acme").map(<[Value]>::len), Some(1));
        assert_eq!(map.get("patagonia").map(<[Value]>::len), Some(0));
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn client_construction_accepts_sane_settings() {
        let client = SupplierClient::new(10, "hotelfuse-test/0.1", 2, 1_000);
        assert!(client.is_ok());
    }
}
