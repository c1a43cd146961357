//! Supplier fetch orchestration and hotel data merging.
//!
//! The pipeline: [`SupplierClient::fetch_all`] pulls raw records from the
//! configured endpoints concurrently (with retry), [`merge_hotels`] folds
//! them into one deduplicated catalog, and [`catalog`] offers filtering and
//! pagination over the result.

pub mod catalog;
pub mod client;
pub mod error;
pub mod extract;
pub mod ids;
pub mod merge;
pub mod normalize;
pub mod resolve;
pub mod retry;

pub use catalog::{filter_hotels, paginate};
pub use client::{SupplierClient, SupplierDataMap};
pub use error::{is_retriable, AggregatorError};
pub use ids::{extract_available_ids, AvailableIds};
pub use merge::merge_hotels;
pub use normalize::normalize_hotel;
pub use retry::{retry_with_backoff, RetryPolicy};
