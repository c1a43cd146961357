//! Canonical hotel model shared by the aggregator and its consumers.
//!
//! Every supplier's raw record is normalized into [`Hotel`] before merging;
//! the serialized shape (snake_case keys) is the public catalog contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub city: String,
    pub country: String,
}

/// Amenity buckets. Entries are lower-cased, trimmed, deduplicated, and
/// sorted by the normalizer; suppliers that ship a flat amenity list land
/// entirely in `room`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    pub general: Vec<String>,
    pub room: Vec<String>,
}

/// A single image. `link` is always non-empty; entries without a resolvable
/// link are dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub link: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    pub rooms: Vec<Image>,
    pub site: Vec<Image>,
    pub amenities: Vec<Image>,
}

/// The merged, supplier-independent hotel record.
///
/// `id` is the merge key and is unique within one catalog.
/// `destination_id` of 0 means the value could not be resolved from any
/// supplier; it is stored as-is but treated as absent when merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub destination_id: i64,
    pub name: String,
    pub location: Location,
    pub description: String,
    pub amenities: Amenities,
    pub images: Images,
    pub booking_conditions: Vec<String>,
}
