//! Per-supplier field-mapping configuration.
//!
//! A [`FieldMapping`] tells the extractor where each canonical attribute
//! lives inside one supplier's raw JSON shape: for every attribute, an
//! ordered list of dotted paths to try. Mappings are loaded once from the
//! supplier config file and passed around read-only; nothing here is
//! inferred at runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationMapping {
    #[serde(default)]
    pub lat: Vec<String>,
    #[serde(default)]
    pub lng: Vec<String>,
    #[serde(default)]
    pub address: Vec<String>,
    #[serde(default)]
    pub city: Vec<String>,
    #[serde(default)]
    pub country: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageMapping {
    #[serde(default)]
    pub rooms: Vec<String>,
    #[serde(default)]
    pub site: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Ordered candidate paths for every canonical hotel attribute.
///
/// Empty lists are valid: they mean the supplier never carries that
/// attribute and extraction falls through to the attribute's default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default)]
    pub hotel_id: Vec<String>,
    #[serde(default)]
    pub destination_id: Vec<String>,
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub location: LocationMapping,
    #[serde(default)]
    pub images: ImageMapping,
    #[serde(default)]
    pub booking_conditions: Vec<String>,
}

/// One configured supplier: a unique name (used as the result-map key and
/// as the log tag), the endpoint URL, and the field mapping for its shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierConfig {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub field_mapping: FieldMapping,
}
