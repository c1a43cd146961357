//! Enumeration of the hotel and destination ids present in fetched data.

use std::collections::BTreeSet;

use hotelfuse_core::SupplierConfig;
use serde_json::Value;

use crate::client::SupplierDataMap;
use crate::normalize::{extract_destination_id, extract_hotel_id};

/// The distinct ids resolvable from a batch of raw supplier data.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct AvailableIds {
    /// Sorted, deduplicated hotel ids. A record contributes whenever its
    /// hotel id resolves, even if its destination id does not.
    pub hotel_ids: Vec<String>,
    /// Sorted, deduplicated destination ids. 0 is the absence sentinel and
    /// is never listed.
    pub destination_ids: Vec<i64>,
}

/// Walk every record of every supplier and collect the ids that resolve.
///
/// Extraction uses the same mapping (or fallback) logic as normalization,
/// so a record counted here is exactly a record the merge would keep.
#[must_use]
pub fn extract_available_ids(data: &SupplierDataMap, suppliers: &[SupplierConfig]) -> AvailableIds {
    let mut hotel_ids: BTreeSet<String> = BTreeSet::new();
    let mut destination_ids: BTreeSet<i64> = BTreeSet::new();

    for (supplier_name, records) in data.iter() {
        let mapping = suppliers
            .iter()
            .find(|s| &s.name == supplier_name)
            .map(|s| &s.field_mapping);
        for record in records {
            collect_ids(record, mapping, &mut hotel_ids, &mut destination_ids);
        }
    }

    AvailableIds {
        hotel_ids: hotel_ids.into_iter().collect(),
        destination_ids: destination_ids.into_iter().collect(),
    }
}

fn collect_ids(
    record: &Value,
    mapping: Option<&hotelfuse_core::FieldMapping>,
    hotel_ids: &mut BTreeSet<String>,
    destination_ids: &mut BTreeSet<i64>,
) {
    if let Some(id) = extract_hotel_id(record, mapping) {
        hotel_ids.insert(id);
    }
    let destination = extract_destination_id(record, mapping);
    if destination != 0 {
        destination_ids.insert(destination);
    }
}
