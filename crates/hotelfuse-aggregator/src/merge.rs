//! Cross-supplier merge of normalized hotels.
//!
//! Records are folded into an id-keyed catalog in the supplier order
//! given; when two suppliers describe the same hotel the fields are
//! reconciled with deterministic tie-breaks (see [`merge_into`]).

use std::collections::HashMap;

use hotelfuse_core::{Hotel, Image, SupplierConfig};

use crate::client::SupplierDataMap;
use crate::normalize::normalize_hotel;

/// Merge every supplier's raw records into one de-duplicated catalog.
///
/// Suppliers are processed in the order `data` was assembled (the
/// configured order), so results are reproducible. Records without a
/// resolvable id are skipped. Output is ordered by first appearance of
/// each hotel id.
#[must_use]
pub fn merge_hotels(data: &SupplierDataMap, suppliers: &[SupplierConfig]) -> Vec<Hotel> {
    let mut order: Vec<String> = Vec::new();
    let mut by_id: HashMap<String, Hotel> = HashMap::new();

    for (supplier_name, records) in data.iter() {
        let mapping = suppliers
            .iter()
            .find(|s| &s.name == supplier_name)
            .map(|s| &s.field_mapping);
        tracing::info!(
            supplier = %supplier_name,
            count = records.len(),
            "merging supplier records"
        );

        for record in records {
            let Some(incoming) = normalize_hotel(record, mapping) else {
                tracing::warn!(
                    supplier = %supplier_name,
                    "skipping record with no resolvable hotel id"
                );
                continue;
            };

            if let Some(existing) = by_id.get_mut(&incoming.id) {
                merge_into(existing, incoming);
            } else {
                order.push(incoming.id.clone());
                by_id.insert(incoming.id.clone(), incoming);
            }
        }
    }

    let merged: Vec<Hotel> = order.into_iter().filter_map(|id| by_id.remove(&id)).collect();
    tracing::info!(count = merged.len(), "merged catalog assembled");
    merged
}

/// Field-by-field reconciliation of a second sighting of the same hotel.
///
/// - `destination_id`, `lat`, `lng`: existing non-zero wins, else incoming
///   (0 is the "absent" sentinel for these).
/// - free-text strings: choose-longest, existing wins exact-length ties.
/// - amenity buckets and booking conditions: ordered set union.
/// - image buckets: union keyed by link; an incoming duplicate link is
///   dropped even when its description differs.
fn merge_into(existing: &mut Hotel, incoming: Hotel) {
    if existing.destination_id == 0 {
        existing.destination_id = incoming.destination_id;
    }

    choose_longest(&mut existing.name, incoming.name);
    choose_longest(&mut existing.description, incoming.description);

    if existing.location.lat == 0.0 {
        existing.location.lat = incoming.location.lat;
    }
    if existing.location.lng == 0.0 {
        existing.location.lng = incoming.location.lng;
    }
    choose_longest(&mut existing.location.address, incoming.location.address);
    choose_longest(&mut existing.location.city, incoming.location.city);
    choose_longest(&mut existing.location.country, incoming.location.country);

    union_strings(&mut existing.amenities.general, incoming.amenities.general);
    union_strings(&mut existing.amenities.room, incoming.amenities.room);
    union_strings(
        &mut existing.booking_conditions,
        incoming.booking_conditions,
    );

    union_images(&mut existing.images.rooms, incoming.images.rooms);
    union_images(&mut existing.images.site, incoming.images.site);
    union_images(&mut existing.images.amenities, incoming.images.amenities);
}

/// The longer string wins; the existing value keeps exact-length ties. An
/// empty incoming string can never displace a non-empty one.
fn choose_longest(existing: &mut String, incoming: String) {
    if incoming.chars().count() > existing.chars().count() {
        *existing = incoming;
    }
}

/// Ordered set union: existing entries keep their relative order, incoming
/// entries not already present are appended in their original order.
fn union_strings(existing: &mut Vec<String>, incoming: Vec<String>) {
    for entry in incoming {
        if !existing.contains(&entry) {
            existing.push(entry);
        }
    }
}

fn union_images(existing: &mut Vec<Image>, incoming: Vec<Image>) {
    for image in incoming {
        if !existing.iter().any(|e| e.link == image.link) {
            existing.push(image);
        }
    }
}
