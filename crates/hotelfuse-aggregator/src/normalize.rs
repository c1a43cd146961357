//! Normalization from raw supplier records to the canonical [`Hotel`].
//!
//! Extraction is mapping-driven via [`crate::extract`]; this module owns
//! the per-attribute shaping rules (amenity cleanup, image cleanup,
//! defaults). A record whose hotel id cannot be resolved is discarded
//! (`None`), never an error.

use std::collections::BTreeSet;

use serde_json::Value;

use hotelfuse_core::{Amenities, FieldMapping, Hotel, Image, Images, Location};

use crate::extract::{
    coerce_f64, coerce_i64, coerce_string, extract_field, extract_first_key,
    FALLBACK_DESCRIPTION_KEYS, FALLBACK_DESTINATION_KEYS, FALLBACK_ID_KEYS, FALLBACK_NAME_KEYS,
};

/// Normalize one raw supplier record into a [`Hotel`].
///
/// `mapping` is the supplier's field mapping; `None` switches to fallback
/// mode, which tries conventional key names instead of configured paths.
/// Returns `None` when no hotel id can be resolved; every other attribute
/// degrades to its default.
#[must_use]
pub fn normalize_hotel(record: &Value, mapping: Option<&FieldMapping>) -> Option<Hotel> {
    let id = extract_hotel_id(record, mapping)?;

    Some(Hotel {
        id,
        destination_id: extract_destination_id(record, mapping),
        name: extract_name(record, mapping),
        location: extract_location(record, mapping),
        description: extract_description(record, mapping),
        amenities: extract_amenities(record, mapping),
        images: extract_images(record, mapping),
        booking_conditions: extract_booking_conditions(record, mapping),
    })
}

/// Resolve the hotel id. Shared with the available-ids helper so both walk
/// records identically.
pub(crate) fn extract_hotel_id(record: &Value, mapping: Option<&FieldMapping>) -> Option<String> {
    let value = match mapping {
        Some(m) => extract_field(record, &m.hotel_id),
        None => extract_first_key(record, FALLBACK_ID_KEYS),
    };
    value.and_then(coerce_string)
}

/// Resolve the destination id, defaulting to 0 when absent or uncoercible.
pub(crate) fn extract_destination_id(record: &Value, mapping: Option<&FieldMapping>) -> i64 {
    let value = match mapping {
        Some(m) => extract_field(record, &m.destination_id),
        None => extract_first_key(record, FALLBACK_DESTINATION_KEYS),
    };
    value.and_then(coerce_i64).unwrap_or(0)
}

fn extract_name(record: &Value, mapping: Option<&FieldMapping>) -> String {
    let value = match mapping {
        Some(m) => extract_field(record, &m.name),
        None => extract_first_key(record, FALLBACK_NAME_KEYS),
    };
    value.and_then(coerce_string).unwrap_or_default()
}

fn extract_description(record: &Value, mapping: Option<&FieldMapping>) -> String {
    let value = match mapping {
        Some(m) => extract_field(record, &m.description),
        None => extract_first_key(record, FALLBACK_DESCRIPTION_KEYS),
    };
    value.and_then(coerce_string).unwrap_or_default()
}

fn extract_location(record: &Value, mapping: Option<&FieldMapping>) -> Location {
    if let Some(m) = mapping {
        return Location {
            lat: extract_field(record, &m.location.lat)
                .and_then(coerce_f64)
                .unwrap_or(0.0),
            lng: extract_field(record, &m.location.lng)
                .and_then(coerce_f64)
                .unwrap_or(0.0),
            address: extract_field(record, &m.location.address)
                .and_then(coerce_string)
                .unwrap_or_default(),
            city: extract_field(record, &m.location.city)
                .and_then(coerce_string)
                .unwrap_or_default(),
            country: extract_field(record, &m.location.country)
                .and_then(coerce_string)
                .unwrap_or_default(),
        };
    }

    // Fallback mode: suppliers usually nest these under "location" or
    // "address"; missing container means all defaults.
    let container = extract_first_key(record, &["location", "address"]).unwrap_or(&Value::Null);
    Location {
        lat: extract_first_key(container, &["lat", "latitude"])
            .and_then(coerce_f64)
            .unwrap_or(0.0),
        lng: extract_first_key(container, &["lng", "longitude"])
            .and_then(coerce_f64)
            .unwrap_or(0.0),
        address: extract_first_key(container, &["address", "street_address"])
            .and_then(coerce_string)
            .unwrap_or_default(),
        city: extract_first_key(container, &["city"])
            .and_then(coerce_string)
            .unwrap_or_default(),
        country: extract_first_key(container, &["country"])
            .and_then(coerce_string)
            .unwrap_or_default(),
    }
}

fn extract_amenities(record: &Value, mapping: Option<&FieldMapping>) -> Amenities {
    let raw = match mapping {
        Some(m) => extract_field(record, &m.amenities),
        None => extract_first_key(record, &["amenities", "facilities"]),
    };

    match raw {
        // A flat list means the supplier doesn't distinguish buckets; treat
        // everything as room amenities.
        Some(Value::Array(entries)) => Amenities {
            general: Vec::new(),
            room: normalize_amenity_list(entries),
        },
        Some(structured @ Value::Object(_)) => Amenities {
            general: extract_first_key(structured, &["general", "hotel"])
                .and_then(Value::as_array)
                .map(|entries| normalize_amenity_list(entries))
                .unwrap_or_default(),
            room: extract_first_key(structured, &["room", "rooms"])
                .and_then(Value::as_array)
                .map(|entries| normalize_amenity_list(entries))
                .unwrap_or_default(),
        },
        _ => Amenities::default(),
    }
}

/// Shape one amenity bucket: lower-case and trim every string entry, drop
/// tokens of length <= 1 or without any alphabetic character, deduplicate,
/// and return in sorted order.
fn normalize_amenity_list(entries: &[Value]) -> Vec<String> {
    let cleaned: BTreeSet<String> = entries
        .iter()
        .filter_map(Value::as_str)
        .map(|s| s.trim().to_lowercase())
        .filter(|s| s.chars().count() > 1 && s.chars().any(char::is_alphabetic))
        .collect();
    cleaned.into_iter().collect()
}

fn extract_images(record: &Value, mapping: Option<&FieldMapping>) -> Images {
    if let Some(m) = mapping {
        return Images {
            rooms: normalize_image_list(extract_field(record, &m.images.rooms)),
            site: normalize_image_list(extract_field(record, &m.images.site)),
            amenities: normalize_image_list(extract_field(record, &m.images.amenities)),
        };
    }

    let container = extract_first_key(record, &["images", "pictures"]).unwrap_or(&Value::Null);
    Images {
        rooms: normalize_image_list(extract_first_key(container, &["rooms", "room"])),
        site: normalize_image_list(extract_first_key(container, &["site", "exterior"])),
        amenities: normalize_image_list(extract_first_key(container, &["amenities", "facilities"])),
    }
}

/// Shape one image bucket. Entries are either bare link strings or objects
/// with `link`/`url` and `description`/`caption` fields. Entries without a
/// resolvable link are dropped; later duplicate links are dropped with the
/// first occurrence winning; first-occurrence order is preserved.
fn normalize_image_list(raw: Option<&Value>) -> Vec<Image> {
    let Some(Value::Array(entries)) = raw else {
        return Vec::new();
    };

    let mut seen_links = BTreeSet::new();
    let mut images = Vec::new();
    for entry in entries {
        let image = match entry {
            Value::String(link) => Image {
                link: link.clone(),
                description: String::new(),
            },
            Value::Object(_) => Image {
                link: extract_first_key(entry, &["link", "url"])
                    .and_then(coerce_string)
                    .unwrap_or_default(),
                description: extract_first_key(entry, &["description", "caption"])
                    .and_then(coerce_string)
                    .unwrap_or_default(),
            },
            _ => continue,
        };
        if image.link.is_empty() {
            continue;
        }
        if seen_links.insert(image.link.clone()) {
            images.push(image);
        }
    }
    images
}

fn extract_booking_conditions(record: &Value, mapping: Option<&FieldMapping>) -> Vec<String> {
    let raw = match mapping {
        Some(m) => extract_field(record, &m.booking_conditions),
        None => extract_first_key(record, &["booking_conditions", "terms"]),
    };

    match raw {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use hotelfuse_core::{ImageMapping, LocationMapping};

    use super::*;

    /// Mapping matching the "acme" supplier shape.
    fn acme_mapping() -> FieldMapping {
        FieldMapping {
            hotel_id: vec!["Id".into()],
            destination_id: vec!["DestinationId".into()],
            name: vec!["Name".into()],
            description: vec!["Description".into()],
            amenities: vec!["Facilities".into()],
            location: LocationMapping {
                lat: vec!["Latitude".into()],
                lng: vec!["Longitude".into()],
                address: vec!["Address".into()],
                city: vec!["City".into()],
                country: vec!["Country".into()],
            },
            ..FieldMapping::default()
        }
    }

    /// Mapping matching the "paperflies" supplier shape.
    fn paperflies_mapping() -> FieldMapping {
        FieldMapping {
            hotel_id: vec!["hotel_id".into()],
            destination_id: vec!["destination_id".into()],
            name: vec!["hotel_name".into()],
            description: vec!["details".into()],
            amenities: vec!["amenities".into()],
            location: LocationMapping {
                address: vec!["location.address".into()],
                country: vec!["location.country".into()],
                ..LocationMapping::default()
            },
            images: ImageMapping {
                rooms: vec!["images.rooms".into()],
                site: vec!["images.site".into()],
                ..ImageMapping::default()
            },
            booking_conditions: vec!["booking_conditions".into()],
        }
    }

    #[test]
    fn normalizes_acme_shaped_record() {
        let record = json!({
            "Id": "iJhz",
            "DestinationId": 5432,
            "Name": "Beach Villas Singapore",
            "Latitude": 1.264751,
            "Longitude": 103.824006,
            "Address": " 8 Sentosa Gateway, Beach Villas ",
            "City": "Singapore",
            "Country": "SG",
            "Description": "Surrounded by tropical gardens.",
            "Facilities": ["Pool", "BusinessCenter", "WiFi "]
        });

        let hotel = normalize_hotel(&record, Some(&acme_mapping())).unwrap();
        assert_eq!(hotel.id, "iJhz");
        assert_eq!(hotel.destination_id, 5432);
        assert_eq!(hotel.name, "Beach Villas Singapore");
        assert!((hotel.location.lat - 1.264751).abs() < 1e-9);
        assert_eq!(hotel.location.country, "SG");
        assert!(hotel.amenities.general.is_empty());
        assert_eq!(
            hotel.amenities.room,
            vec!["businesscenter", "pool", "wifi"]
        );
        assert!(hotel.booking_conditions.is_empty());
    }

    #[test]
    fn record_without_resolvable_id_is_discarded() {
        let record = json!({"Name": "No Id Hotel", "DestinationId": 1});
        assert!(normalize_hotel(&record, Some(&acme_mapping())).is_none());
        assert!(normalize_hotel(&json!({"name": "still none"}), None).is_none());
    }

    #[test]
    fn destination_id_defaults_to_zero() {
        let record = json!({"Id": "abc", "DestinationId": "not numeric"});
        let hotel = normalize_hotel(&record, Some(&acme_mapping())).unwrap();
        assert_eq!(hotel.destination_id, 0);
    }

    #[test]
    fn destination_id_coerces_numeric_string() {
        let record = json!({"Id": "abc", "DestinationId": "5432"});
        let hotel = normalize_hotel(&record, Some(&acme_mapping())).unwrap();
        assert_eq!(hotel.destination_id, 5432);
    }

    #[test]
    fn missing_strings_default_to_empty() {
        let record = json!({"Id": "abc"});
        let hotel = normalize_hotel(&record, Some(&acme_mapping())).unwrap();
        assert_eq!(hotel.name, "");
        assert_eq!(hotel.description, "");
        assert_eq!(hotel.location.address, "");
        assert!((hotel.location.lat - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn structured_amenities_fill_both_buckets() {
        let record = json!({
            "hotel_id": "iJhz",
            "amenities": {
                "general": ["outdoor pool", "business center", "Outdoor Pool"],
                "room": ["tv", "aircon", "x", "123"]
            }
        });
        let hotel = normalize_hotel(&record, Some(&paperflies_mapping())).unwrap();
        assert_eq!(
            hotel.amenities.general,
            vec!["business center", "outdoor pool"]
        );
        // "x" is too short and "123" has no letter; both dropped.
        assert_eq!(hotel.amenities.room, vec!["aircon", "tv"]);
    }

    #[test]
    fn structured_amenities_accept_bucket_aliases() {
        let record = json!({
            "id": "iJhz",
            "amenities": {"hotel": ["Spa"], "rooms": ["Minibar"]}
        });
        let hotel = normalize_hotel(&record, None).unwrap();
        assert_eq!(hotel.amenities.general, vec!["spa"]);
        assert_eq!(hotel.amenities.room, vec!["minibar"]);
    }

    #[test]
    fn amenity_entries_without_letters_are_dropped() {
        let record = json!({
            "Id": "abc",
            "Facilities": ["-", "***", "42", " wifi ", "WiFi", 17, null]
        });
        let hotel = normalize_hotel(&record, Some(&acme_mapping())).unwrap();
        assert_eq!(hotel.amenities.room, vec!["wifi"]);
    }

    #[test]
    fn non_list_amenities_yield_empty_buckets() {
        let record = json!({"Id": "abc", "Facilities": "Pool"});
        let hotel = normalize_hotel(&record, Some(&acme_mapping())).unwrap();
        assert_eq!(hotel.amenities, Amenities::default());
    }

    #[test]
    fn image_objects_and_aliases_are_normalized() {
        let record = json!({
            "hotel_id": "iJhz",
            "images": {
                "rooms": [
                    {"link": "https://img.example.com/2.jpg", "caption": "Double room"},
                    {"url": "https://img.example.com/3.jpg", "description": "Suite"},
                    "https://img.example.com/4.jpg"
                ],
                "site": [
                    {"link": "", "caption": "broken"},
                    {"caption": "no link at all"}
                ]
            }
        });
        let hotel = normalize_hotel(&record, Some(&paperflies_mapping())).unwrap();
        assert_eq!(
            hotel.images.rooms,
            vec![
                Image {
                    link: "https://img.example.com/2.jpg".into(),
                    description: "Double room".into()
                },
                Image {
                    link: "https://img.example.com/3.jpg".into(),
                    description: "Suite".into()
                },
                Image {
                    link: "https://img.example.com/4.jpg".into(),
                    description: String::new()
                },
            ]
        );
        assert!(hotel.images.site.is_empty(), "entries without link dropped");
    }

    #[test]
    fn duplicate_image_links_keep_first_occurrence() {
        let record = json!({
            "hotel_id": "iJhz",
            "images": {
                "rooms": [
                    {"link": "https://img.example.com/2.jpg", "caption": "first"},
                    {"link": "https://img.example.com/2.jpg", "caption": "second"}
                ]
            }
        });
        let hotel = normalize_hotel(&record, Some(&paperflies_mapping())).unwrap();
        assert_eq!(hotel.images.rooms.len(), 1);
        assert_eq!(hotel.images.rooms[0].description, "first");
    }

    #[test]
    fn booking_conditions_keep_order_and_skip_non_strings() {
        let record = json!({
            "hotel_id": "iJhz",
            "booking_conditions": ["All children are welcome.", 42, "Pets are not allowed."]
        });
        let hotel = normalize_hotel(&record, Some(&paperflies_mapping())).unwrap();
        assert_eq!(
            hotel.booking_conditions,
            vec!["All children are welcome.", "Pets are not allowed."]
        );
    }

    #[test]
    fn non_list_booking_conditions_yield_empty() {
        let record = json!({"hotel_id": "iJhz", "booking_conditions": "no pets"});
        let hotel = normalize_hotel(&record, Some(&paperflies_mapping())).unwrap();
        assert!(hotel.booking_conditions.is_empty());
    }

    #[test]
    fn fallback_mode_reads_conventional_keys() {
        let record = json!({
            "id": "f8c9",
            "destination": 1122,
            "hotel_name": "Hilton Tokyo",
            "info": "Close to Shinjuku.",
            "address": {
                "latitude": 35.6926,
                "longitude": 139.690965,
                "street_address": "160-0023 Shinjuku",
                "city": "Tokyo",
                "country": "JP"
            },
            "facilities": ["Bar", "Pool"],
            "pictures": {"exterior": ["https://img.example.com/front.jpg"]},
            "terms": ["No smoking."]
        });

        let hotel = normalize_hotel(&record, None).unwrap();
        assert_eq!(hotel.id, "f8c9");
        assert_eq!(hotel.destination_id, 1122);
        assert_eq!(hotel.name, "Hilton Tokyo");
        assert_eq!(hotel.description, "Close to Shinjuku.");
        assert!((hotel.location.lat - 35.6926).abs() < 1e-9);
        assert_eq!(hotel.location.address, "160-0023 Shinjuku");
        assert_eq!(hotel.location.city, "Tokyo");
        assert_eq!(hotel.amenities.room, vec!["bar", "pool"]);
        assert_eq!(hotel.images.site.len(), 1);
        assert_eq!(hotel.booking_conditions, vec!["No smoking."]);
    }
}
