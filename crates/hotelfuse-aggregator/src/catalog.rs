//! Query helpers over a merged catalog: id filtering and pagination.

use hotelfuse_core::Hotel;

/// Filter a merged catalog by hotel ids and/or destination ids.
///
/// Hotel id matching is case-insensitive. An empty filter slice means "no
/// constraint" for that dimension; both constraints together are a
/// conjunction. Catalog order is preserved.
#[must_use]
pub fn filter_hotels(hotels: &[Hotel], hotel_ids: &[String], destination_ids: &[i64]) -> Vec<Hotel> {
    let wanted_ids: Vec<String> = hotel_ids.iter().map(|id| id.to_lowercase()).collect();
    hotels
        .iter()
        .filter(|hotel| {
            wanted_ids.is_empty() || wanted_ids.contains(&hotel.id.to_lowercase())
        })
        .filter(|hotel| {
            destination_ids.is_empty() || destination_ids.contains(&hotel.destination_id)
        })
        .cloned()
        .collect()
}

/// Apply page-based slicing to a catalog.
///
/// `items_per_page` alone truncates to the first N entries; that branch
/// requires `page_number` to be entirely absent. A positive `page_number`
/// selects that 1-indexed page, with `items_per_page` defaulting to 10. A
/// `page_number` of 0 disables slicing altogether, even when
/// `items_per_page` is set; an `items_per_page` of 0 is treated as absent.
/// Slicing past the end yields an empty page.
#[must_use]
pub fn paginate(hotels: Vec<Hotel>, items_per_page: Option<usize>, page_number: Option<usize>) -> Vec<Hotel> {
    let per = items_per_page.filter(|n| *n > 0);

    match page_number {
        None => match per {
            Some(per) => hotels.into_iter().take(per).collect(),
            None => hotels,
        },
        Some(page) if page > 0 => {
            let per = per.unwrap_or(10);
            hotels
                .into_iter()
                .skip((page - 1).saturating_mul(per))
                .take(per)
                .collect()
        }
        Some(_) => hotels,
    }
}
