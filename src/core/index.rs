use crate::models::{Record, ResourceKind, SearchResult};

/// Merge the four resource lists into one tagged candidate list
///
/// Order is Customers, Hotels, Tours, Flights; each list keeps the order the
/// API returned it in. Nothing is de-duplicated.
pub fn merge_candidates(
    customers: &[Record],
    hotels: &[Record],
    tours: &[Record],
    flights: &[Record],
) -> Vec<SearchResult> {
    let mut candidates =
        Vec::with_capacity(customers.len() + hotels.len() + tours.len() + flights.len());

    let lists = [
        (ResourceKind::Customer, customers),
        (ResourceKind::Hotel, hotels),
        (ResourceKind::Tour, tours),
        (ResourceKind::Flight, flights),
    ];

    for (kind, records) in lists {
        candidates.extend(records.iter().cloned().map(|data| SearchResult::new(kind, data)));
    }

    candidates
}
