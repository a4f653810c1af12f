use crate::models::SearchResult;

/// Check if a field value contains an already lower-cased query
#[inline]
fn field_contains(value: Option<&str>, lowered_query: &str) -> bool {
    value
        .map(|v| v.to_lowercase().contains(lowered_query))
        .unwrap_or(false)
}

/// Check if a candidate matches the query on its title or subtitle field
///
/// `lowered_query` must already be lower-cased. Missing fields never match.
#[inline]
pub fn matches_query(candidate: &SearchResult, lowered_query: &str) -> bool {
    field_contains(candidate.title(), lowered_query)
        || field_contains(candidate.subtitle(), lowered_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, ResourceKind};
    use serde_json::json;

    fn hotel(name: &str, location: &str) -> SearchResult {
        SearchResult::new(
            ResourceKind::Hotel,
            Record::try_from(json!({
                "_id": "h1",
                "hotelName": name,
                "hotelLocation": location,
            }))
            .unwrap(),
        )
    }

    #[test]
    fn test_matches_title() {
        assert!(matches_query(&hotel("Seaside Inn", "Dhaka"), "seaside"));
    }

    #[test]
    fn test_matches_subtitle_only() {
        assert!(matches_query(&hotel("Seaside Inn", "Cox's Bazar"), "bazar"));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_query(&hotel("Seaside Inn", "Dhaka"), "sylhet"));
    }

    #[test]
    fn test_field_value_is_lowercased() {
        assert!(matches_query(&hotel("SEASIDE INN", "DHAKA"), "inn"));
    }

    #[test]
    fn test_missing_fields_do_not_match() {
        let tour = SearchResult::new(
            ResourceKind::Tour,
            Record::try_from(json!({ "_id": "t1", "selectedPackage": null })).unwrap(),
        );
        assert!(!matches_query(&tour, "a"));
    }
}
