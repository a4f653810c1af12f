//! Travel Search - search and navigation service for the travel agency site
//!
//! This library fetches the customer, hotel, tour and flight lists from the
//! travel API, merges them into one tagged candidate list, filters it against
//! free-text queries and resolves selected results into client-side routes.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{merge_candidates, route_for, Navigator, SearchBox, SearchOutcome, Searcher};
pub use models::{Record, ResourceKind, SearchMode, SearchResult, SourceStatus};
pub use services::{ResourceStore, TravelApiClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(route_for(ResourceKind::Hotel, "h1"), "/hotels/h1");
        assert_eq!(Searcher::default().max_results(), 8);
    }
}
