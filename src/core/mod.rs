// Core search exports
pub mod bookings;
pub mod dropdown;
pub mod filters;
pub mod index;
pub mod navigator;
pub mod searcher;

pub use bookings::has_existing_booking;
pub use dropdown::{DropdownState, SearchBox};
pub use filters::matches_query;
pub use index::merge_candidates;
pub use navigator::{resolve_route, route_for, NavigationError, Navigator, Router};
pub use searcher::{SearchOutcome, Searcher, DEFAULT_MAX_RESULTS};
