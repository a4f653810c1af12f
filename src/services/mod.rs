// Service exports
pub mod store;
pub mod travel_api;

pub use store::{ResourceStore, StoreSnapshot};
pub use travel_api::{TravelApiClient, TravelApiError};
