// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Booking, KindDescriptor, Record, ResourceKind, SearchMode, SearchResult, SourceStatus, UnknownKind};
pub use requests::{BookingExistsRequest, SearchRequest, SelectRequest};
pub use responses::{BookingExistsResponse, ErrorResponse, HealthResponse, ResultRow, SearchResponse, SelectResponse, SourceReport};
