use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::SearchMode;

/// Query string of the search endpoint
///
/// The query is not length-limited; any string is searched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, alias = "query")]
    pub q: String,
    #[serde(default)]
    pub mode: Option<SearchMode>,
}

/// Request to resolve a selected result into a route
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SelectRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "kind", rename = "type")]
    pub kind: String,
    #[validate(length(min = 1))]
    #[serde(alias = "_id", rename = "id")]
    pub id: String,
}

/// Query string of the booking existence check
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingExistsRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(alias = "item_id", rename = "itemId")]
    pub item_id: String,
}
