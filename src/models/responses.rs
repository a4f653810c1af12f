use serde::{Deserialize, Serialize};
use crate::models::domain::{ResourceKind, SourceStatus};

/// One rendered search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub thumbnail: String,
    pub label: String,
    pub route: Option<String>,
}

/// Load state of a single resource list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub kind: ResourceKind,
    pub status: SourceStatus,
    pub count: usize,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<ResultRow>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    /// Set when at least one resource list failed to load
    pub degraded: bool,
    pub sources: Vec<SourceReport>,
}

/// Response for the select endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectResponse {
    pub route: String,
}

/// Response for the booking existence check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingExistsResponse {
    pub exists: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
