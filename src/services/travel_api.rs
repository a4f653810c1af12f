use crate::models::{Booking, Record, ResourceKind};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the travel API
#[derive(Debug, Error)]
pub enum TravelApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the remote travel REST API
///
/// Only reads are issued; no auth header is required for these endpoints.
pub struct TravelApiClient {
    base_url: String,
    client: Client,
}

impl TravelApiClient {
    /// Create a new client
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Fetch the full current list of one resource kind
    pub async fn fetch_records(&self, kind: ResourceKind) -> Result<Vec<Record>, TravelApiError> {
        self.fetch_list(kind.endpoint()).await
    }

    /// Fetch every booking
    pub async fn fetch_bookings(&self) -> Result<Vec<Booking>, TravelApiError> {
        self.fetch_list("/bookings").await
    }

    async fn fetch_list(&self, path: &str) -> Result<Vec<Record>, TravelApiError> {
        let url = self.url(path);

        tracing::debug!("Fetching list from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(TravelApiError::ApiError(format!(
                "GET {} returned {}",
                path,
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        let records = parse_records(json)?;

        tracing::debug!("Fetched {} records from {}", records.len(), path);

        Ok(records)
    }
}

/// Extract records from a list response
///
/// Accepts a bare array or an object wrapping it under `data`. Elements that
/// are not objects are skipped.
fn parse_records(json: Value) -> Result<Vec<Record>, TravelApiError> {
    let items = match json {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(TravelApiError::InvalidResponse(
                    "Expected an array or an object with a data array".into(),
                ))
            }
        },
        other => {
            return Err(TravelApiError::InvalidResponse(format!(
                "Expected an array, got {}",
                other
            )))
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match Record::try_from(item) {
            Ok(record) => Some(record),
            Err(value) => {
                tracing::debug!("Skipping non-object list element: {}", value);
                None
            }
        })
        .collect())
}
