use crate::models::{ResourceKind, ResultRow, SearchResult, UnknownKind};
use thiserror::Error;

/// Thumbnail used when a record carries no photo
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.png";

/// Errors that can occur when resolving a selection into a route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("{0} record has no _id")]
    MissingId(ResourceKind),

    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),

    #[error("no result at position {0}")]
    OutOfRange(usize),
}

/// Destination of a client-side navigation
pub trait Router {
    fn navigate(&mut self, path: &str);
}

/// Build the route path for a record of the given kind
pub fn route_for(kind: ResourceKind, id: &str) -> String {
    format!("{}{}", kind.descriptor().route_prefix, urlencoding::encode(id))
}

/// Build a route from an untyped kind tag, as received from a client
pub fn resolve_route(kind_tag: &str, id: &str) -> Result<String, NavigationError> {
    let kind: ResourceKind = kind_tag.parse().map_err(|e: UnknownKind| {
        tracing::warn!("Ignoring navigation to unknown kind {:?}", e.0);
        e
    })?;
    Ok(route_for(kind, id))
}

/// Renders results as rows and resolves selections into routes
#[derive(Debug, Clone)]
pub struct Navigator {
    placeholder: String,
}

impl Navigator {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    /// Build the display row for a result
    ///
    /// An empty photo field counts as missing and falls through to the next.
    pub fn render(&self, result: &SearchResult) -> ResultRow {
        let data = &result.data;
        let photo = |name| data.field(name).filter(|url| !url.is_empty());
        let thumbnail = photo("photoUrl")
            .or_else(|| photo("customerPhoto"))
            .unwrap_or(self.placeholder.as_str())
            .to_string();

        ResultRow {
            kind: result.kind,
            id: data.id().map(str::to_string),
            title: result.title().unwrap_or_default().to_string(),
            subtitle: result.subtitle().unwrap_or_default().to_string(),
            thumbnail,
            label: result.kind.label().to_string(),
            route: data.id().map(|id| route_for(result.kind, id)),
        }
    }

    pub fn render_all(&self, results: &[SearchResult]) -> Vec<ResultRow> {
        results.iter().map(|r| self.render(r)).collect()
    }

    /// Resolve the route a selected result navigates to
    pub fn select(&self, result: &SearchResult) -> Result<String, NavigationError> {
        match result.data.id() {
            Some(id) => Ok(route_for(result.kind, id)),
            None => {
                tracing::warn!("Selected {} result has no _id, not navigating", result.kind);
                Err(NavigationError::MissingId(result.kind))
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}
