use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{has_existing_booking, resolve_route, NavigationError, Navigator, Searcher};
use crate::models::{
    BookingExistsRequest, BookingExistsResponse, ErrorResponse, HealthResponse, SearchMode,
    SearchRequest, SearchResponse, SelectRequest, SelectResponse,
};
use crate::services::ResourceStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ResourceStore>,
    pub searcher: Searcher,
    pub navigator: Navigator,
    pub default_mode: SearchMode,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/search", web::get().to(search))
        .route("/search/select", web::post().to(select))
        .route("/sources", web::get().to(sources))
        .route("/sources/refresh", web::post().to(refresh_sources))
        .route("/bookings/exists", web::get().to(booking_exists));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
///
/// Reports `degraded` when a resource list failed its last fetch, `loading`
/// while lists are still pending, and `healthy` once all have loaded.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.store.snapshot().await;

    let status = if snapshot.degraded() {
        "degraded"
    } else if snapshot.complete() {
        "healthy"
    } else {
        "loading"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search endpoint
///
/// GET /api/v1/search?q=cox&mode=dropdown
///
/// Searches whatever has been loaded so far; `degraded` is set when a
/// resource list failed to load.
async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchRequest>,
) -> impl Responder {
    let mode = query.mode.unwrap_or(state.default_mode);
    let snapshot = state.store.snapshot().await;

    let outcome = state
        .searcher
        .search(&query.q, snapshot.candidates(), mode);

    tracing::debug!(
        "Search {:?} ({:?}) matched {} candidates, returning {}",
        query.q,
        mode,
        outcome.total_matches,
        outcome.results.len()
    );

    HttpResponse::Ok().json(SearchResponse {
        query: query.q.clone(),
        results: state.navigator.render_all(&outcome.results),
        total_matches: outcome.total_matches,
        degraded: snapshot.degraded(),
        sources: snapshot.reports().to_vec(),
    })
}

/// Resolve a selected result into its client-side route
///
/// POST /api/v1/search/select
///
/// Request body:
/// ```json
/// { "type": "Hotel", "id": "abc123" }
/// ```
async fn select(req: web::Json<SelectRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match resolve_route(&req.kind, &req.id) {
        Ok(route) => HttpResponse::Ok().json(SelectResponse { route }),
        Err(e @ NavigationError::UnknownKind(_)) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Unknown result type".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid selection".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
    }
}

/// Per-resource load status
async fn sources(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.store.snapshot().await;
    HttpResponse::Ok().json(snapshot.reports())
}

/// Re-fetch all resource lists in the background
async fn refresh_sources(state: web::Data<AppState>) -> impl Responder {
    tracing::info!("Refreshing resource lists on request");
    state.store.refresh().await;
    HttpResponse::Accepted().finish()
}

/// Check whether a customer already booked an item
///
/// GET /api/v1/bookings/exists?email={email}&itemId={itemId}
///
/// Bookings are fetched fresh on every call. A failed fetch is reported as
/// 502 instead of "no booking".
async fn booking_exists(
    state: web::Data<AppState>,
    query: web::Query<BookingExistsRequest>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    match state.store.client().fetch_bookings().await {
        Ok(bookings) => HttpResponse::Ok().json(BookingExistsResponse {
            exists: has_existing_booking(&bookings, &query.email, &query.item_id),
        }),
        Err(e) => {
            tracing::error!("Failed to fetch bookings: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to fetch bookings".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}
