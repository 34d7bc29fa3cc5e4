//! HTTP route handlers.
//!
//! Routes carry per-route Cache-Control headers: the service banner may be
//! cached briefly, the status probe never. Unmatched paths and methods fall
//! through to axum's default 404/405 responses.
//!
//! Request tracing is enabled via middleware that assigns a unique request ID
//! to each incoming request, allowing correlation of all logs within a request.

pub mod status;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, CorsConfig, CACHE_CONTROL_ROOT, CACHE_CONTROL_STATUS};
use crate::middleware::request_id_layer;

/// Build the CORS layer for browser clients of the API.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origin = if cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(cors.origin_values())
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
}

/// Creates the Axum router with all routes, cache headers and middleware.
pub fn create_router(config: &AppConfig) -> Router {
    let root_routes = Router::new().route("/", get(status::root)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_ROOT),
        ),
    );

    let status_routes = Router::new()
        .route("/api/status", get(status::status))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATUS),
        ));

    Router::new()
        .merge(root_routes)
        .merge(status_routes)
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
