//! Axum router construction for the signup API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the signup service.
///
/// The router includes:
/// - `GET /` -- HTML activity listing
/// - `GET /activities` -- all activities keyed by name
/// - `GET /activities/{name}` -- single activity
/// - `POST /activities/{name}/signup` -- sign up (`?email=`)
/// - `DELETE /activities/{name}/participants` -- unregister (`?email=`)
///
/// CORS allows any origin so the browser frontend can be served from a
/// different host during development.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{name}", get(handlers::get_activity))
        .route("/activities/{name}/signup", post(handlers::signup))
        .route(
            "/activities/{name}/participants",
            delete(handlers::unregister),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
