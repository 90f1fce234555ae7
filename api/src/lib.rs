use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;
use util::state::AppState;

use crate::auth::middleware::log_request;
use crate::routes::routes;

pub mod auth;
pub mod response;
pub mod routes;

/// The complete application: `/api` routes, request logging and CORS.
///
/// Must be served with `into_make_service_with_connect_info::<SocketAddr>()` so the
/// access guard and the check-in route can see the peer address.
pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(CorsLayer::permissive())
}
