//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` health probe (public)
//! - `/checkin` student self check-in (public, reachable from the LAN)
//! - `/classes` classes, students and lessons (local only)
//! - `/lessons` lesson removal, attendance register and check-in tokens (local only)

use crate::auth::guards::require_local_origin;
use crate::routes::{
    checkin::checkin, classes::classes_routes, health::health_routes,
    lessons::lessons_routes,
};
use axum::{Router, middleware::from_fn, routing::post};
use util::state::AppState;

pub mod checkin;
pub mod classes;
pub mod common;
pub mod extractors;
pub mod health;
pub mod lessons;

/// Builds the router for every `/api` endpoint.
///
/// Administrative groups sit behind `require_local_origin`; the health probe and the
/// check-in route are open to any peer.
pub fn routes(app_state: AppState) -> Router {
    let admin = Router::new()
        .nest("/classes", classes_routes())
        .nest("/lessons", lessons_routes())
        .route_layer(from_fn(require_local_origin));

    Router::new()
        .nest("/health", health_routes())
        .route("/checkin", post(checkin))
        .merge(admin)
        .with_state(app_state)
}
