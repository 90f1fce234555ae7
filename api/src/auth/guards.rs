//! Access guards for administrative routes.
//!
//! The dashboard runs on the same machine as the server, so administrative endpoints
//! only answer to loopback peers. Student devices on the LAN can reach the check-in
//! route and nothing else.

use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::net::{IpAddr, SocketAddr};
use tracing::warn;

/// Transport peer of the request, if the server was started with connect info.
pub fn peer_ip(req: &Request<Body>) -> Option<IpAddr> {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_canonical())
}

/// `127.0.0.0/8`, `::1`, or an IPv4-mapped loopback address.
pub fn is_loopback(ip: IpAddr) -> bool {
    ip.to_canonical().is_loopback()
}

/// Rejects any request whose peer is not a loopback address with `403 Forbidden`.
///
/// A request without a known peer is rejected as well.
pub async fn require_local_origin(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    match peer_ip(&req) {
        Some(ip) if is_loopback(ip) => Ok(next.run(req).await),
        peer => {
            warn!(
                ip = %peer.map(|ip| ip.to_string()).unwrap_or_else(|| "unknown".into()),
                path = %req.uri().path(),
                "Rejected administrative request from non-local origin"
            );
            Err((
                StatusCode::FORBIDDEN,
                Json(ApiResponse::error(
                    "Forbidden",
                    "Administrative endpoints are only available from this machine",
                )),
            ))
        }
    }
}
