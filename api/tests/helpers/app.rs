use api::build_app;
use axum::{
    Router,
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request, header::CONTENT_TYPE},
    response::Response,
};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::net::{IpAddr, SocketAddr};
use util::state::AppState;

pub const LOOPBACK: [u8; 4] = [127, 0, 0, 1];
pub const LAN_DEVICE: [u8; 4] = [192, 168, 1, 50];

/// Full application over a fresh in-memory store. The store handle is returned so
/// tests can seed and inspect it directly.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    let db = setup_test_db().await;
    let app = build_app(AppState::new(db.clone()));
    (app, db)
}

/// Attaches the transport peer the server would normally record.
pub fn with_connect_info(mut req: Request<Body>, ip: impl Into<IpAddr>) -> Request<Body> {
    let addr = SocketAddr::new(ip.into(), 40000);
    req.extensions_mut().insert(ConnectInfo(addr));
    req
}

pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(v) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
