#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, json_request, make_test_app, with_connect_info};
    use axum::http::{Method, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_reports_store_and_version_to_any_peer() {
        let (app, _db) = make_test_app().await;

        let req = with_connect_info(
            json_request(Method::GET, "/api/health", None),
            [10, 1, 2, 3],
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Attendance server is up");
        assert_eq!(json["data"]["database"], true);
        assert_eq!(json["data"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["data"]["port"].is_u64());
        assert!(json.get("kind").is_none());
    }
}
