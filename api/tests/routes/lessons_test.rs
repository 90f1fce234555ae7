#[cfg(test)]
mod tests {
    use crate::helpers::app::{LAN_DEVICE, LOOPBACK};
    use crate::helpers::{body_json, json_request, make_test_app, with_connect_info};
    use axum::{
        Router,
        http::{Method, StatusCode},
    };
    use db::models::{class, student};
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use services::lesson_service::LessonService;
    use tower::ServiceExt;

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let req = with_connect_info(json_request(method, uri, body), LOOPBACK);
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    /// Class with S1 and S2 and one lesson. Returns `(class_id, lesson_id)`.
    async fn setup(db: &DatabaseConnection) -> (i64, i64) {
        let c = class::Model::create(db, "C1").await.unwrap();
        student::Model::create(db, c.id, "S1", "Anna", "Verdi").await.unwrap();
        student::Model::create(db, c.id, "S2", "Luca", "Neri").await.unwrap();
        let (l, _) = LessonService::create_lesson(db, c.id, "2025-10-01T09:00")
            .await
            .unwrap();
        (c.id, l.id)
    }

    fn presence_of(json: &Value, student_id: &str) -> bool {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["student_id"] == student_id)
            .map(|e| e["is_present"].as_bool().unwrap())
            .unwrap()
    }

    #[tokio::test]
    async fn issue_token_returns_render_payload() {
        let (app, db) = make_test_app().await;
        let (class_id, lesson_id) = setup(&db).await;

        let (status, json) = call(&app, Method::POST, &format!("/api/lessons/{lesson_id}/token"), None).await;
        assert_eq!(status, StatusCode::OK);

        let data = &json["data"];
        let token = data["token"].as_str().unwrap();
        assert_eq!(token.len(), 10);
        assert!(token.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_eq!(data["lesson_id"], lesson_id);
        assert_eq!(data["class_id"], class_id);
        assert!(data["address"].is_string());
        assert!(data["port"].is_number());
        assert!(data["checkin_url"].as_str().unwrap().ends_with("/api/checkin"));

        let (status, json) = call(&app, Method::GET, &format!("/api/lessons/{lesson_id}/token"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["token"], token);
    }

    #[tokio::test]
    async fn token_routes_for_missing_lesson_are_not_found() {
        let (app, _db) = make_test_app().await;

        for method in [Method::POST, Method::GET, Method::DELETE] {
            let (status, json) = call(&app, method, "/api/lessons/77/token", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(json["kind"], "NotFound");
        }
    }

    #[tokio::test]
    async fn revoked_token_stops_check_ins() {
        let (app, db) = make_test_app().await;
        let (_, lesson_id) = setup(&db).await;
        let uri = format!("/api/lessons/{lesson_id}/token");

        let (_, json) = call(&app, Method::POST, &uri, None).await;
        let token = json["data"]["token"].as_str().unwrap().to_owned();

        let (status, _) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = call(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let req = with_connect_info(
            json_request(
                Method::POST,
                "/api/checkin",
                Some(json!({ "token": token, "lessonId": lesson_id, "studentId": "S1" })),
            ),
            LAN_DEVICE,
        );
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["kind"], "InvalidToken");
    }

    #[tokio::test]
    async fn attendance_toggle_and_sync() {
        let (app, db) = make_test_app().await;
        let (class_id, lesson_id) = setup(&db).await;
        let base = format!("/api/lessons/{lesson_id}/attendance");

        let (status, json) = call(&app, Method::GET, &base, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert!(!presence_of(&json, "S1"));

        let (status, _) = call(
            &app,
            Method::PUT,
            &format!("{base}/S1"),
            Some(json!({ "is_present": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (_, json) = call(&app, Method::GET, &base, None).await;
        assert!(presence_of(&json, "S1"));

        // Joined after the lesson: listed as absent, but has no row to toggle yet.
        student::Model::create(&db, class_id, "S3", "Sara", "Gialli").await.unwrap();
        let (_, json) = call(&app, Method::GET, &base, None).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
        assert!(!presence_of(&json, "S3"));

        let (status, json) = call(
            &app,
            Method::PUT,
            &format!("{base}/S3"),
            Some(json!({ "is_present": true })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["kind"], "NotFound");

        let (status, json) = call(&app, Method::POST, &format!("{base}/sync"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["added"], 1);

        let (_, json) = call(&app, Method::POST, &format!("{base}/sync"), None).await;
        assert_eq!(json["data"]["added"], 0);

        let (status, _) = call(
            &app,
            Method::PUT,
            &format!("{base}/S3"),
            Some(json!({ "is_present": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn attendance_toggle_requires_flag() {
        let (app, db) = make_test_app().await;
        let (_, lesson_id) = setup(&db).await;

        let (status, json) = call(
            &app,
            Method::PUT,
            &format!("/api/lessons/{lesson_id}/attendance/S1"),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["kind"], "ValidationError");
    }

    #[tokio::test]
    async fn attendance_of_missing_lesson_is_not_found() {
        let (app, _db) = make_test_app().await;

        let (status, _) = call(&app, Method::GET, "/api/lessons/5/attendance", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = call(&app, Method::POST, "/api/lessons/5/attendance/sync", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_lesson() {
        let (app, db) = make_test_app().await;
        let (class_id, lesson_id) = setup(&db).await;

        let (status, _) = call(&app, Method::DELETE, &format!("/api/lessons/{lesson_id}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, json) = call(&app, Method::GET, &format!("/api/classes/{class_id}/lessons"), None).await;
        assert!(json["data"].as_array().unwrap().is_empty());

        let (status, _) = call(&app, Method::DELETE, &format!("/api/lessons/{lesson_id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn bad_input_on_lesson_routes_gets_json_errors() {
        let (app, db) = make_test_app().await;
        let (_, lesson_id) = setup(&db).await;

        let (status, json) = call(
            &app,
            Method::PUT,
            &format!("/api/lessons/{lesson_id}/attendance/S1"),
            Some(json!({ "is_present": "yes" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["kind"], "ValidationError");

        let (status, json) = call(&app, Method::POST, "/api/lessons/abc/token", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["kind"], "ValidationError");
    }
}
