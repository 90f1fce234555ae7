#[cfg(test)]
mod tests {
    use crate::helpers::app::{LAN_DEVICE, LOOPBACK};
    use crate::helpers::{body_json, json_request, make_test_app, with_connect_info};
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::{attendance, class, ip_registration, student};
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use services::{lesson_service::LessonService, token_service::TokenService};
    use std::net::{IpAddr, Ipv6Addr};
    use tower::ServiceExt;

    struct Ctx {
        class_id: i64,
        lesson_id: i64,
        token: String,
    }

    async fn setup(db: &DatabaseConnection) -> Ctx {
        let c = class::Model::create(db, "C1").await.unwrap();
        student::Model::create(db, c.id, "S1", "Anna", "Verdi").await.unwrap();
        student::Model::create(db, c.id, "S2", "Luca", "Neri").await.unwrap();
        let (l, _) = LessonService::create_lesson(db, c.id, "2025-10-01T09:00")
            .await
            .unwrap();
        let token = TokenService::issue_token(db, l.id).await.unwrap().token;
        Ctx {
            class_id: c.id,
            lesson_id: l.id,
            token,
        }
    }

    async fn post_checkin(app: &Router, body: Value, peer: impl Into<IpAddr>) -> (StatusCode, Value) {
        let req = with_connect_info(json_request(Method::POST, "/api/checkin", Some(body)), peer);
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    async fn is_present(db: &DatabaseConnection, ctx: &Ctx, student_id: &str) -> bool {
        attendance::Model::find_one(db, ctx.lesson_id, ctx.class_id, student_id)
            .await
            .unwrap()
            .unwrap()
            .is_present
    }

    #[tokio::test]
    async fn checkin_marks_present_and_blocks_second_student_on_same_device() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let (status, json) = post_checkin(
            &app,
            json!({ "token": ctx.token, "lessonId": ctx.lesson_id, "studentId": "S1" }),
            LAN_DEVICE,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert!(is_present(&db, &ctx, "S1").await);

        let (status, json) = post_checkin(
            &app,
            json!({ "token": ctx.token, "lessonId": ctx.lesson_id, "studentId": "S2" }),
            LAN_DEVICE,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["success"], false);
        assert_eq!(json["kind"], "DuplicateOrigin");
        assert!(!is_present(&db, &ctx, "S2").await);
    }

    #[tokio::test]
    async fn checkin_accepts_snake_case_and_string_lesson_id() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let (status, _) = post_checkin(
            &app,
            json!({
                "token": ctx.token,
                "lesson_id": ctx.lesson_id.to_string(),
                "student_id": "S2"
            }),
            [192, 168, 1, 51],
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(is_present(&db, &ctx, "S2").await);
    }

    #[tokio::test]
    async fn checkin_with_wrong_token_is_not_found() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let (status, json) = post_checkin(
            &app,
            json!({ "token": "WRONG00000", "lessonId": ctx.lesson_id, "studentId": "S1" }),
            LAN_DEVICE,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["kind"], "InvalidToken");
        assert!(!is_present(&db, &ctx, "S1").await);
    }

    #[tokio::test]
    async fn checkin_after_rotation_rejects_old_token() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let mut rotated = TokenService::issue_token(&db, ctx.lesson_id).await.unwrap().token;
        while rotated == ctx.token {
            rotated = TokenService::issue_token(&db, ctx.lesson_id).await.unwrap().token;
        }

        let (status, json) = post_checkin(
            &app,
            json!({ "token": ctx.token, "lessonId": ctx.lesson_id, "studentId": "S1" }),
            LAN_DEVICE,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["kind"], "InvalidToken");
    }

    #[tokio::test]
    async fn checkin_for_unknown_student_does_not_burn_the_device() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let (status, json) = post_checkin(
            &app,
            json!({ "token": ctx.token, "lessonId": ctx.lesson_id, "studentId": "S9" }),
            LAN_DEVICE,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["kind"], "StudentNotEnrolled");
        assert_eq!(
            ip_registration::Model::count_for_lesson(&db, ctx.lesson_id)
                .await
                .unwrap(),
            0
        );

        let (status, _) = post_checkin(
            &app,
            json!({ "token": ctx.token, "lessonId": ctx.lesson_id, "studentId": "S1" }),
            LAN_DEVICE,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn checkin_missing_fields_is_validation_error() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        for body in [
            json!({ "lessonId": ctx.lesson_id, "studentId": "S1" }),
            json!({ "token": ctx.token, "studentId": "S1" }),
            json!({ "token": ctx.token, "lessonId": ctx.lesson_id, "studentId": "  " }),
        ] {
            let (status, json) = post_checkin(&app, body, LAN_DEVICE).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["kind"], "ValidationError");
        }
    }

    #[tokio::test]
    async fn checkin_with_malformed_body_is_validation_error() {
        let (app, _db) = make_test_app().await;

        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/checkin")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app
            .oneshot(with_connect_info(req, LAN_DEVICE))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["kind"], "ValidationError");
    }

    #[tokio::test]
    async fn checkin_treats_mapped_ipv6_as_the_same_device() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let mapped = IpAddr::V6(Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0xc0a8, 0x0132));
        let (status, _) = post_checkin(
            &app,
            json!({ "token": ctx.token, "lessonId": ctx.lesson_id, "studentId": "S1" }),
            mapped,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = post_checkin(
            &app,
            json!({ "token": ctx.token, "lessonId": ctx.lesson_id, "studentId": "S2" }),
            LAN_DEVICE,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["kind"], "DuplicateOrigin");
    }

    #[tokio::test]
    async fn checkin_from_loopback_is_allowed() {
        let (app, db) = make_test_app().await;
        let ctx = setup(&db).await;

        let (status, _) = post_checkin(
            &app,
            json!({ "token": ctx.token, "lessonId": ctx.lesson_id, "studentId": "S1" }),
            LOOPBACK,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}
