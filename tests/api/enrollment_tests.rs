//! Enrollment API Tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{enrollment, FakeTransport, TestApp};

#[tokio::test]
async fn test_list_enrollments() {
    let app = TestApp::new(FakeTransport::new().reply(
        "get_enrollments",
        json!([enrollment(1, 10, 1, true), enrollment(2, 11, 1, false)]),
    ));

    let (status, body) = app.get("/enrollments").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[1]["isAssigned"], false);
}

#[tokio::test]
async fn test_get_missing_enrollment_is_404() {
    let app = TestApp::new(FakeTransport::new().reply("get_enrollment", Value::Null));

    let (status, _) = app.get("/enrollments/5").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_enrollment_returns_201() {
    let app = TestApp::new(
        FakeTransport::new().reply("create_enrollment", enrollment(9, 10, 2, false)),
    );

    let (status, body) = app
        .post_json(
            "/enrollments",
            json!({"studentId": 10, "courseId": 2, "semester": "2024-1"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 9);
    let sent = app.payload_of("create_enrollment").unwrap();
    assert_eq!(sent["courseId"], 2);
}

#[tokio::test]
async fn test_create_enrollment_rejects_out_of_range_grade() {
    let app = TestApp::new(FakeTransport::new());

    let (status, _) = app
        .post_json(
            "/enrollments",
            json!({"studentId": 10, "courseId": 2, "semester": "2024-1", "finalGrade": 9}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.sent_patterns().is_empty());
}

#[tokio::test]
async fn test_update_enrollment_sends_id_and_data() {
    let app = TestApp::new(
        FakeTransport::new().reply("update_enrollment", enrollment(4, 10, 2, true)),
    );

    let (status, _) = app.put_json("/enrollments/4", json!({"isAssigned": true})).await;

    assert_eq!(status, StatusCode::OK);
    let sent = app.payload_of("update_enrollment").unwrap();
    assert_eq!(sent["id"], 4);
    assert_eq!(sent["data"]["isAssigned"], true);
}

#[tokio::test]
async fn test_delete_enrollment() {
    let app = TestApp::new(
        FakeTransport::new().reply("delete_enrollment", enrollment(4, 10, 2, true)),
    );

    let (status, _) = app.delete("/enrollments/4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.payload_of("delete_enrollment"), Some(json!(4)));
}
