//! Student API Tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{student, FakeTransport, TestApp};

#[tokio::test]
async fn test_list_students() {
    let app = TestApp::new(
        FakeTransport::new().reply("get_students", json!([student(1, "Ana"), student(2, "Luis")])),
    );

    let (status, body) = app.get("/students").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_search_students_route_wins_over_id() {
    let app = TestApp::new(
        FakeTransport::new().reply("find_students_by_name", json!([student(1, "Ana")])),
    );

    let (status, body) = app.get("/students/search?name=Ana").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Ana");
    assert_eq!(app.payload_of("find_students_by_name"), Some(json!("Ana")));
}

#[tokio::test]
async fn test_get_missing_student_is_404() {
    let app = TestApp::new(FakeTransport::new().reply("get_student", Value::Null));

    let (status, _) = app.get("/students/3").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_student_rejects_bad_email() {
    let app = TestApp::new(FakeTransport::new());

    let (status, _) = app
        .post_json(
            "/students",
            json!({"name": "Ana", "lastName": "Diaz", "email": "not-an-email", "career": "Math"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.sent_patterns().is_empty());
}

#[tokio::test]
async fn test_create_student_returns_201() {
    let app = TestApp::new(FakeTransport::new().reply("create_student", student(5, "Ana")));

    let (status, body) = app
        .post_json(
            "/students",
            json!({"name": "Ana", "lastName": "Diaz", "email": "ana@example.com", "career": "Math"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 5);
}

#[tokio::test]
async fn test_update_and_delete_student() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply("update_student", student(5, "Ana"))
            .reply("delete_student", student(5, "Ana")),
    );

    let (status, _) = app.put_json("/students/5", json!({"career": "Physics"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        app.payload_of("update_student"),
        Some(json!({"id": 5, "data": {"career": "Physics"}}))
    );

    let (status, _) = app.delete("/students/5").await;
    assert_eq!(status, StatusCode::OK);
}
