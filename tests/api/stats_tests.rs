//! Aggregated Statistics API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use enrollment_gateway::domain::ServiceError;

use crate::common::{course, student, FakeTransport, TestApp};

/// Assigned counts keyed by course id, answering per-course lookups
fn assigned_by_course(counts: &'static [(i64, i64)]) -> impl Fn(&Value) -> Result<Value, ServiceError> {
    move |payload| {
        let id = payload.as_i64().expect("bare course id");
        let count = counts
            .iter()
            .find(|(course_id, _)| *course_id == id)
            .map(|(_, count)| *count)
            .unwrap_or(0);
        Ok(json!(count))
    }
}

#[tokio::test]
async fn test_available_seats() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply("get_max_students", json!(30))
            .reply("get_assigned_count_by_course", json!(12)),
    );

    let (status, body) = app.get("/courses/4/available-seats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"courseId": 4, "available": 18}));
    assert_eq!(app.payload_of("get_max_students"), Some(json!(4)));
    assert_eq!(app.payload_of("get_assigned_count_by_course"), Some(json!(4)));
}

#[tokio::test]
async fn test_available_seats_negative_when_over_enrolled() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply("get_max_students", json!(10))
            .reply("get_assigned_count_by_course", json!(15)),
    );

    let (status, body) = app.get("/courses/1/available-seats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], -5);
}

#[tokio::test]
async fn test_available_seats_unknown_course_is_404() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply("get_max_students", Value::Null)
            .reply("get_assigned_count_by_course", json!(0)),
    );

    let (status, _) = app.get("/courses/42/available-seats").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_available_seats_fails_if_enrollment_service_fails() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply("get_max_students", json!(10))
            .fail(
                "get_assigned_count_by_course",
                ServiceError::RemoteFailure {
                    message: "boom".into(),
                },
            ),
    );

    let (status, _) = app.get("/courses/1/available-seats").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_available_courses_filters_full_courses() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply(
                "get_courses",
                json!([course(1, "Algebra", 10), course(2, "Physics", 5)]),
            )
            .reply_with(
                "get_assigned_count_by_course",
                assigned_by_course(&[(1, 3), (2, 5)]),
            ),
    );

    let (status, body) = app.get("/courses/available").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([course(1, "Algebra", 10)]));
}

#[tokio::test]
async fn test_available_courses_empty_catalog_makes_no_count_calls() {
    let app = TestApp::new(FakeTransport::new().reply("get_courses", json!([])));

    let (status, body) = app.get("/courses/available").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert_eq!(app.sent_patterns(), vec!["get_courses".to_string()]);
}

#[tokio::test]
async fn test_available_courses_fails_when_one_count_fails() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply(
                "get_courses",
                json!([course(1, "Algebra", 10), course(2, "Physics", 5)]),
            )
            .reply_with("get_assigned_count_by_course", |payload| {
                if payload == &json!(2) {
                    Err(ServiceError::Timeout {
                        pattern: "get_assigned_count_by_course".into(),
                    })
                } else {
                    Ok(json!(0))
                }
            }),
    );

    let (status, _) = app.get("/courses/available").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_course_enrollment_summary_in_course_order() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply(
                "get_courses",
                json!([course(3, "Chemistry", 20), course(1, "Algebra", 10)]),
            )
            .reply_with("get_unique_student_count_by_course", |payload| {
                Ok(json!(payload.as_i64().unwrap_or(0) * 2))
            }),
    );

    let (status, body) = app.get("/courses/enrollment-summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"name": "Chemistry", "studentCount": 6},
            {"name": "Algebra", "studentCount": 2}
        ])
    );
}

#[tokio::test]
async fn test_assigned_counts_with_names_labels_unknown() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply(
                "get_assigned_count_by_courses",
                json!([
                    {"courseId": 1, "assignedCount": 4},
                    {"courseId": 9, "assignedCount": 2}
                ]),
            )
            .reply("get_courses_by_ids", json!([{"id": 1, "name": "Algebra"}])),
    );

    let (status, body) = app.get("/courses/assigned/count").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"courseId": 1, "courseName": "Algebra", "count": 4},
            {"courseId": 9, "courseName": "Unknown", "count": 2}
        ])
    );
    assert_eq!(app.payload_of("get_courses_by_ids"), Some(json!([1, 9])));
}

#[tokio::test]
async fn test_assigned_counts_without_rows_skips_name_lookup() {
    let app = TestApp::new(FakeTransport::new().reply("get_assigned_count_by_courses", json!([])));

    let (status, body) = app.get("/courses/assigned/count").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert!(!app.sent_patterns().contains(&"get_courses_by_ids".to_string()));
}

#[tokio::test]
async fn test_unassigned_students_passes_rows_through() {
    let app = TestApp::new(FakeTransport::new().reply(
        "get_unassigned_count_by_course",
        json!([{"courseId": 2, "count": 7}]),
    ));

    let (status, body) = app.get("/unassigned/students").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"courseId": 2, "count": 7}]));
}

#[tokio::test]
async fn test_counts() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply("get_courses", json!([course(1, "Algebra", 10), course(2, "Physics", 5)]))
            .reply("get_students", json!([student(1, "Ana")])),
    );

    let (status, body) = app.get("/count/courses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(2));

    let (status, body) = app.get("/count/students").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(1));
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply("get_students", json!([student(1, "Ana"), student(2, "Luis")]))
            .reply(
                "get_courses",
                json!([course(1, "Algebra", 10), course(2, "Physics", 5), course(3, "Art", 8)]),
            )
            .reply(
                "get_assigned_count_by_courses",
                json!([
                    {"courseId": 1, "assignedCount": 3},
                    {"courseId": 2, "assignedCount": 5},
                    {"courseId": 7, "assignedCount": 1}
                ]),
            )
            .reply(
                "get_unassigned_count_by_course",
                json!([{"courseId": 1, "count": 2}, {"courseId": 3, "count": 4}]),
            ),
    );

    let (status, body) = app.get("/dashboard/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "totalStudents": 2,
            "totalCourses": 3,
            "activeEnrollments": 9,
            "unassignedRequests": 6,
            "topCourses": [
                {"courseId": 2, "courseName": "Physics", "count": 5},
                {"courseId": 1, "courseName": "Algebra", "count": 3},
                {"courseId": 7, "courseName": "Unknown", "count": 1}
            ]
        })
    );
}

#[tokio::test]
async fn test_dashboard_stats_fails_whole_when_one_source_fails() {
    let app = TestApp::new(
        FakeTransport::new()
            .reply("get_students", json!([]))
            .reply("get_courses", json!([]))
            .reply("get_assigned_count_by_courses", json!([])),
        // get_unassigned_count_by_course has no subscriber
    );

    let (status, _) = app.get("/dashboard/stats").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
