//! Route Configuration
//!
//! Configures all HTTP routes for the gateway.

use axum::{
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main gateway router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/hello", get(hello))
        .nest("/courses", course_routes())
        .nest("/enrollments", enrollment_routes())
        .nest("/students", student_routes())
        // Dashboard counters
        .route("/count/courses", get(handlers::stats::count_courses))
        .route("/count/students", get(handlers::stats::count_students))
        .route("/unassigned/students", get(handlers::stats::get_unassigned_counts))
        .route("/dashboard/stats", get(handlers::stats::get_dashboard_stats))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Only matched routes are measured
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

async fn root() -> &'static str {
    "API Gateway is working!"
}

async fn hello() -> &'static str {
    "API Gateway says hello!"
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Course routes, including the aggregated course views
fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::course::get_courses).post(handlers::course::create_course),
        )
        .route("/search", get(handlers::course::search_courses))
        .route("/available", get(handlers::stats::get_available_courses))
        .route(
            "/enrollment-summary",
            get(handlers::stats::get_course_enrollment_summary),
        )
        .route("/assigned/count", get(handlers::stats::get_assigned_counts))
        .route(
            "/{id}",
            get(handlers::course::get_course)
                .put(handlers::course::update_course)
                .delete(handlers::course::delete_course),
        )
        .route(
            "/{id}/available-seats",
            get(handlers::course::get_available_seats),
        )
        .route(
            "/{id}/average-grade",
            get(handlers::grade::get_course_average_grade),
        )
}

/// Enrollment routes
fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::enrollment::get_enrollments).post(handlers::enrollment::create_enrollment),
        )
        .route(
            "/{id}",
            get(handlers::enrollment::get_enrollment)
                .put(handlers::enrollment::update_enrollment)
                .delete(handlers::enrollment::delete_enrollment),
        )
}

/// Student routes
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::student::get_students).post(handlers::student::create_student),
        )
        .route("/search", get(handlers::student::search_students))
        .route(
            "/{id}",
            get(handlers::student::get_student)
                .put(handlers::student::update_student)
                .delete(handlers::student::delete_student),
        )
        // Per-student enrollment views
        .route("/{id}/grades", get(handlers::grade::get_student_grades))
        .route(
            "/{id}/grades/{course_id}",
            get(handlers::grade::get_student_course_grade),
        )
        .route(
            "/{id}/courses/assigned",
            get(handlers::grade::get_assigned_courses),
        )
        .route(
            "/{id}/courses/unassigned",
            get(handlers::grade::get_unassigned_courses),
        )
        .route(
            "/{id}/average-grade",
            get(handlers::grade::get_student_average_grade),
        )
}
