//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use enrollment_gateway::config::{
    AggregatorSettings, CorsSettings, RedisSettings, ServerSettings, ServiceSettings, Settings,
};
use enrollment_gateway::domain::ServiceError;
use enrollment_gateway::infrastructure::messaging::ServiceTransport;
use enrollment_gateway::startup::{build_router, AppState};

type Responder = Box<dyn Fn(&Value) -> Result<Value, ServiceError> + Send + Sync>;

/// In-memory stand-in for the data services.
///
/// Each pattern answers through a registered responder; unregistered
/// patterns behave as if no service were subscribed.
#[derive(Default)]
pub struct FakeTransport {
    responders: HashMap<&'static str, Responder>,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    broker_down: bool,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer `pattern` with `response`
    pub fn reply(self, pattern: &'static str, response: Value) -> Self {
        self.reply_with(pattern, move |_| Ok(response.clone()))
    }

    /// Answer `pattern` with a function of the request payload
    pub fn reply_with<F>(mut self, pattern: &'static str, f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ServiceError> + Send + Sync + 'static,
    {
        self.responders.insert(pattern, Box::new(f));
        self
    }

    /// Make `pattern` fail with `err`
    pub fn fail(self, pattern: &'static str, err: ServiceError) -> Self {
        self.reply_with(pattern, move |_| Err(err.clone()))
    }

    /// Make health pings fail
    pub fn broker_down(mut self) -> Self {
        self.broker_down = true;
        self
    }

    /// Handle on the recorded `(pattern, payload)` calls
    pub fn calls(&self) -> Arc<Mutex<Vec<(String, Value)>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl ServiceTransport for FakeTransport {
    async fn send(&self, pattern: &str, payload: Value) -> Result<Value, ServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push((pattern.to_string(), payload.clone()));

        match self.responders.get(pattern) {
            Some(responder) => responder(&payload),
            None => Err(ServiceError::Unreachable(format!(
                "no subscribers for '{}'",
                pattern
            ))),
        }
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        if self.broker_down {
            Err(ServiceError::Unreachable("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

/// Settings suitable for in-process tests
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        redis: RedisSettings {
            url: "redis://127.0.0.1:6379".into(),
        },
        services: ServiceSettings {
            request_timeout_ms: 1000,
        },
        aggregator: AggregatorSettings {
            top_courses_limit: 5,
            max_concurrency: 4,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub calls: Arc<Mutex<Vec<(String, Value)>>>,
}

impl TestApp {
    /// Create a new test application backed by `transport`
    pub fn new(transport: FakeTransport) -> Self {
        Self::with_settings(transport, test_settings())
    }

    /// Create a test application with custom settings
    pub fn with_settings(transport: FakeTransport, settings: Settings) -> Self {
        let calls = transport.calls();
        let state = AppState::new(Arc::new(transport), settings);

        Self {
            router: build_router(state),
            calls,
        }
    }

    /// Patterns sent so far, in call order
    pub fn sent_patterns(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(pattern, _)| pattern.clone())
            .collect()
    }

    /// Payload of the first call to `pattern`
    pub fn payload_of(&self, pattern: &str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|(_, payload)| payload.clone())
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// Make a POST request with a raw JSON body, well-formed or not
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.send(request).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    /// Send a prepared request through the full middleware stack
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Make a GET request and return the raw body text
    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}

/// A course as the course service returns it
pub fn course(id: i32, name: &str, max_students: i32) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": "Engineering",
        "maxStudents": max_students,
        "description": null
    })
}

/// A student as the student service returns it
pub fn student(id: i32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "lastName": "Doe",
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": null,
        "career": "Systems"
    })
}

/// An enrollment as the enrollment service returns it
pub fn enrollment(id: i32, student_id: i32, course_id: i32, is_assigned: bool) -> Value {
    json!({
        "id": id,
        "studentId": student_id,
        "courseId": course_id,
        "semester": "2024-1",
        "finalGrade": null,
        "isAssigned": is_assigned
    })
}
