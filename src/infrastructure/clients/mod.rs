//! Data Service Clients
//!
//! Typed implementations of the domain client traits on top of a
//! [`ServiceTransport`]. Every operation is a variant of a per-service request
//! enum that knows its pattern and payload; replies are decoded into the
//! operation's response type and anything else is rejected.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let transport: Arc<dyn ServiceTransport> = Arc::new(RedisTransport::connect(&settings, timeout).await?);
//! let courses = RemoteCourseClient::new(transport.clone());
//! let all = courses.get_courses().await?;
//! ```

mod course_client;
mod enrollment_client;
mod student_client;

pub use course_client::{CourseRequest, RemoteCourseClient};
pub use enrollment_client::{EnrollmentRequest, RemoteEnrollmentClient};
pub use student_client::{RemoteStudentClient, StudentRequest};

use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::ServiceError;
use crate::infrastructure::messaging::ServiceTransport;
use crate::infrastructure::metrics;

/// One named operation on a data service.
pub trait ServiceRequest {
    /// Operation name, also the channel the service listens on.
    fn pattern(&self) -> &'static str;

    /// JSON payload sent with the request.
    fn payload(&self) -> Value;
}

/// Send `request` once and decode the reply as `R`.
pub async fn call<R, Q>(transport: &dyn ServiceTransport, request: Q) -> Result<R, ServiceError>
where
    R: DeserializeOwned,
    Q: ServiceRequest,
{
    let pattern = request.pattern();
    let start = Instant::now();

    let outcome = transport
        .send(pattern, request.payload())
        .await
        .and_then(|reply| decode(pattern, reply));

    let label = match &outcome {
        Ok(_) => "ok",
        Err(ServiceError::Timeout { .. }) => "timeout",
        Err(_) => "error",
    };
    metrics::record_service_call(pattern, label, start.elapsed().as_secs_f64());

    if let Err(e) = &outcome {
        tracing::warn!(pattern, error = %e, "Service call failed");
    }
    outcome
}

fn decode<R: DeserializeOwned>(pattern: &str, reply: Value) -> Result<R, ServiceError> {
    serde_json::from_value(reply).map_err(|e| ServiceError::InvalidResponse {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
