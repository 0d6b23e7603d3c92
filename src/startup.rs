//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::application::services::{AggregatorConfig, AggregatorService, AggregatorServiceImpl};
use crate::config::Settings;
use crate::domain::{CourseClient, EnrollmentClient, StudentClient};
use crate::infrastructure::clients::{RemoteCourseClient, RemoteEnrollmentClient, RemoteStudentClient};
use crate::infrastructure::messaging::{RedisTransport, ServiceTransport};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn ServiceTransport>,
    pub courses: Arc<dyn CourseClient>,
    pub enrollments: Arc<dyn EnrollmentClient>,
    pub students: Arc<dyn StudentClient>,
    pub aggregator: Arc<dyn AggregatorService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the data service clients and the aggregator over `transport`.
    pub fn new(transport: Arc<dyn ServiceTransport>, settings: Settings) -> Self {
        let courses: Arc<dyn CourseClient> = Arc::new(RemoteCourseClient::new(transport.clone()));
        let enrollments: Arc<dyn EnrollmentClient> =
            Arc::new(RemoteEnrollmentClient::new(transport.clone()));
        let students: Arc<dyn StudentClient> = Arc::new(RemoteStudentClient::new(transport.clone()));

        let aggregator = Arc::new(AggregatorServiceImpl::new(
            courses.clone(),
            enrollments.clone(),
            students.clone(),
            AggregatorConfig::from(&settings.aggregator),
        ));

        Self {
            transport,
            courses,
            enrollments,
            students,
            aggregator,
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let transport = RedisTransport::connect(&settings.redis, settings.services.request_timeout())
            .await
            .context("failed to connect to the Redis broker")?;
        tracing::info!("Redis transport established");

        handlers::health::init_server_start();

        let addr = settings
            .server
            .socket_addr()
            .context("invalid server address configuration")?;

        let state = AppState::new(Arc::new(transport), settings);
        let router = build_router(state);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
