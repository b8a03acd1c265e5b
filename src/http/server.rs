//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the booking store and Auth Gate from config
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Serve on a listener until the shutdown broadcast fires

use axum::{
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::bookings::{handlers::dispatch, BookingStore};
use crate::config::ServiceConfig;
use crate::docs::{docs_page, openapi, swagger_json};
use crate::health::{health, health_head};
use crate::http::request::{make_request_span, request_id_header, UuidRequestId};
use crate::observability::{metrics, FailureCounter};
use crate::security::AuthGate;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookingStore>,
    pub auth: Arc<AuthGate>,
    pub failures: Arc<FailureCounter>,
    pub openapi: Arc<Value>,
    pub max_body_size: usize,
}

/// HTTP server for the booking service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let store = if config.store.seed_defaults {
            BookingStore::seeded()
        } else {
            BookingStore::default()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<BookingStore>) -> Self {
        let state = AppState {
            store,
            auth: Arc::new(AuthGate::from_config(&config.auth)),
            failures: Arc::new(FailureCounter::new()),
            openapi: Arc::new(openapi::document(&advertised_url(&config))),
            max_body_size: config.security.max_body_size,
        };

        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(health).head(health_head))
            .route("/docs", get(docs_page))
            .route("/swagger.json", get(swagger_json))
            .fallback(dispatch)
            .with_state(state)
            .layer(middleware::from_fn(track_metrics))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                make_request_span(request)
            }))
            .layer(PropagateRequestIdLayer::new(request_id_header()))
            .layer(SetRequestIdLayer::new(request_id_header(), UuidRequestId))
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared state (store, failure counter) behind the router.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let bookings = self.state.store.len();
        metrics::record_store_size(bookings);
        tracing::info!(address = %addr, bookings, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Base URL advertised in the OpenAPI document.
fn advertised_url(config: &ServiceConfig) -> String {
    let port = config
        .listener
        .bind_address
        .parse::<SocketAddr>()
        .map(|addr| addr.port())
        .unwrap_or(8080);
    format!("http://localhost:{}", port)
}

async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let response = next.run(request).await;
    metrics::record_request(&method, response.status().as_u16(), start);
    response
}
