//! Shared utilities for integration and load testing.
#![allow(dead_code)]

use booking_service::config::ServiceConfig;
use booking_service::http::HttpServer;
use booking_service::lifecycle::Shutdown;
use booking_service::BookingStore;
use std::net::SocketAddr;
use std::sync::Arc;

pub const ADMIN_AUTH: &str = "Basic YWRtaW46cGFzc3dvcmQ=";

/// A booking service running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<BookingStore>,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with default config (seeded store).
pub async fn start_server() -> TestServer {
    start_server_with(ServiceConfig::default()).await
}

pub async fn start_server_with(mut config: ServiceConfig) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::new(config);
    let store = server.state().store.clone();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        store,
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
