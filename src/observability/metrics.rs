//! Metrics collection and exposition.
//!
//! # Metrics
//! - `booking_requests_total` (counter): requests by method, status
//! - `booking_request_duration_seconds` (histogram): latency distribution
//! - `booking_store_size` (gauge): bookings currently held
//! - `booking_response_failures_total` (counter): responses that could not be rendered
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - Response failures are additionally counted in-process so the signal
//!   is observable without a scrape endpoint

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Install the Prometheus recorder and its HTTP scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "booking_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("booking_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_store_size(len: usize) {
    metrics::gauge!("booking_store_size").set(len as f64);
}

/// Count of responses that degraded to a 500 because the body could not be rendered.
#[derive(Debug, Default)]
pub struct FailureCounter {
    count: AtomicU64,
}

impl FailureCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, reason: &'static str) {
        self.count.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("booking_response_failures_total", "reason" => reason).increment(1);
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
