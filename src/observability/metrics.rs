//! Metrics collection and exposition.
//!
//! # Metrics
//! - `answer_api_requests_total` (counter): requests by method, status, gate outcome
//! - `answer_api_request_duration_seconds` (histogram): latency distribution
//!
//! Recording without an installed exporter is a no-op.

use std::net::SocketAddr;
use std::time::Duration;

use ::metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::resilience::GateOutcome;

pub const REQUESTS_TOTAL: &str = "answer_api_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "answer_api_request_duration_seconds";

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(method: &str, status: u16, outcome: GateOutcome, elapsed: Duration) {
    counter!(
        REQUESTS_TOTAL,
        "method" => method.to_string(),
        "status" => status.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    histogram!(REQUEST_DURATION_SECONDS, "outcome" => outcome.as_str())
        .record(elapsed.as_secs_f64());
}
