//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request path produces:
//!     → logging.rs (structured log events, tower-http trace spans)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::init_metrics;
