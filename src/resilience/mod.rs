//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request:
//!     → timeouts.rs (start deadline, run handler)
//!     → handler response, or 504 when the deadline fires first
//! ```
//!
//! # Design Decisions
//! - Every request has a deadline, fallbacks included
//! - Cancellation is cooperative: the handler future is dropped, not interrupted

pub mod timeouts;

pub use timeouts::{GateOutcome, RequestGate, RequestGateLayer, REQUEST_TIMEOUT};
