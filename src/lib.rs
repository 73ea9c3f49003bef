//! Question answering API.
//!
//! A single `POST /api/` endpoint that accepts a question and an optional
//! base64 image and returns a fixed answer with two reference links. Every
//! request runs under a 30 second deadline.
//!
//! ```text
//!     Client ──▶ request id ──▶ trace ──▶ deadline gate ──▶ /api/ handler
//!                                              │                 │
//!     Client ◀── 504 on deadline ◀─────────────┘   answer ◀──────┘
//! ```

pub mod answer;
pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::ServiceConfig;
pub use http::{build_router, HttpServer};
pub use lifecycle::Shutdown;
