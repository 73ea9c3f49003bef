//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (add / propagate request ID)
//!     → resilience gate (deadline)
//!     → api handlers
//!     → response.rs (errors rendered as {"detail": ...})
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{build_router, HttpServer};
