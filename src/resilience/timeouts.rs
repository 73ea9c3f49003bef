//! Request deadline enforcement.
//!
//! # Responsibilities
//! - Race every request against a fixed deadline
//! - Replace the response with 504 Gateway Timeout when the deadline wins
//! - Drop the in-flight handler future so a late result is never sent
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout is the only failure this layer recognises; no retries
//! - Tokio's clock is used so paused-time tests drive the deadline

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use tokio::time::Instant;
use tower::{Layer, Service};

use crate::http::response::ApiError;
use crate::observability::metrics;

/// Deadline applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Terminal state of a gated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Completed,
    TimedOut,
}

impl GateOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            GateOutcome::Completed => "completed",
            GateOutcome::TimedOut => "timed_out",
        }
    }
}

/// Layer that bounds how long the wrapped service may take.
#[derive(Debug, Clone, Copy)]
pub struct RequestGateLayer {
    deadline: Duration,
}

impl RequestGateLayer {
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }
}

impl Default for RequestGateLayer {
    fn default() -> Self {
        Self::new(REQUEST_TIMEOUT)
    }
}

impl<S> Layer<S> for RequestGateLayer {
    type Service = RequestGate<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestGate {
            inner,
            deadline: self.deadline,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestGate<S> {
    inner: S,
    deadline: Duration,
}

impl<S, B> Service<Request<B>> for RequestGate<S>
where
    S: Service<Request<B>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let deadline = self.deadline;
        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let started = Instant::now();

        // The ready service handles this request; the clone waits for the next.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let pending = inner.call(req);

        Box::pin(async move {
            let (outcome, result) = match tokio::time::timeout(deadline, pending).await {
                Ok(result) => (GateOutcome::Completed, result),
                Err(_) => {
                    tracing::warn!(
                        method = %method,
                        path = %path,
                        deadline_secs = deadline.as_secs_f64(),
                        "Request exceeded deadline, handler abandoned"
                    );
                    (GateOutcome::TimedOut, Ok(ApiError::Timeout.into_response()))
                }
            };

            if let Ok(response) = &result {
                metrics::record_request(
                    method.as_str(),
                    response.status().as_u16(),
                    outcome,
                    started.elapsed(),
                );
            }

            result
        })
    }
}
