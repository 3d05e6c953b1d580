//! Tracing segment middleware.
//!
//! # Responsibilities
//! - Wrap each request in a span carrying the fixed segment name
//! - Forward the request and response completely unchanged
//!
//! The segment name is fixed at startup (`"<stage>-colorteller-<color>"`); a
//! later environment change does not rename segments.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};
use tracing::instrument::Instrumented;
use tracing::Instrument;

/// Layer that instruments every request with a named tracing segment.
#[derive(Clone, Debug)]
pub struct SegmentLayer {
    name: Arc<str>,
}

impl SegmentLayer {
    /// Create a layer emitting segments under the given fixed name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }
}

impl<S> Layer<S> for SegmentLayer {
    type Service = SegmentService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SegmentService {
            inner,
            name: self.name.clone(),
        }
    }
}

/// Service produced by [`SegmentLayer`].
#[derive(Clone, Debug)]
pub struct SegmentService<S> {
    inner: S,
    name: Arc<str>,
}

impl<S, B> Service<Request<B>> for SegmentService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Instrumented<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let span = tracing::info_span!(
            "segment",
            name = %self.name,
            method = %request.method(),
            path = %request.uri().path(),
        );
        self.inner.call(request).instrument(span)
    }
}
