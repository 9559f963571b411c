//! The response interceptor: a tower layer around any axum service.

use std::task::{Context, Poll};

use axum::{
    body::Body,
    extract::Request,
    http::{
        HeaderValue, StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    response::Response,
};
use futures_util::future::BoxFuture;
use respmask::{MaskPlan, mask_json_body};
use tower::{Layer, Service};
use tracing::{debug, trace, warn};

use crate::resolve::ResolveRules;

/// Applies [`MaskingService`] to the services it wraps.
///
/// ```rust
/// use axum::{Json, Router, routing::get};
/// use respmask::{BuiltinRule, MaskPlan, RuleSet};
/// use respmask_axum::{MaskingLayer, RouteTable};
/// use serde_json::json;
///
/// let routes = RouteTable::new().route(
///     "/me",
///     MaskPlan::exact(RuleSet::new().with_builtin("email", BuiltinRule::Email)),
/// );
///
/// let app: Router = Router::new()
///     .route("/me", get(|| async { Json(json!({"email": "test@example.com"})) }))
///     .layer(MaskingLayer::new(routes));
/// ```
#[derive(Clone, Debug)]
pub struct MaskingLayer<R> {
    resolver: R,
    body_limit: usize,
}

impl<R> MaskingLayer<R> {
    /// Masks responses according to the plans `resolver` returns.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            body_limit: usize::MAX,
        }
    }

    /// Caps how many body bytes are buffered for masking.
    ///
    /// A successful response whose body exceeds the limit (or whose body stream
    /// fails while buffering) has already been partly consumed, so it can be
    /// neither masked nor forwarded intact. It is replaced with an empty
    /// `500 Internal Server Error`: the layer fails closed, and for these
    /// responses the client sees neither the masked nor the original body,
    /// which breaks the usual masked-or-original passthrough guarantee.
    /// Leave the limit unset if every successful response must reach the
    /// client as masked or original bytes.
    #[must_use]
    pub fn body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }
}

impl<S, R> Layer<S> for MaskingLayer<R>
where
    R: Clone,
{
    type Service = MaskingService<S, R>;

    fn layer(&self, inner: S) -> Self::Service {
        MaskingService {
            inner,
            resolver: self.resolver.clone(),
            body_limit: self.body_limit,
        }
    }
}

/// Buffers successful responses of `S` and masks their JSON bodies.
#[derive(Clone, Debug)]
pub struct MaskingService<S, R> {
    inner: S,
    resolver: R,
    body_limit: usize,
}

impl<S, R> Service<Request> for MaskingService<S, R>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    R: ResolveRules,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        // Resolved up front: the inner service consumes the request.
        let plan = self.resolver.resolve(&request);
        let body_limit = self.body_limit;

        // Take the service that was driven to readiness, leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let response = inner.call(request).await?;
            Ok(mask_response(response, &plan, body_limit).await)
        })
    }
}

/// Masks `response` according to `plan`.
///
/// Non-2xx responses and bodies that are not JSON objects are returned with
/// their original bytes.
pub async fn mask_response(response: Response, plan: &MaskPlan, body_limit: usize) -> Response {
    let status = response.status();
    if !status.is_success() {
        debug!(status = status.as_u16(), "skipping masking for unsuccessful response");
        return response;
    }
    if plan.is_noop() {
        trace!("no masking rules for this response");
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, body_limit).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "failed to buffer response body for masking");
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;
            parts.headers.remove(CONTENT_LENGTH);
            parts.headers.remove(CONTENT_TYPE);
            return Response::from_parts(parts, Body::empty());
        }
    };

    match mask_json_body(&bytes, plan) {
        Ok(masked) => {
            trace!(
                masked_fields = masked.masked_fields,
                mode = %plan.mode(),
                "masked response body"
            );
            parts
                .headers
                .insert(CONTENT_LENGTH, HeaderValue::from(masked.bytes.len()));
            Response::from_parts(parts, Body::from(masked.bytes))
        }
        Err(err) => {
            debug!(reason = err.reason(), error = %err, "forwarding response body unmasked");
            Response::from_parts(parts, Body::from(bytes))
        }
    }
}
