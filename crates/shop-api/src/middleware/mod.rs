//! Middleware stack for the seller API
//!
//! Request ids, HTTP spans, a request timeout, CORS and a global rate limit.
//! Health routes are merged after this stack and skip it.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use shop_common::{CorsConfig, RateLimitConfig};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logo uploads stream to disk, so the budget covers slow clients
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Wrap the seller routes in the middleware stack.
///
/// Outermost first: rate limit, request id, trace, timeout, CORS.
pub fn apply_middleware(
    router: Router<AppState>,
    rate_limit: &RateLimitConfig,
    cors: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    let router = router
        .layer(cors_layer(cors, is_production))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid));

    with_rate_limit(router, rate_limit)
}

/// Span for one request; uploads also record their declared size
fn request_span(request: &Request<Body>) -> Span {
    let header_str = |name: &HeaderName| {
        request
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string()
    };

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %header_str(&request_id_header()),
        content_length = %header_str(&header::CONTENT_LENGTH),
    )
}

/// Global (not per-client) limit; a config the limiter refuses disables it
fn with_rate_limit(router: Router<AppState>, config: &RateLimitConfig) -> Router<AppState> {
    let governor = GovernorConfigBuilder::default()
        .per_second(config.requests_per_second.into())
        .burst_size(config.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish();

    let Some(governor) = governor else {
        tracing::warn!(
            requests_per_second = config.requests_per_second,
            burst = config.burst,
            "Rate limiting disabled: invalid configuration"
        );
        return router;
    };

    router.layer(GovernorLayer {
        config: Arc::new(governor),
    })
}

/// CORS for the seller dashboard: reads and multipart posts only
fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            request_id_header(),
        ])
        .expose_headers([request_id_header()]);

    if config.allowed_origins.is_empty() {
        if is_production {
            tracing::warn!("CORS: no allowed origins configured; browser requests will be refused");
            return layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()));
        }
        tracing::warn!("CORS: allowing any origin; set CORS_ALLOWED_ORIGINS outside development");
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    tracing::info!(count = origins.len(), "CORS: allowing configured origins");
    layer.allow_origin(AllowOrigin::list(origins))
}
