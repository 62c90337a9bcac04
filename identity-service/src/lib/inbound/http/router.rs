use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::validate_token::validate_token;
use super::middleware::require_bearer_token;
use crate::domain::identity::ports::CredentialServicePort;

pub struct AppState<S: CredentialServicePort> {
    pub credential_service: Arc<S>,
}

impl<S: CredentialServicePort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            credential_service: Arc::clone(&self.credential_service),
        }
    }
}

/// Build the HTTP application.
///
/// Requests exceeding `request_timeout` are answered with 408; dropping the
/// handler future cancels any repository I/O still in flight.
pub fn create_router<S: CredentialServicePort>(
    credential_service: Arc<S>,
    request_timeout: Duration,
) -> Router {
    let state = AppState { credential_service };

    let public_routes = Router::new()
        .route("/", get(health))
        .route("/api/v1/auth/register", post(register::<S>))
        .route("/api/v1/auth/login", post(login::<S>));

    let protected_routes = Router::new()
        .route("/api/v1/auth/validate", get(validate_token::<S>))
        .route_layer(middleware::from_fn(require_bearer_token));

    // Header values are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
