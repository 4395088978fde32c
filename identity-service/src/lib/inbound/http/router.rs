use std::sync::Arc;
use std::time::Duration;

use auth::TokenValidator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::identity::ports::IdentityRepository;
use crate::domain::identity::service::AuthService;

pub struct AppState<R: IdentityRepository> {
    pub auth_service: Arc<AuthService<R>>,
    pub token_validator: Arc<TokenValidator>,
}

// Manual impl: #[derive(Clone)] would demand R: Clone, which the Arcs make
// unnecessary.
impl<R: IdentityRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            token_validator: Arc::clone(&self.token_validator),
        }
    }
}

pub fn create_router<R: IdentityRepository>(
    auth_service: Arc<AuthService<R>>,
    token_validator: Arc<TokenValidator>,
) -> Router {
    let state = AppState {
        auth_service,
        token_validator,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login::<R>))
        .route("/api/auth/register", post(register::<R>))
        .route("/api/auth/health", get(health));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<R>,
        ));

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
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
