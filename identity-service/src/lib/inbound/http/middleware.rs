use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use chrono::Utc;

use crate::domain::identity::ports::AuthServicePort;
use crate::domain::identity::ports::IdentityRepository;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware guarding protected routes.
///
/// Extracts the bearer token, validates it against the process signing key,
/// and attaches the resolved identity to the request for downstream
/// handlers. Every failure short-circuits with the same unauthenticated
/// response; which check failed (missing header, malformed token, bad
/// signature, expiry) is only visible in server logs.
pub async fn authenticate<R: IdentityRepository>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state
        .token_validator
        .validate(token, Utc::now())
        .map_err(|e| {
            tracing::warn!(reason = %e, "token rejected");
            ApiError::Unauthenticated.into_response()
        })?;

    let identity = state.auth_service.current_identity(&claims).map_err(|e| {
        tracing::warn!(reason = %e, "token claims rejected");
        ApiError::Unauthenticated.into_response()
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Tokens are accepted from the `Authorization: Bearer <token>` header only,
/// never from query parameters or cookies.
fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::debug!("missing Authorization header");
            ApiError::Unauthenticated.into_response()
        })?;

    let header = header.to_str().map_err(|_| {
        tracing::debug!("Authorization header is not valid UTF-8");
        ApiError::Unauthenticated.into_response()
    })?;

    header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::debug!("Authorization header is not a bearer token");
        ApiError::Unauthenticated.into_response()
    })
}
