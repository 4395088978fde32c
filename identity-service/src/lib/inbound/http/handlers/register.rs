use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::identity::ports::IdentityRepository;
use crate::inbound::http::router::AppState;

pub async fn register<R: IdentityRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<Json<RegisterResponseData>, ApiError> {
    let identity = state
        .auth_service
        .register(&body.username, &body.password)
        .await?;

    // The response confirms the username only; the hash never leaves the
    // service.
    Ok(Json(RegisterResponseData {
        message: "User registered successfully".to_string(),
        username: identity.username.as_str().to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
    pub username: String,
}
