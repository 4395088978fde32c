use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::identity::models::LoginOutcome;
use crate::domain::identity::models::Role;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::identity::ports::IdentityRepository;
use crate::inbound::http::router::AppState;

pub async fn login<R: IdentityRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseData>, ApiError> {
    state
        .auth_service
        .login(&body.username, &body.password)
        .await
        .map(|outcome| Json(outcome.into()))
        .map_err(ApiError::from)
}

/// Unknown fields (e.g. a crafted `role`) are ignored: the role on the
/// issued token always comes from the stored identity record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub username: String,
    pub role: Role,
}

impl From<LoginOutcome> for LoginResponseData {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            token: outcome.token,
            token_type: "Bearer".to_string(),
            username: outcome.username,
            role: outcome.role,
        }
    }
}
