use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::domain::identity::models::CurrentIdentity;
use crate::domain::identity::models::Role;

/// Introspection of an already-validated session.
///
/// The bearer middleware has validated the token and attached the resolved
/// identity; this handler trusts it and never re-reads the credential store.
pub async fn me(Extension(identity): Extension<CurrentIdentity>) -> Json<MeResponseData> {
    Json(MeResponseData {
        username: identity.username,
        role: identity.role,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub username: String,
    pub role: Role,
}
