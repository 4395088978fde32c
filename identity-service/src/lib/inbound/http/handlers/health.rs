/// Liveness probe for the auth API.
pub async fn health() -> &'static str {
    "Auth Service is running"
}
