use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenValidator;
use chrono::Duration;
use identity_service::domain::identity::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryIdentityRepository;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_TOKEN_TTL_SECONDS: i64 = 3600;

/// Test application that spawns a real server over the in-memory store
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryIdentityRepository::new());
        // Minimal Argon2 work factor keeps the suite fast
        let password_hasher =
            PasswordHasher::with_params(8, 1, 1).expect("Failed to build password hasher");
        let token_issuer = TokenIssuer::new(
            TEST_JWT_SECRET,
            Duration::seconds(TEST_TOKEN_TTL_SECONDS),
        );
        let token_validator = Arc::new(TokenValidator::new(TEST_JWT_SECRET));

        let auth_service = Arc::new(AuthService::new(repository, password_hasher, token_issuer));

        let router = create_router(auth_service, token_validator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register an identity and log it in, returning the bearer token
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert!(
            response.status().is_success(),
            "registration failed: {}",
            response.status()
        );

        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert!(
            response.status().is_success(),
            "login failed: {}",
            response.status()
        );

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("login response should contain a token")
            .to_string()
    }
}
