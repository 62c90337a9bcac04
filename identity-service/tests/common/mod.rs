use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use auth::PasswordGenerator;
use auth::PasswordHasher;
use auth::TokenCodec;
use identity_service::domain::identity::models::Identity;
use identity_service::domain::identity::models::IdentityId;
use identity_service::domain::identity::models::NewIdentity;
use identity_service::domain::identity::models::Nik;
use identity_service::domain::identity::ports::IdentityRepository;
use identity_service::domain::identity::service::CredentialService;
use identity_service::identity::errors::CredentialError;
use identity_service::identity::errors::PersistenceError;
use identity_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Minimum bcrypt cost, keeps the suite fast.
const TEST_HASH_COST: u32 = 4;

/// Identity store backed by a map, enforcing NIK uniqueness like the table constraint.
#[derive(Default)]
pub struct InMemoryIdentityRepository {
    identities: Mutex<HashMap<String, Identity>>,
    next_id: AtomicI64,
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn create(&self, identity: NewIdentity) -> Result<Identity, CredentialError> {
        let mut identities = self
            .identities
            .lock()
            .map_err(|e| PersistenceError::Database(e.to_string()))?;

        if identities.contains_key(identity.nik.as_str()) {
            return Err(PersistenceError::Conflict(identity.nik.to_string()).into());
        }

        let id = IdentityId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = identity.with_id(id);
        identities.insert(stored.nik.as_str().to_string(), stored.clone());

        Ok(stored)
    }

    async fn find_by_nik(&self, nik: &Nik) -> Result<Option<Identity>, CredentialError> {
        let identities = self
            .identities
            .lock()
            .map_err(|e| PersistenceError::Database(e.to_string()))?;

        Ok(identities.get(nik.as_str()).cloned())
    }
}

/// Test application that spawns a real server
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

        let credential_service = Arc::new(CredentialService::new(
            Arc::new(InMemoryIdentityRepository::default()),
            Arc::new(PasswordGenerator::new()),
            Arc::new(TokenCodec::new(TEST_SECRET)),
            PasswordHasher::with_cost(TEST_HASH_COST),
        ));

        let router = create_router(credential_service, Duration::from_secs(30));

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

    /// Register an identity and return the generated password
    pub async fn register(&self, nik: &str, role: &str) -> String {
        let response = self
            .post("/api/v1/auth/register")
            .json(&serde_json::json!({ "nik": nik, "role": role }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["password"]
            .as_str()
            .expect("password missing from response")
            .to_string()
    }

    /// Log in and return the issued token
    pub async fn login(&self, nik: &str, password: &str) -> String {
        let response = self
            .post("/api/v1/auth/login")
            .json(&serde_json::json!({ "nik": nik, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("token missing from response")
            .to_string()
    }
}
