use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::identity::models::AuthenticatedIdentity;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::RegisteredIdentity;
use crate::domain::identity::models::TokenPayload;
use crate::domain::identity::models::REGISTRATION_PASSWORD_LENGTH;
use crate::identity::errors::CredentialError;
use crate::identity::ports::CredentialServicePort;
use crate::identity::ports::IdentityRepository;
use crate::identity::ports::SecretGenerator;
use crate::identity::ports::TokenIssuer;

/// Domain service implementation for credential operations.
///
/// Concrete implementation of CredentialServicePort with dependency injection.
/// Holds no mutable state; every call is independent.
pub struct CredentialService<IR, SG, TI>
where
    IR: IdentityRepository,
    SG: SecretGenerator,
    TI: TokenIssuer,
{
    repository: Arc<IR>,
    secret_generator: Arc<SG>,
    token_issuer: Arc<TI>,
    password_hasher: auth::PasswordHasher,
}

impl<IR, SG, TI> CredentialService<IR, SG, TI>
where
    IR: IdentityRepository,
    SG: SecretGenerator,
    TI: TokenIssuer,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `secret_generator` - Registration password source
    /// * `token_issuer` - Access token signing implementation
    /// * `password_hasher` - Password hashing configuration
    ///
    /// # Returns
    /// Configured credential service instance
    pub fn new(
        repository: Arc<IR>,
        secret_generator: Arc<SG>,
        token_issuer: Arc<TI>,
        password_hasher: auth::PasswordHasher,
    ) -> Self {
        Self {
            repository,
            secret_generator,
            token_issuer,
            password_hasher,
        }
    }

    // bcrypt is CPU bound; keep it off the async workers.
    async fn hash_password(&self, password: &str) -> Result<String, CredentialError> {
        let hasher = self.password_hasher;
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| {
                CredentialError::Unknown(format!("Password hashing task failed: {}", e))
            })?
            .map_err(CredentialError::from)
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        let hasher = self.password_hasher;
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| {
                CredentialError::Unknown(format!("Password verification task failed: {}", e))
            })?
            .map_err(CredentialError::from)
    }
}

#[async_trait]
impl<IR, SG, TI> CredentialServicePort for CredentialService<IR, SG, TI>
where
    IR: IdentityRepository,
    SG: SecretGenerator,
    TI: TokenIssuer,
{
    async fn register(
        &self,
        command: RegisterCommand,
    ) -> Result<RegisteredIdentity, CredentialError> {
        let password = self
            .secret_generator
            .generate(REGISTRATION_PASSWORD_LENGTH);

        let password_hash = self.hash_password(&password).await.map_err(|e| {
            tracing::error!(nik = %command.nik, error = %e, "Failed to hash password");
            e
        })?;

        let now = Utc::now();
        let identity = NewIdentity {
            nik: command.nik,
            role: command.role,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let nik = identity.nik.clone();
        let created = self.repository.create(identity).await.map_err(|e| {
            tracing::error!(nik = %nik, error = %e, "Failed to save identity");
            e
        })?;

        tracing::info!(nik = %created.nik, id = %created.id, "Identity registered");

        Ok(RegisteredIdentity {
            nik: created.nik,
            role: created.role,
            password,
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedIdentity, CredentialError> {
        let identity = match self.repository.find_by_nik(&command.nik).await? {
            Some(identity) => identity,
            None => {
                tracing::warn!(nik = %command.nik, "Login rejected: identity not found");
                return Err(CredentialError::InvalidCredentials);
            }
        };

        // A corrupt stored hash only exists for a registered NIK, so it must
        // not surface differently from a wrong password.
        let is_valid = match self
            .verify_password(&command.password, &identity.password_hash)
            .await
        {
            Ok(is_valid) => is_valid,
            Err(CredentialError::Password(e)) => {
                tracing::error!(
                    nik = %identity.nik,
                    error = %e,
                    "Stored password hash is unreadable"
                );
                false
            }
            Err(e) => return Err(e),
        };

        if !is_valid {
            tracing::warn!(nik = %identity.nik, "Login rejected: password does not match");
            return Err(CredentialError::InvalidCredentials);
        }

        let token = self
            .token_issuer
            .issue(&identity.nik, &identity.password_hash)
            .map_err(|e| {
                tracing::error!(nik = %identity.nik, error = %e, "Failed to generate token");
                e
            })?;

        tracing::info!(nik = %identity.nik, id = %identity.id, "Identity authenticated");

        Ok(AuthenticatedIdentity {
            id: identity.id,
            nik: identity.nik,
            role: identity.role,
            token,
        })
    }

    async fn validate_token(&self, token: &str) -> Result<TokenPayload, CredentialError> {
        self.token_issuer.parse_and_validate(token).map_err(|e| {
            tracing::warn!(error = %e, "Token rejected");
            e
        })
    }
}
