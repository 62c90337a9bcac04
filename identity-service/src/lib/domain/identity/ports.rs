use async_trait::async_trait;

use crate::domain::identity::models::AuthenticatedIdentity;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::Nik;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::RegisteredIdentity;
use crate::domain::identity::models::TokenPayload;
use crate::identity::errors::CredentialError;

/// Port for credential domain service operations.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a new identity with a generated password.
    ///
    /// # Arguments
    /// * `command` - Validated NIK and role
    ///
    /// # Returns
    /// Registered identity including the plaintext password (returned only here)
    ///
    /// # Errors
    /// * `Persistence` - Store rejected the write (duplicate NIK, I/O failure)
    /// * `Password` - Password hashing failed
    async fn register(&self, command: RegisterCommand)
        -> Result<RegisteredIdentity, CredentialError>;

    /// Authenticate an identity and issue an access token.
    ///
    /// # Arguments
    /// * `command` - NIK and supplied password
    ///
    /// # Returns
    /// Identity details and a signed token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown NIK or wrong password
    /// * `Persistence` - Store read failed
    /// * `Token` - Token could not be issued
    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedIdentity, CredentialError>;

    /// Verify an access token without consulting the store.
    ///
    /// # Arguments
    /// * `token` - Compact token string
    ///
    /// # Returns
    /// Claims carried by the token
    ///
    /// # Errors
    /// * `Token` - Malformed, badly signed, wrong algorithm or expired
    async fn validate_token(&self, token: &str) -> Result<TokenPayload, CredentialError>;
}

/// Persistence operations for identity aggregate.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Persist a new identity atomically.
    ///
    /// # Arguments
    /// * `identity` - Identity to create
    ///
    /// # Returns
    /// Stored identity with its assigned key
    ///
    /// # Errors
    /// * `Persistence(Conflict)` - NIK is already registered
    /// * `Persistence(Database)` - Database operation failed
    async fn create(&self, identity: NewIdentity) -> Result<Identity, CredentialError>;

    /// Retrieve identity by NIK.
    ///
    /// # Arguments
    /// * `nik` - Identifier to search for
    ///
    /// # Returns
    /// Optional identity (None if not found)
    ///
    /// # Errors
    /// * `Persistence(Database)` - Database operation failed
    async fn find_by_nik(&self, nik: &Nik) -> Result<Option<Identity>, CredentialError>;
}

/// Source of registration passwords.
pub trait SecretGenerator: Send + Sync + 'static {
    /// Produce a password of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Issues and verifies access tokens.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Mint a token bound to `nik` and a snapshot of its password hash.
    ///
    /// # Errors
    /// * `Token` - Encoding failed
    fn issue(&self, nik: &Nik, password_hash: &str) -> Result<String, CredentialError>;

    /// Verify signature, algorithm and expiry, then decode the claims.
    ///
    /// # Errors
    /// * `Token` - Token rejected
    fn parse_and_validate(&self, token: &str) -> Result<TokenPayload, CredentialError>;
}
