use thiserror::Error;

/// Error for Nik validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NikError {
    #[error("NIK must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Error for Role validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Role must not be empty")]
    Empty,
}

/// Failures reported by the identity store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Identity already registered: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for all credential operations
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid NIK: {0}")]
    InvalidNik(#[from] NikError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    // Infrastructure errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Domain-level errors. Unknown NIK and wrong password share this variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
