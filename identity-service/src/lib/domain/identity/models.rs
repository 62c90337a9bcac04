use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::identity::errors::NikError;
use crate::identity::errors::RoleError;

/// Fixed length of generated registration passwords.
pub const REGISTRATION_PASSWORD_LENGTH: usize = 6;

/// Identity aggregate entity.
///
/// Represents a registered identity as stored by the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: IdentityId,
    pub nik: Nik,
    pub role: Role,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Identity that has not been assigned a store key yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentity {
    pub nik: Nik,
    pub role: Role,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewIdentity {
    /// Attach the key assigned by the store.
    pub fn with_id(self, id: IdentityId) -> Identity {
        Identity {
            id,
            nik: self.nik,
            role: self.role,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Surrogate key assigned by the identity store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(pub i64);

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// National identifier value type
///
/// Ensures the identifier is exactly 16 characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nik(String);

impl Nik {
    pub const LENGTH: usize = 16;

    /// Create a new valid NIK.
    ///
    /// # Arguments
    /// * `nik` - Raw identifier string
    ///
    /// # Returns
    /// Validated Nik value object
    ///
    /// # Errors
    /// * `InvalidLength` - Identifier is not exactly 16 characters
    pub fn new(nik: String) -> Result<Self, NikError> {
        let length = nik.chars().count();
        if length != Self::LENGTH {
            return Err(NikError::InvalidLength {
                expected: Self::LENGTH,
                actual: length,
            });
        }
        Ok(Self(nik))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-form role label. Stored and echoed, never enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role(String);

impl Role {
    /// Create a new role.
    ///
    /// # Errors
    /// * `Empty` - Role is empty or whitespace only
    pub fn new(role: String) -> Result<Self, RoleError> {
        if role.trim().is_empty() {
            return Err(RoleError::Empty);
        }
        Ok(Self(role))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new identity
#[derive(Debug)]
pub struct RegisterCommand {
    pub nik: Nik,
    pub role: Role,
}

impl RegisterCommand {
    pub fn new(nik: Nik, role: Role) -> Self {
        Self { nik, role }
    }
}

/// Command to authenticate an identity with its password
#[derive(Debug)]
pub struct LoginCommand {
    pub nik: Nik,
    pub password: String,
}

impl LoginCommand {
    pub fn new(nik: Nik, password: String) -> Self {
        Self { nik, password }
    }
}

/// Outcome of a registration.
///
/// `password` is the only copy of the generated plaintext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredIdentity {
    pub nik: Nik,
    pub role: Role,
    pub password: String,
}

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub id: IdentityId,
    pub nik: Nik,
    pub role: Role,
    pub token: String,
}

/// Claims recovered from a valid access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub nik: String,
    /// Password hash captured when the token was issued
    pub password: String,
    /// Expiry in Unix seconds
    pub exp: i64,
}

impl From<auth::TokenClaims> for TokenPayload {
    fn from(claims: auth::TokenClaims) -> Self {
        Self {
            nik: claims.nik,
            password: claims.password_hash,
            exp: claims.exp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nik_accepts_sixteen_characters() {
        let nik = Nik::new("1234567890123456".to_string()).unwrap();
        assert_eq!(nik.as_str(), "1234567890123456");
        assert_eq!(nik.to_string(), "1234567890123456");
    }

    #[test]
    fn test_nik_rejects_wrong_length() {
        assert_eq!(
            Nik::new("123".to_string()),
            Err(NikError::InvalidLength {
                expected: 16,
                actual: 3
            })
        );
        assert!(Nik::new("12345678901234567".to_string()).is_err());
        assert!(Nik::new(String::new()).is_err());
    }

    #[test]
    fn test_role_rejects_blank() {
        assert_eq!(Role::new(String::new()), Err(RoleError::Empty));
        assert_eq!(Role::new("   ".to_string()), Err(RoleError::Empty));
        assert_eq!(Role::new("admin".to_string()).unwrap().as_str(), "admin");
    }

    #[test]
    fn test_token_payload_from_claims() {
        let claims = auth::TokenClaims {
            nik: "1234567890123456".to_string(),
            password_hash: "$2b$14$hash".to_string(),
            exp: 1_700_086_400,
            iat: 1_700_000_000,
        };

        let payload = TokenPayload::from(claims);
        assert_eq!(payload.nik, "1234567890123456");
        assert_eq!(payload.password, "$2b$14$hash");
        assert_eq!(payload.exp, 1_700_086_400);
    }
}
