use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of every issued token.
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Claims carried by an access token.
///
/// Field names are part of the wire format: tokens issued by earlier
/// deployments use `nik` and `password` alongside the registered `exp`/`iat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// National identifier of the authenticated identity
    pub nik: String,

    /// Password hash as stored at the moment of issuance
    #[serde(rename = "password")]
    pub password_hash: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl TokenClaims {
    /// Create claims issued at `issued_at`, expiring `TOKEN_LIFETIME_HOURS` later.
    ///
    /// # Arguments
    /// * `nik` - Identifier the token is bound to
    /// * `password_hash` - Stored hash snapshot
    /// * `issued_at` - Issuance instant
    pub fn new(
        nik: impl ToString,
        password_hash: impl ToString,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expiration = issued_at + Duration::hours(TOKEN_LIFETIME_HOURS);

        Self {
            nik: nik.to_string(),
            password_hash: password_hash.to_string(),
            exp: expiration.timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    /// Expiration as a UTC instant.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
