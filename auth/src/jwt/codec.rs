use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;

use super::claims::TokenClaims;
use super::errors::TokenError;

const EXPECTED_ALGORITHM: &str = "HS256";

/// Only the `alg` member is inspected before the signature is checked.
#[derive(Deserialize)]
struct DeclaredHeader {
    alg: String,
}

/// Signs and verifies access tokens.
///
/// Tokens use the compact JWS layout
/// `base64url(header).base64url(payload).base64url(hmac_sha256(header.payload))`
/// with unpadded base64url segments. The signing key is fixed at construction
/// and only ever read afterwards, so a codec can be shared freely across tasks.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a new codec with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - The secret must stay stable across restarts, otherwise every
    ///   outstanding token stops validating
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for `nik`, valid for 24 hours from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, nik: &str, password_hash: &str) -> Result<String, TokenError> {
        self.issue_at(nik, password_hash, Utc::now())
    }

    /// Issue a token as if it had been minted at `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_at(
        &self,
        nik: &str,
        password_hash: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = TokenClaims::new(nik, password_hash, issued_at);
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and decode its claims.
    ///
    /// The declared algorithm is checked before the key is used, then the
    /// HMAC is compared in constant time, and finally `exp` is enforced with
    /// no leeway.
    ///
    /// # Errors
    /// * `Malformed` - Not three segments, bad base64, bad JSON or missing claims
    /// * `Algorithm` - Header declares anything other than HS256
    /// * `Signature` - HMAC does not match
    /// * `Expired` - `exp` lies in the past
    pub fn parse_and_validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let algorithm = declared_algorithm(token)?;
        if algorithm != EXPECTED_ALGORITHM {
            return Err(TokenError::Algorithm(algorithm));
        }

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::Signature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName
                | ErrorKind::MissingAlgorithm => TokenError::Algorithm(e.to_string()),
                _ => TokenError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

fn declared_algorithm(token: &str) -> Result<String, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Malformed(format!(
            "expected 3 segments, got {}",
            segments.len()
        )));
    }

    let header = URL_SAFE_NO_PAD
        .decode(segments[0])
        .map_err(|e| TokenError::Malformed(format!("header is not base64url: {}", e)))?;
    let header: DeclaredHeader = serde_json::from_slice(&header)
        .map_err(|e| TokenError::Malformed(format!("header is not valid JSON: {}", e)))?;

    Ok(header.alg)
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("secret", &"<redacted>")
            .field("algorithms", &self.validation.algorithms)
            .finish()
    }
}
