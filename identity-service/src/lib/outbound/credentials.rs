//! Adapters plugging the `auth` primitives into the identity ports.

use auth::PasswordGenerator;
use auth::TokenCodec;

use crate::domain::identity::models::Nik;
use crate::domain::identity::models::TokenPayload;
use crate::domain::identity::ports::SecretGenerator;
use crate::domain::identity::ports::TokenIssuer;
use crate::identity::errors::CredentialError;

impl SecretGenerator for PasswordGenerator {
    fn generate(&self, length: usize) -> String {
        PasswordGenerator::generate(self, length)
    }
}

impl TokenIssuer for TokenCodec {
    fn issue(&self, nik: &Nik, password_hash: &str) -> Result<String, CredentialError> {
        Ok(TokenCodec::issue(self, nik.as_str(), password_hash)?)
    }

    fn parse_and_validate(&self, token: &str) -> Result<TokenPayload, CredentialError> {
        Ok(TokenCodec::parse_and_validate(self, token)?.into())
    }
}
