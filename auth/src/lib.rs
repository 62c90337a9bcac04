//! Credential primitives library
//!
//! Provides the building blocks for issuing and checking identity credentials:
//! - Random password generation
//! - Password hashing (bcrypt)
//! - Signed access tokens (HS256 JWT) with fixed 24 hour expiry
//!
//! Services define their own ports and adapt these implementations to them.
//!
//! # Examples
//!
//! ## Password Generation and Hashing
//! ```
//! use auth::{PasswordGenerator, PasswordHasher};
//!
//! let password = PasswordGenerator::new().generate(6);
//! assert_eq!(password.len(), 6);
//!
//! let hasher = PasswordHasher::with_cost(4);
//! let hash = hasher.hash(&password).unwrap();
//! assert!(hasher.verify(&password, &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenCodec;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("1234567890123456", "$2b$14$stored_hash").unwrap();
//! let claims = codec.parse_and_validate(&token).unwrap();
//! assert_eq!(claims.nik, "1234567890123456");
//! assert_eq!(claims.password_hash, "$2b$14$stored_hash");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::TokenClaims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordGenerator;
pub use password::PasswordHasher;
