use super::errors::PasswordError;

/// Work factor used for every stored password hash.
pub const DEFAULT_COST: u32 = 14;

/// Password hashing implementation.
///
/// Provides salted, adaptive password hashing (internally uses bcrypt).
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher instance configured with the fixed production cost
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// Only tests should lower the cost; production wiring goes through `new`.
    ///
    /// # Arguments
    /// * `cost` - bcrypt cost (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor applied by `hash`.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password securely.
    ///
    /// A fresh random salt is generated on every call, so hashing the same
    /// password twice yields two different strings.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt string (`$2b$<cost>$<salt><hash>`)
    ///
    /// # Errors
    /// * `HashingFailed` - Cost out of range or hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Salt and cost are read from the stored string, so hashes produced
    /// with `$2a$`, `$2b$` or `$2y$` prefixes all verify.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in modular crypt format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::with_cost(TEST_COST);
        let password = "my_secure_password";

        // Hash the password
        let hash = hasher.hash(password).expect("Failed to hash password");

        // Verify correct password
        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        // Verify incorrect password
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::with_cost(TEST_COST);

        let first = hasher.hash("mockpass").expect("Failed to hash password");
        let second = hasher.hash("mockpass").expect("Failed to hash password");

        assert_ne!(first, second);
        assert_ne!(first, "mockpass");
        assert!(hasher.verify("mockpass", &first).unwrap());
        assert!(hasher.verify("mockpass", &second).unwrap());
    }

    #[test]
    fn test_hash_embeds_cost() {
        let hasher = PasswordHasher::with_cost(5);
        let hash = hasher.hash("abc123").expect("Failed to hash password");
        assert!(hash.starts_with("$2b$05$"));
    }

    #[test]
    fn test_verify_uses_cost_from_hash() {
        let hash = PasswordHasher::with_cost(TEST_COST)
            .hash("abc123")
            .expect("Failed to hash password");

        // A hasher configured with another cost still verifies the stored hash
        assert!(PasswordHasher::new().verify("abc123", &hash).unwrap());
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(PasswordHasher::new().cost(), 14);
        assert_eq!(PasswordHasher::default().cost(), DEFAULT_COST);
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::with_cost(TEST_COST);
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_hash_rejects_out_of_range_cost() {
        let hasher = PasswordHasher::with_cost(2);
        assert!(matches!(
            hasher.hash("password"),
            Err(PasswordError::HashingFailed(_))
        ));
    }
}
