use rand::Rng;

/// Symbols a generated password may contain.
pub const PASSWORD_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random password generator.
///
/// Each character is drawn independently and uniformly from `PASSWORD_CHARSET`
/// using the thread-local RNG, which is seeded from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a password of exactly `length` characters.
    ///
    /// A zero length yields an empty string.
    pub fn generate(&self, length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| PASSWORD_CHARSET[rng.gen_range(0..PASSWORD_CHARSET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generate_length() {
        let generator = PasswordGenerator::new();
        for length in [1, 6, 16, 64] {
            assert_eq!(generator.generate(length).chars().count(), length);
        }
    }

    #[test]
    fn test_generate_zero_length() {
        assert_eq!(PasswordGenerator::new().generate(0), "");
    }

    #[test]
    fn test_generate_uses_charset_only() {
        let password = PasswordGenerator::new().generate(512);
        assert!(password.bytes().all(|b| PASSWORD_CHARSET.contains(&b)));
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_charset_has_62_distinct_symbols() {
        let distinct: HashSet<_> = PASSWORD_CHARSET.iter().collect();
        assert_eq!(distinct.len(), 62);
    }

    #[test]
    fn test_generate_does_not_repeat() {
        let generator = PasswordGenerator::new();
        let passwords: HashSet<String> = (0..100).map(|_| generator.generate(16)).collect();
        assert_eq!(passwords.len(), 100);
    }
}
