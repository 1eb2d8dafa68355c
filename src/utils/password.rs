use crate::error::AppResult;
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, PasswordVerifier, phc::PasswordHash},
};

/// Hash a password using Argon2id, producing a PHC-format string.
pub fn hash_password(password: &str) -> AppResult<String> {
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes())?.to_string();
    Ok(password_hash)
}

/// Verify a plain text password against a stored PHC hash.
pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)?;
    let argon2 = Argon2::default();
    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_produces_phc_string() {
        let hash = hash_password("secret1").expect("Failed to hash password");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_password_rejects_malformed_hash() {
        let result = verify_password("secret1", "not-a-phc-hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_password_round_trip() {
        let hash = hash_password("secret1").expect("Failed to hash password");
        assert!(verify_password("secret1", &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let hash1 = hash_password("secret1").expect("Failed to hash password");
        let hash2 = hash_password("secret1").expect("Failed to hash password");

        // Different salts should produce different hashes
        assert_ne!(hash1, hash2);
        assert!(verify_password("secret1", &hash1).unwrap());
        assert!(verify_password("secret1", &hash2).unwrap());
    }
}
