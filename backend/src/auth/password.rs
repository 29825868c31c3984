//! Password hashing using bcrypt
//!
//! Provides salted one-way hashing and verification with a configurable
//! work factor.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. The `_async` variants run the
//! work on the blocking thread pool so request dispatch is never held up
//! by a hash.

use anyhow::Result;

/// Password hashing service
///
/// Holds the bcrypt work factor from configuration. Construct once at
/// startup (the cost has already been range-checked by
/// `AppConfig::validate`) and share via `AppState`.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password (blocking operation)
    ///
    /// Salt generation is random per call, so equal plaintexts produce
    /// different hashes.
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on the blocking thread pool.
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// A malformed stored hash is treated as a failed match, never an
    /// error.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(&self, password: String, hash: String) -> Result<bool> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the test suite fast.
    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = test_hasher();
        let password = "secure_password_123";
        let hash = hasher.hash(password).unwrap();

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let hasher = test_hasher();
        let password = "test_password";
        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(hasher.verify(password, &hash1));
        assert!(hasher.verify(password, &hash2));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        let hasher = test_hasher();
        assert!(!hasher.verify("anything", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("anything", ""));
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let hasher = test_hasher();
        let password = "async_test_password".to_string();
        let hash = hasher.hash_async(password.clone()).await.unwrap();

        assert!(hasher
            .verify_async(password.clone(), hash.clone())
            .await
            .unwrap());
        assert!(!hasher
            .verify_async("wrong".to_string(), hash)
            .await
            .unwrap());
    }
}
