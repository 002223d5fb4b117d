//! Credential verification for the login endpoint.
//!
//! Passwords are compared against the stored bcrypt hash. bcrypt is
//! deliberately slow, so the comparison runs on the blocking thread pool
//! instead of stalling the async reactor.

use tokio::task;

use crate::error::ApiError;

/// Compare a submitted password against a stored bcrypt hash.
///
/// Returns `Ok(false)` for a mismatch; a hash that cannot be parsed is an
/// error (the stored value is corrupt, not the caller's fault).
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, ApiError> {
    let valid = task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;
    Ok(valid)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the hashing fast enough for tests.
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_correct_password_verifies() {
        let hash = bcrypt::hash("open sesame", TEST_COST).unwrap();
        let valid = verify_password("open sesame".to_string(), hash).await.unwrap();
        assert!(valid);
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let hash = bcrypt::hash("open sesame", TEST_COST).unwrap();
        let valid = verify_password("open says me".to_string(), hash)
            .await
            .unwrap();
        assert!(!valid);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let result = verify_password("anything".to_string(), "not-a-bcrypt-hash".to_string()).await;
        assert!(matches!(result, Err(ApiError::Hash(_))));
    }
}
