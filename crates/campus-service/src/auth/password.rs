//! The shared sign-in secret, kept only as an Argon2id PHC string.

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::{ServiceError, ServiceResult};

#[derive(Clone)]
pub struct SharedSecret {
    phc: String,
}

impl SharedSecret {
    /// ## Summary
    /// Salts and hashes `plain`.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` if Argon2 rejects the input.
    pub fn hash(plain: &str) -> ServiceResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| ServiceError::InvalidConfiguration(format!("Failed to hash secret: {e}")))?
            .to_string();
        Ok(Self { phc })
    }

    /// ## Summary
    /// Wraps an existing PHC string after checking that it parses.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` for a malformed hash.
    pub fn from_phc(phc: impl Into<String>) -> ServiceResult<Self> {
        let phc = phc.into();
        PasswordHash::new(&phc)
            .map_err(|e| ServiceError::InvalidConfiguration(format!("Invalid secret hash: {e}")))?;
        Ok(Self { phc })
    }

    /// ## Errors
    /// Returns `InvalidPassword` when `attempt` does not match.
    pub fn verify(&self, attempt: &str) -> ServiceResult<()> {
        let parsed = PasswordHash::new(&self.phc)
            .map_err(|e| ServiceError::InvalidConfiguration(format!("Invalid secret hash: {e}")))?;
        Argon2::default()
            .verify_password(attempt.as_bytes(), &parsed)
            .map_err(|err| {
                tracing::trace!(%err, "Sign-in secret rejected");
                ServiceError::InvalidPassword
            })
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_password_verifies() {
        let secret = SharedSecret::hash("demo123").unwrap();
        assert!(secret.verify("demo123").is_ok());
        assert!(matches!(
            secret.verify("Demo123"),
            Err(ServiceError::InvalidPassword)
        ));
    }

    #[test]
    fn rehashing_round_trips_through_phc() {
        let first = SharedSecret::hash("demo123").unwrap();
        let second = SharedSecret::hash("demo123").unwrap();
        assert_ne!(first.phc, second.phc);

        let restored = SharedSecret::from_phc(first.phc.clone()).unwrap();
        assert!(restored.verify("demo123").is_ok());
    }

    #[test]
    fn malformed_phc_is_a_configuration_error() {
        assert!(matches!(
            SharedSecret::from_phc("demo123"),
            Err(ServiceError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn debug_hides_the_hash() {
        let secret = SharedSecret::hash("demo123").unwrap();
        assert_eq!(format!("{secret:?}"), "SharedSecret(..)");
    }
}
