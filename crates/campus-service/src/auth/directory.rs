//! The fixed table of sign-in accounts.

use campus_core::{constants::DEMO_PASSWORD, types::Role};

use super::password::SharedSecret;
use crate::catalog::{User, fixtures::demo_accounts};
use crate::error::{ServiceError, ServiceResult};

/// Accounts that may sign in, all sharing one password.
pub struct AccountDirectory {
    accounts: Vec<User>,
    secret: SharedSecret,
}

impl AccountDirectory {
    /// ## Summary
    /// The three demo accounts with the shared demo password.
    ///
    /// ## Errors
    /// Returns an error if hashing the demo password fails.
    pub fn demo() -> ServiceResult<Self> {
        Self::with_accounts(demo_accounts(), DEMO_PASSWORD)
    }

    /// ## Summary
    /// Builds a directory from `accounts`, hashing `password` once for all of them.
    ///
    /// ## Errors
    /// Returns an error if hashing the password fails.
    pub fn with_accounts(accounts: Vec<User>, password: &str) -> ServiceResult<Self> {
        let secret = SharedSecret::hash(password)?;
        tracing::debug!(accounts = accounts.len(), "Account directory loaded");
        Ok(Self {
            accounts,
            secret,
        })
    }

    #[must_use]
    pub fn find(&self, email: &str) -> Option<&User> {
        self.accounts.iter().find(|user| user.email == email)
    }

    #[must_use]
    pub fn accounts(&self) -> &[User] {
        &self.accounts
    }

    /// ## Summary
    /// Checks a sign-in attempt: the email must exist, the role must match the
    /// account exactly, and the password must be the shared one, in that order.
    ///
    /// ## Errors
    /// Returns `UserNotFound`, `RoleMismatch` or `InvalidPassword`.
    pub fn check(&self, email: &str, password: &str, role: Role) -> ServiceResult<&User> {
        let user = self.find(email).ok_or(ServiceError::UserNotFound)?;

        if user.role != role {
            return Err(ServiceError::RoleMismatch {
                expected: user.role,
            });
        }

        self.secret.verify(password)?;
        Ok(user)
    }
}
