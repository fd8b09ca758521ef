//! Mock sign-in session backed by a key-value store.
//!
//! A session is "authenticated" while both the `user` record and the
//! `auth_token` entry are present in the store. There is no expiry, no
//! signature and no server round-trip.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use campus_core::{
    config::{AuthConfig, Settings},
    constants::{TOKEN_PREFIX, TOKEN_STORAGE_KEY, USER_STORAGE_KEY},
    types::Role,
};
use serde::Serialize;

use super::directory::AccountDirectory;
use super::store::{FileStore, KeyValueStore, MemoryStore};
use crate::catalog::User;
use crate::error::ServiceResult;

/// The signed-in user and their synthetic token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Sign-in, sign-out and session lookup over a [`KeyValueStore`].
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    directory: AccountDirectory,
    login_delay: Duration,
    logout_delay: Duration,
}

impl AuthService {
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        directory: AccountDirectory,
        config: &AuthConfig,
    ) -> Self {
        Self {
            store,
            directory,
            login_delay: Duration::from_millis(config.login_delay_ms),
            logout_delay: Duration::from_millis(config.logout_delay_ms),
        }
    }

    /// ## Summary
    /// Builds the service from settings: a file store when `storage.path` is
    /// set, otherwise an in-memory store, with the demo account directory.
    ///
    /// ## Errors
    /// Returns an error if the account directory cannot be built.
    pub fn from_settings(settings: &Settings) -> ServiceResult<Self> {
        let store: Arc<dyn KeyValueStore> = match &settings.storage.path {
            Some(path) => {
                tracing::info!(path = %path, "Using file-backed session store");
                Arc::new(FileStore::new(PathBuf::from(path)))
            }
            None => {
                tracing::info!("Using in-memory session store");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::new(store, AccountDirectory::demo()?, &settings.auth))
    }

    #[must_use]
    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// ## Summary
    /// Signs in after the simulated latency. On success the user record and a
    /// fresh token are written to the store, replacing any earlier session.
    ///
    /// ## Errors
    /// Returns `UserNotFound`, `RoleMismatch` or `InvalidPassword` for rejected
    /// credentials, or a storage error if the session cannot be written.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str, role: Role) -> ServiceResult<Session> {
        tokio::time::sleep(self.login_delay).await;

        let user = match self.directory.check(email, password, role) {
            Ok(user) => user.clone(),
            Err(err) => {
                tracing::warn!(error = %err, "Login rejected");
                return Err(err);
            }
        };

        let token = format!(
            "{TOKEN_PREFIX}-{}-{}",
            user.id,
            chrono::Utc::now().timestamp_millis()
        );
        self.store
            .set(USER_STORAGE_KEY, &serde_json::to_string(&user)?)?;
        self.store.set(TOKEN_STORAGE_KEY, &token)?;

        tracing::info!(user_id = %user.id, role = %user.role, "User signed in");
        Ok(Session { user, token })
    }

    /// ## Summary
    /// Signs out after the simulated latency, clearing both session entries.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be written.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> ServiceResult<()> {
        tokio::time::sleep(self.logout_delay).await;
        self.clear()?;
        tracing::info!("User signed out");
        Ok(())
    }

    /// ## Summary
    /// Removes both session entries immediately.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be written.
    pub fn clear(&self) -> ServiceResult<()> {
        self.store.remove(TOKEN_STORAGE_KEY)?;
        self.store.remove(USER_STORAGE_KEY)?;
        Ok(())
    }

    /// ## Summary
    /// Reads the persisted session. A `user` entry that does not parse is
    /// treated as signed out: both entries are cleared and `None` is returned.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read or cleared.
    pub fn session(&self) -> ServiceResult<Option<Session>> {
        let Some(token) = self.store.get(TOKEN_STORAGE_KEY)? else {
            return Ok(None);
        };
        let Some(raw_user) = self.store.get(USER_STORAGE_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Ok(Some(Session { user, token })),
            Err(err) => {
                tracing::warn!(error = %err, "Discarding unreadable persisted user");
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// ## Summary
    /// `true` while a readable session is persisted.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read.
    pub fn is_authenticated(&self) -> ServiceResult<bool> {
        Ok(self.session()?.is_some())
    }

    /// ## Summary
    /// The signed-in user, if any.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read.
    pub fn current_user(&self) -> ServiceResult<Option<User>> {
        Ok(self.session()?.map(|session| session.user))
    }

    /// ## Summary
    /// The persisted token, if any, whether or not a user record accompanies it.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read.
    pub fn token(&self) -> ServiceResult<Option<String>> {
        self.store.get(TOKEN_STORAGE_KEY)
    }

    /// ## Summary
    /// Returns the current token, or mints and stores a user-less one when none exists.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read or written.
    #[tracing::instrument(skip(self))]
    pub fn refresh_token(&self) -> ServiceResult<String> {
        if let Some(token) = self.token()? {
            return Ok(token);
        }
        let token = format!("{TOKEN_PREFIX}-{}", chrono::Utc::now().timestamp_millis());
        self.store.set(TOKEN_STORAGE_KEY, &token)?;
        tracing::debug!("Minted token without a session");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    fn instant() -> AuthConfig {
        AuthConfig {
            login_delay_ms: 0,
            logout_delay_ms: 0,
        }
    }

    fn service_with(store: Arc<dyn KeyValueStore>) -> AuthService {
        AuthService::new(store, AccountDirectory::demo().unwrap(), &instant())
    }

    #[test_log::test(tokio::test)]
    async fn admin_login_persists_user_and_token() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone());

        let session = service
            .login("admin@demo.com", "demo123", Role::Admin)
            .await
            .unwrap();

        assert_eq!(session.user.role, Role::Admin);
        assert!(session.token.starts_with("demo-token-3-"));
        assert!(store.get(USER_STORAGE_KEY).unwrap().is_some());
        assert_eq!(
            store.get(TOKEN_STORAGE_KEY).unwrap(),
            Some(session.token.clone())
        );
        assert!(service.is_authenticated().unwrap());
        assert_eq!(service.current_user().unwrap(), Some(session.user));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_without_persisting() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone());

        let err = service
            .login("admin@demo.com", "wrong", Role::Admin)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidPassword));
        assert_eq!(err.to_string(), "Invalid password");
        assert!(store.get(USER_STORAGE_KEY).unwrap().is_none());
        assert!(!service.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn role_mismatch_is_rejected() {
        let service = service_with(Arc::new(MemoryStore::new()));

        let err = service
            .login("admin@demo.com", "demo123", Role::Student)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::RoleMismatch {
                expected: Role::Admin
            }
        ));
        assert!(err.is_credential_error());
    }

    #[tokio::test]
    async fn logout_clears_both_keys() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone());

        service
            .login("student@demo.com", "demo123", Role::Student)
            .await
            .unwrap();
        service.logout().await.unwrap();

        assert!(store.get(USER_STORAGE_KEY).unwrap().is_none());
        assert!(store.get(TOKEN_STORAGE_KEY).unwrap().is_none());
        assert!(!service.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn second_login_replaces_session() {
        let service = service_with(Arc::new(MemoryStore::new()));

        service
            .login("student@demo.com", "demo123", Role::Student)
            .await
            .unwrap();
        service
            .login("teacher@demo.com", "demo123", Role::Teacher)
            .await
            .unwrap();

        let user = service.current_user().unwrap().unwrap();
        assert_eq!(user.email, "teacher@demo.com");
    }

    #[test]
    fn corrupted_user_record_reads_as_signed_out() {
        let store = Arc::new(MemoryStore::new());
        store.set(USER_STORAGE_KEY, "{not json").unwrap();
        store.set(TOKEN_STORAGE_KEY, "demo-token-1-0").unwrap();
        let service = service_with(store.clone());

        assert!(!service.is_authenticated().unwrap());
        assert!(store.get(TOKEN_STORAGE_KEY).unwrap().is_none());
        assert!(store.get(USER_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn refresh_token_keeps_existing_or_mints() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone());

        let minted = service.refresh_token().unwrap();
        assert!(minted.starts_with("demo-token-"));
        assert_eq!(service.refresh_token().unwrap(), minted);
        // A bare token is not a session.
        assert!(!service.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn session_survives_a_new_service_over_the_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let first = service_with(Arc::new(FileStore::new(&path)));
        first
            .login("teacher@demo.com", "demo123", Role::Teacher)
            .await
            .unwrap();

        let second = service_with(Arc::new(FileStore::new(&path)));
        let user = second.current_user().unwrap().unwrap();
        assert_eq!(user.role, Role::Teacher);
        assert_eq!(user.department.as_deref(), Some("Computer Science"));
    }

    #[test_log::test(tokio::test)]
    async fn truncated_session_file_reads_as_signed_out_and_allows_login() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"user": "{\"id\":"#).unwrap();
        let service = service_with(Arc::new(FileStore::new(&path)));

        assert!(matches!(service.is_authenticated(), Ok(false)));
        assert!(service.refresh_token().unwrap().starts_with("demo-token-"));

        service
            .login("student@demo.com", "demo123", Role::Student)
            .await
            .unwrap();
        assert!(service.is_authenticated().unwrap());
    }
}
