//! User store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use solelab_core::{Email, UserId};

use super::StoreError;
use crate::models::User;

/// Store for registered users.
///
/// Enforces the email uniqueness invariant: emails are normalized to
/// lowercase by [`Email::parse`], so equality here is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<HashMap<UserId, User>>>,
}

impl UserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if a user with the same email already
    /// exists.
    pub async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.inner.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("email already exists".to_owned()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    /// Get a user by id.
    pub async fn get(&self, id: UserId) -> Option<User> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Get a user by email.
    pub async fn find_by_email(&self, email: &Email) -> Option<User> {
        self.inner
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned()
    }

    /// Replace an existing user document, stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the user does not exist.
    pub async fn update(&self, mut user: User) -> Result<User, StoreError> {
        let mut users = self.inner.write().await;

        if !users.contains_key(&user.id) {
            return Err(StoreError::NotFound);
        }

        user.updated_at = chrono::Utc::now();
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new(
            "Test".to_owned(),
            Email::parse(email).unwrap(),
            "hash".to_owned(),
        )
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = UserStore::new();
        let inserted = store.insert(user("a@example.com")).await.unwrap();
        let fetched = store.get(inserted.id).await.unwrap();
        assert_eq!(fetched.email.as_str(), "a@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = UserStore::new();
        store.insert(user("a@example.com")).await.unwrap();

        let err = store.insert(user("a@example.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_case_insensitive() {
        let store = UserStore::new();
        store.insert(user("a@example.com")).await.unwrap();

        // Email::parse lowercases, so a re-registration with different
        // casing collides with the stored document.
        let err = store.insert(user("A@EXAMPLE.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = UserStore::new();
        let err = store.update(user("a@example.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let store = UserStore::new();
        store.insert(user("a@example.com")).await.unwrap();

        let email = Email::parse("A@example.COM").unwrap();
        assert!(store.find_by_email(&email).await.is_some());
    }
}
