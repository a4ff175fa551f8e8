//! Authentication service.
//!
//! Handles registration, login, password changes, and startup admin
//! seeding. Passwords are hashed with Argon2id; sessions are stateless
//! tokens issued by [`super::tokens::TokenService`].

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

use solelab_core::{Email, EmailError, UserId};

use super::tokens::TokenService;
use crate::config::AdminSeed;
use crate::db::{StoreError, UserStore};
use crate::models::User;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors surfaced by authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Wrong email/password combination.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration against an email that already has an account.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Email failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Name was empty after trimming.
    #[error("name is required")]
    InvalidName,

    /// Password failed the strength requirements.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// No user behind an authenticated identity.
    #[error("user not found")]
    UserNotFound,

    /// No bearer token on the request.
    #[error("no token provided")]
    TokenMissing,

    /// Token was valid once but its expiry has passed.
    #[error("token expired")]
    TokenExpired,

    /// Token failed signature or structural validation.
    #[error("token invalid")]
    TokenInvalid,

    /// Hashing backend failure.
    #[error("password hashing failed")]
    PasswordHash,

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Authentication service.
pub struct AuthService<'a> {
    users: &'a UserStore,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a UserStore, tokens: &'a TokenService) -> Self {
        Self { users, tokens }
    }

    /// Register a new user.
    ///
    /// New users are never admins; elevation happens only through
    /// [`Self::ensure_admin`].
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidName` / `InvalidEmail` / `WeakPassword` on
    /// malformed input and `AuthError::UserAlreadyExists` if the email is
    /// taken (case-insensitively).
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::InvalidName);
        }

        let email = Email::parse(email)?;
        validate_password(password)?;

        let password_hash = hash_password(password)?;
        let user = User::new(name.to_owned(), email, password_hash);

        self.users.insert(user).await.map_err(|e| match e {
            StoreError::Conflict(_) => AuthError::UserAlreadyExists,
            other => AuthError::Store(other),
        })
    }

    /// Login with email and password, returning the user and a session
    /// token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or
    /// the password does not match; the two cases are indistinguishable to
    /// the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        let token = self.tokens.issue(&user)?;
        Ok((user, token))
    }

    /// Change the password of an authenticated user.
    ///
    /// Previously issued tokens stay valid: sessions are stateless and are
    /// not revoked.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the old password does not
    /// match and `AuthError::WeakPassword` if the new one is too short.
    pub async fn change_password(
        &self,
        user_id: UserId,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let mut user = self.users.get(user_id).await.ok_or(AuthError::UserNotFound)?;

        verify_password(old_password, &user.password_hash)?;
        validate_password(new_password)?;

        user.password_hash = hash_password(new_password)?;
        self.users.update(user).await?;

        Ok(())
    }

    /// Seed the configured admin user if its email is not yet registered.
    ///
    /// Idempotent: a second run with the same seed leaves the store
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` / `WeakPassword` for a malformed
    /// seed.
    pub async fn ensure_admin(&self, seed: &AdminSeed) -> Result<(), AuthError> {
        let email = Email::parse(&seed.email)?;

        if self.users.find_by_email(&email).await.is_some() {
            tracing::info!(email = %email, "admin user already present");
            return Ok(());
        }

        let password = seed.password.expose_secret();
        validate_password(password)?;

        let mut user = User::new("Admin".to_owned(), email.clone(), hash_password(password)?);
        user.is_admin = true;

        self.users.insert(user).await.map_err(|e| match e {
            // Lost a race against a concurrent registration; the account exists.
            StoreError::Conflict(_) => AuthError::UserAlreadyExists,
            other => AuthError::Store(other),
        })?;

        tracing::info!(email = %email, "admin user created");
        Ok(())
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
