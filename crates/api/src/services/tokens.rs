//! Session token issuance and validation.
//!
//! Tokens are stateless signed JWTs embedding the user id, email, and admin
//! flag. Nothing is revoked server-side; a password change does not
//! invalidate previously issued tokens.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use solelab_core::{Email, UserId};

use super::auth::AuthError;
use crate::models::User;

/// Claims embedded in a session token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id, canonical hyphenated UUID.
    sub: String,
    /// User email at issue time.
    email: String,
    /// Admin flag at issue time.
    #[serde(rename = "isAdmin")]
    is_admin: bool,
    /// Issued-at, Unix seconds.
    iat: i64,
    /// Expiry, Unix seconds.
    exp: i64,
}

/// The decoded result of a valid session token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: UserId,
    pub email: Email,
    pub is_admin: bool,
}

/// Issues and validates session tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a token service from the signing secret and token lifetime.
    #[must_use]
    pub fn new(secret: &SecretString, ttl_secs: i64) -> Self {
        let secret = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Issue a signed token for the given user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenInvalid` if signing fails.
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.as_str().to_owned(),
            is_admin: user.is_admin,
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| AuthError::TokenInvalid)
    }

    /// Validate a token and decode the identity it carries.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExpired` for an expired token and
    /// `AuthError::TokenInvalid` for anything else that fails validation.
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(
            |err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            },
        )?;

        let user_id = data
            .claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::TokenInvalid)?;
        let email = Email::parse(&data.claims.email).map_err(|_| AuthError::TokenInvalid)?;

        Ok(Identity {
            user_id,
            email,
            is_admin: data.claims.is_admin,
        })
    }
}
