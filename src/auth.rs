// ABOUTME: Token issuance and validation plus bcrypt password hashing
// ABOUTME: HS256 tokens carry the username and admin flag; bad tokens mean an anonymous caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication
//!
//! Callers present `Authorization: Bearer <token>`. A missing, malformed,
//! expired, or forged token does not fail the request by itself: the caller
//! is treated as anonymous and the route's guard decides.

use crate::errors::{AppError, AppResult};
use crate::models::User;
use chrono::{DateTime, Duration, Utc};
use http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// `JWT` validation error with detailed information
#[derive(Debug, Clone, thiserror::Error)]
pub enum JwtValidationError {
    /// Token has expired
    #[error("JWT token expired at {}", expired_at.to_rfc3339())]
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
    },
    /// Token signature or claims are invalid
    #[error("JWT token is invalid: {reason}")]
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is not a well-formed `JWT`
    #[error("JWT token is malformed: {details}")]
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

/// `JWT` claims identifying a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Username of the token holder
    pub username: String,
    /// Whether the holder had admin rights when the token was issued
    pub is_admin: bool,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Issues and validates HS256 tokens
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a manager signing with `secret`
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
        }
    }

    /// Generate a token for `user`
    ///
    /// # Errors
    ///
    /// Returns an internal error if the expiry is out of range or encoding fails.
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiry = Duration::try_hours(self.token_expiry_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Token lifetime of {}h is out of range",
                    self.token_expiry_hours
                ))
            })?;

        let claims = Claims {
            username: user.username.clone(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] if the token is malformed, carries a
    /// bad signature, or has expired.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below without leeway
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| Self::convert_jwt_error(&e))?
            .claims;

        let now = Utc::now();
        if now.timestamp() >= claims.exp {
            let expired_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or(now);
            warn!(
                "JWT token expired for user: {} at {}",
                claims.username,
                expired_at.to_rfc3339()
            );
            return Err(JwtValidationError::TokenExpired { expired_at });
        }

        Ok(claims)
    }

    /// Claims from a valid bearer token in `headers`, or `None` for an anonymous caller
    #[must_use]
    pub fn authenticate(&self, headers: &HeaderMap) -> Option<Claims> {
        let header = headers.get("authorization")?.to_str().ok()?;
        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))?
            .trim();

        match self.validate_token(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!("Treating caller as anonymous: {e}");
                None
            }
        }
    }

    /// Convert JWT library errors to detailed validation errors
    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> JwtValidationError {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            ErrorKind::InvalidToken => JwtValidationError::TokenMalformed {
                details: "Token format is invalid".into(),
            },
            ErrorKind::Base64(base64_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid base64: {base64_err}"),
            },
            ErrorKind::Json(json_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid JSON: {json_err}"),
            },
            ErrorKind::Utf8(utf8_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid UTF-8: {utf8_err}"),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {e}"),
            },
        }
    }
}

/// Hash a password with bcrypt on the blocking pool
///
/// # Errors
///
/// Returns an internal error if hashing fails or the blocking task panics.
pub async fn hash_password(password: String, cost: u32) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a bcrypt hash on the blocking pool
///
/// A hash that bcrypt cannot parse counts as a mismatch.
///
/// # Errors
///
/// Returns an internal error if the blocking task panics.
pub async fn verify_password(password: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use http::HeaderValue;

    fn user(is_admin: bool) -> User {
        User {
            username: "u1".to_owned(),
            first_name: "U1F".to_owned(),
            last_name: "U1L".to_owned(),
            email: "user1@user.com".to_owned(),
            is_admin,
        }
    }

    #[test]
    fn test_token_round_trip_carries_admin_flag() {
        let manager = AuthManager::new(b"secret", 24);

        let token = manager.generate_token(&user(true)).unwrap();
        let claims = manager.validate_token(&token).unwrap();

        assert_eq!(claims.username, "u1");
        assert!(claims.is_admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let manager = AuthManager::new(b"secret", 3_000_000_000);

        let err = manager.generate_token(&user(false)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = AuthManager::new(b"secret", 24)
            .generate_token(&user(false))
            .unwrap();

        let err = AuthManager::new(b"other", 24)
            .validate_token(&token)
            .unwrap_err();

        assert!(matches!(err, JwtValidationError::TokenInvalid { .. }));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let manager = AuthManager::new(b"secret", -1);
        let token = manager.generate_token(&user(false)).unwrap();

        let err = manager.validate_token(&token).unwrap_err();

        assert!(matches!(err, JwtValidationError::TokenExpired { .. }));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let err = AuthManager::new(b"secret", 24)
            .validate_token("not-a-token")
            .unwrap_err();

        assert!(matches!(err, JwtValidationError::TokenMalformed { .. }));
    }

    #[test]
    fn test_authenticate_headers() {
        let manager = AuthManager::new(b"secret", 24);
        let token = manager.generate_token(&user(false)).unwrap();

        let mut headers = HeaderMap::new();
        assert!(manager.authenticate(&headers).is_none());

        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        assert_eq!(manager.authenticate(&headers).unwrap().username, "u1");

        headers.insert("authorization", HeaderValue::from_static("Bearer nope"));
        assert!(manager.authenticate(&headers).is_none());
    }

    #[tokio::test]
    async fn test_password_hash_and_verify() {
        let hash = hash_password("password1".to_owned(), 4).await.unwrap();

        assert!(verify_password("password1".to_owned(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password("wrong".to_owned(), hash).await.unwrap());
        assert!(!verify_password("password1".to_owned(), "not-a-hash".to_owned())
            .await
            .unwrap());
    }
}
