use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Claims carried by member access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Member id.
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Issues and verifies HS256 bearer tokens identifying a member.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service signing with `secret`.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret shared by signing and verification
    /// - `ttl` - Lifetime added to the issue time to form `exp`
    ///
    /// # Returns
    /// - `TokenService` - Service holding the derived keys
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Signs a token whose subject is `member_id`.
    ///
    /// # Arguments
    /// - `member_id` - Member the token identifies
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token expiring `ttl` from now
    /// - `Err(AuthError::ExpiryOutOfRange)` - `ttl` pushes the expiry past the timestamp range
    /// - `Err(AuthError::TokenCreation)` - Signing failed
    pub fn issue(&self, member_id: i32) -> Result<String, AuthError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or(AuthError::ExpiryOutOfRange)?;
        let claims = Claims {
            sub: member_id.to_string(),
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp() as usize,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Validates signature and expiry, returning the member id from `sub`.
    ///
    /// # Arguments
    /// - `token` - Encoded token from the `Authorization` header
    ///
    /// # Returns
    /// - `Ok(i32)` - Member id carried by the token
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or non-numeric subject
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|e| AuthError::InvalidToken(format!("subject is not a member id: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_issued_token() {
        let tokens = TokenService::new("secret", Duration::hours(1));

        let token = tokens.issue(42).unwrap();

        assert_eq!(tokens.verify(&token).unwrap(), 42);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let issuer = TokenService::new("secret", Duration::hours(1));
        let verifier = TokenService::new("other", Duration::hours(1));

        let token = issuer.issue(42).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn refuses_lifetime_beyond_timestamp_range() {
        let tokens = TokenService::new("secret", Duration::MAX);

        assert!(matches!(tokens.issue(42), Err(AuthError::ExpiryOutOfRange)));
    }

    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new("secret", Duration::hours(-2));

        let token = tokens.issue(42).unwrap();

        assert!(matches!(
            tokens.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
