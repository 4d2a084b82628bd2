//! Bearer token issuance and verification (HS256 JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    /// Unique token id.
    pub jti: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Signs and verifies access tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a token for `subject` that expires after `ttl`.
    pub fn issue_token(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: format!("{:032x}", rand::random::<u128>()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verifies the signature and expiry of a token and returns its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let signer = TokenSigner::new("test-secret");
        let token = signer.issue_token("carlos", Duration::minutes(30)).unwrap();

        let claims = signer.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "carlos");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
        assert_eq!(claims.jti.len(), 32);
    }

    #[test]
    fn test_tokens_are_unique() {
        let signer = TokenSigner::new("test-secret");
        let a = signer.issue_token("carlos", Duration::minutes(5)).unwrap();
        let b = signer.issue_token("carlos", Duration::minutes(5)).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = TokenSigner::new("test-secret");
        let token = signer.issue_token("carlos", Duration::minutes(-10)).unwrap();

        assert!(matches!(signer.verify_token(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenSigner::new("secret-a")
            .issue_token("carlos", Duration::minutes(5))
            .unwrap();

        assert!(matches!(
            TokenSigner::new("secret-b").verify_token(&token),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        let signer = TokenSigner::new("test-secret");
        assert!(signer.verify_token("not.a.jwt").is_err());
    }
}
