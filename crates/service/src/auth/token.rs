use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain::AuthSeller;
use super::errors::AuthError;

/// JWT claims issued at sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// seller account
    pub sub: String,
    /// seller id
    pub uid: Uuid,
    pub master: bool,
    pub iat: i64,
    pub exp: i64,
}

impl From<Claims> for AuthSeller {
    fn from(c: Claims) -> Self {
        AuthSeller { id: c.uid, account: c.sub, is_master: c.master }
    }
}

/// HS256 signer/verifier sharing one secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn issue(&self, seller: &AuthSeller) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: seller.account.clone(),
            uid: seller.id,
            master: seller.is_master,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Signature and expiry are both checked.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> AuthSeller {
        AuthSeller { id: Uuid::new_v4(), account: "seller01".into(), is_master: true }
    }

    #[test]
    fn issued_token_verifies() {
        let keys = TokenKeys::new("secret", Duration::hours(1));
        let s = seller();
        let token = keys.issue(&s).unwrap();
        let back: AuthSeller = keys.verify(&token).unwrap().into();
        assert_eq!(back, s);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = TokenKeys::new("secret", Duration::hours(1)).issue(&seller()).unwrap();
        let other = TokenKeys::new("other", Duration::hours(1));
        assert!(matches!(other.verify(&token), Err(AuthError::TokenError(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        // past the default 60s leeway
        let keys = TokenKeys::new("secret", Duration::minutes(-5));
        let token = keys.issue(&seller()).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let keys = TokenKeys::new("secret", Duration::hours(1));
        assert!(keys.verify("not-a-jwt").is_err());
    }
}
