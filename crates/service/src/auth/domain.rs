use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::validation::{self, RequestError};

/// Sign-up body. The login id travels as `user` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpInput {
    #[serde(rename = "user")]
    pub account: String,
    pub password: String,
    pub phone_number: String,
    pub seller_attribute_id: i32,
    pub name: String,
    pub eng_name: String,
    pub service_number: String,
    pub site_url: String,
}

impl SignUpInput {
    /// Structural check (`KEY_ERROR` / `TYPE_ERROR`) then decode.
    pub fn from_json(body: Value) -> Result<Self, RequestError> {
        validation::SIGN_UP.check(&body)?;
        serde_json::from_value(body).map_err(|_| RequestError::WrongType("seller_attribute_id".into()))
    }

    /// Field format rules, reported in body order.
    pub fn validate(&self) -> Result<(), RequestError> {
        validation::validate_account(&self.account)?;
        validation::validate_password(&self.password)?;
        validation::validate_phone_number(&self.phone_number)?;
        validation::validate_seller_attribute(self.seller_attribute_id)?;
        validation::validate_seller_name(&self.name)?;
        validation::validate_eng_name(&self.eng_name)?;
        validation::validate_service_number(&self.service_number)?;
        validation::validate_site_url(&self.site_url)?;
        Ok(())
    }
}

/// Sign-in body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInInput {
    #[serde(rename = "user")]
    pub account: String,
    pub password: String,
}

impl SignInInput {
    pub fn from_json(body: Value) -> Result<Self, RequestError> {
        validation::SIGN_IN.check(&body)?;
        serde_json::from_value(body).map_err(|_| RequestError::Malformed)
    }
}

/// Authenticated seller identity, as stored and as carried in tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSeller {
    pub id: Uuid,
    pub account: String,
    pub is_master: bool,
}

/// Seller credentials (hashed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub seller_id: Uuid,
    pub password_hash: String,
    pub password_algorithm: String,
}

/// Sign-in result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub seller: AuthSeller,
    pub access_token: String,
}
