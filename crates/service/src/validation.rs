//! Request payload checks.
//!
//! Two layers: a structural [`Schema`] (keys present, JSON types right) and
//! per-field format rules for sign-up. Each failure carries the code that is
//! sent back to the client.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Sign-up fields with a dedicated validation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Password,
    PhoneNumber,
    SellerName,
    SellerEnglishName,
    ServiceNumber,
    SiteUrl,
    SellerAttribute,
}

impl Field {
    pub fn code(self) -> &'static str {
        match self {
            Field::Id => "ID_VALIDATION_ERROR",
            Field::Password => "PASSWORD_VALIDATION_ERROR",
            Field::PhoneNumber => "PHONE_NUMBER_VALIDATION_ERROR",
            Field::SellerName => "SELLER_NAME_VALIDATION_ERROR",
            Field::SellerEnglishName => "SELLER_ENGLISH_NAME_VALIDATION_ERROR",
            Field::ServiceNumber => "SERVICE_NUMBER_VALIDATION_ERROR",
            Field::SiteUrl => "SITE_URL_VALIDATION_ERROR",
            Field::SellerAttribute => "SELLER_ATTRIBUTE_VALIDATION_ERROR",
        }
    }
}

/// A rejected request payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("request body is not a JSON object")]
    Malformed,
    #[error("missing key `{0}`")]
    MissingKey(String),
    #[error("key `{0}` has the wrong type")]
    WrongType(String),
    #[error("invalid value for {}", .0.code())]
    InvalidField(Field),
    #[error("parameter validation failed: {0}")]
    Parameter(String),
}

impl RequestError {
    /// Code returned to clients.
    pub fn code(&self) -> &'static str {
        match self {
            RequestError::Malformed => "INVALID_REQUEST",
            RequestError::MissingKey(_) => "KEY_ERROR",
            RequestError::WrongType(_) => "TYPE_ERROR",
            RequestError::InvalidField(f) => f.code(),
            RequestError::Parameter(_) => "PARAMETER_VALIDATION_ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    /// `true`/`false` or `0`/`1`.
    Flag,
}

impl FieldType {
    fn accepts(self, v: &Value) -> bool {
        match self {
            FieldType::String => v.is_string(),
            FieldType::Integer => v.is_i64() || v.is_u64(),
            FieldType::Flag => v.is_boolean() || matches!(v.as_u64(), Some(0) | Some(1)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaField {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

const fn required(name: &'static str, ty: FieldType) -> SchemaField {
    SchemaField { name, ty, required: true }
}

const fn optional(name: &'static str, ty: FieldType) -> SchemaField {
    SchemaField { name, ty, required: false }
}

/// Structural contract of a JSON object body. Unknown keys are ignored.
#[derive(Debug, Clone, Copy)]
pub struct Schema(pub &'static [SchemaField]);

impl Schema {
    /// Missing or `null` required keys report [`RequestError::MissingKey`],
    /// type mismatches [`RequestError::WrongType`], in declaration order.
    pub fn check(&self, body: &Value) -> Result<(), RequestError> {
        let obj = body.as_object().ok_or(RequestError::Malformed)?;
        for field in self.0 {
            match obj.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(RequestError::MissingKey(field.name.to_string()));
                    }
                }
                Some(v) if !field.ty.accepts(v) => {
                    return Err(RequestError::WrongType(field.name.to_string()));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

pub const SIGN_UP: Schema = Schema(&[
    required("user", FieldType::String),
    required("password", FieldType::String),
    required("phone_number", FieldType::String),
    required("seller_attribute_id", FieldType::Integer),
    required("name", FieldType::String),
    required("eng_name", FieldType::String),
    required("service_number", FieldType::String),
    required("site_url", FieldType::String),
]);

pub const SIGN_IN: Schema = Schema(&[
    required("user", FieldType::String),
    required("password", FieldType::String),
]);

pub const SELLER_PROFILE: Schema = Schema(&[
    optional("profile", FieldType::String),
    optional("background_image", FieldType::String),
    required("simple_introduction", FieldType::String),
    optional("detail_introduction", FieldType::String),
    optional("site_url", FieldType::String),
    required("bank", FieldType::String),
    required("account_owner", FieldType::String),
    required("bank_account", FieldType::String),
    optional("order", FieldType::Integer),
    required("service_number", FieldType::String),
    optional("zip_code", FieldType::String),
    optional("address", FieldType::String),
    required("detail_address", FieldType::String),
    required("supervisor_name", FieldType::String),
    required("supervisor_phone_number", FieldType::String),
    required("supervisor_email", FieldType::String),
    optional("start_time", FieldType::String),
    optional("end_time", FieldType::String),
    optional("is_weekend", FieldType::Flag),
    required("shipping_information", FieldType::String),
    required("refund_information", FieldType::String),
    optional("model_height", FieldType::Integer),
    optional("model_size_top", FieldType::String),
    optional("model_size_bottom", FieldType::String),
    optional("model_size_foot", FieldType::String),
    optional("feed_message", FieldType::String),
]);

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{4,19}$").expect("valid regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0\d{1,2}-?\d{3,4}-?\d{4}$").expect("valid regex"));
static SERVICE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0\d{1,2}-?\d{3,4}-?\d{4}|1\d{3}-?\d{4})$").expect("valid regex"));
static SELLER_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{Hangul}A-Za-z0-9 ]{1,30}$").expect("valid regex"));
static ENG_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z ]{0,49}$").expect("valid regex"));
static SITE_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid regex"));
/// Width of the `site_url` column.
pub const SITE_URL_MAX_LEN: usize = 255;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]?\d|2[0-3]):[0-5]\d(:[0-5]\d)?$").expect("valid regex"));

fn check(field: Field, ok: bool) -> Result<(), RequestError> {
    if ok { Ok(()) } else { Err(RequestError::InvalidField(field)) }
}

/// 5-20 characters of letters, digits, `_` or `-`, starting with a letter or digit.
pub fn validate_account(account: &str) -> Result<(), RequestError> {
    check(Field::Id, ID_RE.is_match(account))
}

/// 8-20 characters with at least one letter, one digit and one special character.
pub fn validate_password(password: &str) -> Result<(), RequestError> {
    let len = password.chars().count();
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| c.is_ascii_punctuation());
    let no_space = !password.chars().any(char::is_whitespace);
    check(Field::Password, (8..=20).contains(&len) && has_letter && has_digit && has_special && no_space)
}

pub fn validate_phone_number(phone: &str) -> Result<(), RequestError> {
    check(Field::PhoneNumber, PHONE_RE.is_match(phone))
}

pub fn validate_service_number(number: &str) -> Result<(), RequestError> {
    check(Field::ServiceNumber, SERVICE_NUMBER_RE.is_match(number))
}

pub fn validate_seller_name(name: &str) -> Result<(), RequestError> {
    check(Field::SellerName, !name.trim().is_empty() && SELLER_NAME_RE.is_match(name))
}

/// Lowercase latin letters and spaces only.
pub fn validate_eng_name(name: &str) -> Result<(), RequestError> {
    check(Field::SellerEnglishName, ENG_NAME_RE.is_match(name))
}

pub fn validate_site_url(url: &str) -> Result<(), RequestError> {
    check(Field::SiteUrl, fits(url, SITE_URL_MAX_LEN) && SITE_URL_RE.is_match(url))
}

pub fn validate_seller_attribute(id: i32) -> Result<(), RequestError> {
    check(Field::SellerAttribute, models::seller_attribute::is_known(id))
}

/// At most `max` characters, the unit postgres uses for `varchar(n)`.
pub fn fits(s: &str, max: usize) -> bool {
    s.chars().count() <= max
}

pub fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// `H:MM`, `HH:MM` or `HH:MM:SS` on a 24h clock.
pub fn is_time_of_day(s: &str) -> bool {
    TIME_RE.is_match(s)
}
