use chrono::{DateTime, FixedOffset};
use models::seller_detail::DetailFields;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::validation::{self, RequestError};

/// One row of the master's seller listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub id: Uuid,
    pub account: String,
    pub name: String,
    pub eng_name: String,
    pub seller_attribute: Option<String>,
    pub status: String,
    pub supervisor_name: Option<String>,
    pub supervisor_phone_number: Option<String>,
    pub supervisor_email: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

/// Listing response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerPage {
    pub number_of_sellers: u64,
    pub number_of_pages: u64,
    pub sellers: Vec<SellerSummary>,
}

/// Everything a seller sees about their own account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerDetails {
    pub id: Uuid,
    pub account: String,
    pub name: String,
    pub eng_name: String,
    pub phone_number: String,
    pub service_number: String,
    pub site_url: String,
    pub seller_attribute_id: i32,
    pub seller_attribute: Option<String>,
    pub status: String,
    pub created_at: DateTime<FixedOffset>,
    /// `None` until the first profile update.
    pub detail: Option<DetailFields>,
}

/// Wire shape of the profile update body.
#[derive(Debug, Deserialize)]
struct ProfileBody {
    profile: Option<String>,
    background_image: Option<String>,
    simple_introduction: String,
    detail_introduction: Option<String>,
    site_url: Option<String>,
    bank: String,
    account_owner: String,
    bank_account: String,
    order: Option<i32>,
    service_number: String,
    zip_code: Option<String>,
    address: Option<String>,
    detail_address: String,
    supervisor_name: String,
    supervisor_phone_number: String,
    supervisor_email: String,
    start_time: Option<String>,
    end_time: Option<String>,
    is_weekend: Option<Value>,
    shipping_information: String,
    refund_information: String,
    model_height: Option<i32>,
    model_size_top: Option<String>,
    model_size_bottom: Option<String>,
    model_size_foot: Option<String>,
    feed_message: Option<String>,
}

/// Validated profile update: contact columns on the seller row plus the detail row.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerProfileUpdate {
    pub service_number: String,
    pub site_url: Option<String>,
    pub detail: DetailFields,
}

fn param(msg: &str) -> RequestError {
    RequestError::Parameter(msg.to_string())
}

impl SellerProfileUpdate {
    /// Every failure, structural or semantic, is a `PARAMETER_VALIDATION_ERROR`.
    pub fn from_json(body: Value) -> Result<Self, RequestError> {
        validation::SELLER_PROFILE.check(&body).map_err(|e| param(&e.to_string()))?;
        let b: ProfileBody = serde_json::from_value(body).map_err(|e| param(&e.to_string()))?;

        let required = [
            ("simple_introduction", &b.simple_introduction),
            ("bank", &b.bank),
            ("account_owner", &b.account_owner),
            ("bank_account", &b.bank_account),
            ("service_number", &b.service_number),
            ("detail_address", &b.detail_address),
            ("supervisor_name", &b.supervisor_name),
            ("supervisor_phone_number", &b.supervisor_phone_number),
            ("supervisor_email", &b.supervisor_email),
            ("shipping_information", &b.shipping_information),
            ("refund_information", &b.refund_information),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(param(&format!("`{name}` must not be empty")));
        }
        validation::validate_service_number(&b.service_number)
            .map_err(|_| param("`service_number` is not a phone or representative number"))?;
        validation::validate_phone_number(&b.supervisor_phone_number)
            .map_err(|_| param("`supervisor_phone_number` is not a phone number"))?;
        if !validation::is_email(&b.supervisor_email) {
            return Err(param("`supervisor_email` is not an email address"));
        }
        for (name, t) in [("start_time", &b.start_time), ("end_time", &b.end_time)] {
            if let Some(t) = t {
                if !validation::is_time_of_day(t) {
                    return Err(param(&format!("`{name}` must look like HH:MM:SS")));
                }
            }
        }
        if let Some(url) = &b.site_url {
            validation::validate_site_url(url).map_err(|_| param("`site_url` is not an http(s) URL"))?;
        }

        // column widths of seller_detail
        let bounded = [
            ("profile", b.profile.as_deref(), 255),
            ("background_image", b.background_image.as_deref(), 255),
            ("simple_introduction", Some(b.simple_introduction.as_str()), 255),
            ("bank", Some(b.bank.as_str()), 64),
            ("account_owner", Some(b.account_owner.as_str()), 64),
            ("bank_account", Some(b.bank_account.as_str()), 64),
            ("zip_code", b.zip_code.as_deref(), 16),
            ("address", b.address.as_deref(), 255),
            ("detail_address", Some(b.detail_address.as_str()), 255),
            ("supervisor_name", Some(b.supervisor_name.as_str()), 64),
            ("supervisor_email", Some(b.supervisor_email.as_str()), 255),
            ("model_size_top", b.model_size_top.as_deref(), 16),
            ("model_size_bottom", b.model_size_bottom.as_deref(), 16),
            ("model_size_foot", b.model_size_foot.as_deref(), 16),
            ("feed_message", b.feed_message.as_deref(), 255),
        ];
        for (name, value, max) in bounded {
            if value.is_some_and(|v| !validation::fits(v, max)) {
                return Err(param(&format!("`{name}` is longer than {max} characters")));
            }
        }
        if matches!(b.model_height, Some(h) if h <= 0) {
            return Err(param("`model_height` must be positive"));
        }

        let cs_is_weekend = match b.is_weekend {
            Some(Value::Bool(v)) => v,
            Some(v) => v.as_u64() == Some(1),
            None => false,
        };

        Ok(Self {
            service_number: b.service_number,
            site_url: b.site_url,
            detail: DetailFields {
                profile: b.profile,
                background_image: b.background_image,
                simple_introduction: b.simple_introduction,
                detail_introduction: b.detail_introduction,
                bank: b.bank,
                account_owner: b.account_owner,
                bank_account: b.bank_account,
                zip_code: b.zip_code,
                address: b.address,
                detail_address: b.detail_address,
                supervisor_name: b.supervisor_name,
                supervisor_phone_number: b.supervisor_phone_number,
                supervisor_email: b.supervisor_email,
                supervisor_order: b.order,
                cs_start_time: b.start_time,
                cs_end_time: b.end_time,
                cs_is_weekend,
                shipping_information: b.shipping_information,
                refund_information: b.refund_information,
                model_height: b.model_height,
                model_size_top: b.model_size_top,
                model_size_bottom: b.model_size_bottom,
                model_size_foot: b.model_size_foot,
                feed_message: b.feed_message,
            },
        })
    }
}
