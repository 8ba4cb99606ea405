use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{IntoParams, Modify, OpenApi, ToSchema};
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct TokenResponse { pub access_token: String }

#[derive(ToSchema)]
pub struct SignUpRequest {
    /// login id
    pub user: String,
    pub password: String,
    pub phone_number: String,
    /// 1..=7
    pub seller_attribute_id: i32,
    pub name: String,
    pub eng_name: String,
    pub service_number: String,
    pub site_url: String,
}

#[derive(ToSchema)]
pub struct SignInRequest { pub user: String, pub password: String }

#[derive(ToSchema)]
pub struct SellerProfileRequest {
    pub profile: Option<String>,
    pub background_image: Option<String>,
    pub simple_introduction: String,
    pub detail_introduction: Option<String>,
    pub site_url: Option<String>,
    pub bank: String,
    pub account_owner: String,
    pub bank_account: String,
    pub order: Option<i32>,
    pub service_number: String,
    pub zip_code: Option<String>,
    pub address: Option<String>,
    pub detail_address: String,
    pub supervisor_name: String,
    pub supervisor_phone_number: String,
    pub supervisor_email: String,
    /// HH:MM:SS
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// 0/1 or boolean
    pub is_weekend: Option<bool>,
    pub shipping_information: String,
    pub refund_information: String,
    pub model_height: Option<i32>,
    pub model_size_top: Option<String>,
    pub model_size_bottom: Option<String>,
    pub model_size_foot: Option<String>,
    pub feed_message: Option<String>,
}

#[derive(ToSchema)]
pub struct SellerSummaryDoc {
    pub id: Uuid,
    pub account: String,
    pub name: String,
    pub eng_name: String,
    pub seller_attribute: Option<String>,
    pub status: String,
    pub supervisor_name: Option<String>,
    pub supervisor_phone_number: Option<String>,
    pub supervisor_email: Option<String>,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct SellerPageResponse {
    pub number_of_sellers: u64,
    pub number_of_pages: u64,
    pub sellers: Vec<SellerSummaryDoc>,
}

#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based, default 1
    pub page: Option<u32>,
    /// default 10, at most 100
    pub limit: Option<u32>,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::sign_up,
        crate::routes::auth::sign_in,
        crate::routes::sellers::list,
        crate::routes::sellers::update,
        crate::routes::sellers::details,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            TokenResponse,
            SignUpRequest,
            SignInRequest,
            SellerProfileRequest,
            SellerSummaryDoc,
            SellerPageResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "sellers")
    )
)]
pub struct ApiDoc;
