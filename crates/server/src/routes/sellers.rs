use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use serde_json::Value;

use common::types::MessageBody;
use service::auth::domain::AuthSeller;
use service::pagination::Pagination;
use service::seller::domain::{SellerDetails, SellerPage, SellerProfileUpdate};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[derive(Serialize)]
pub struct DetailsOutput {
    pub data: SellerDetails,
}

#[utoipa::path(
    get, path = "/sellers", tag = "sellers",
    params(crate::openapi::PageQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "One page of sellers", body = crate::openapi::SellerPageResponse),
        (status = 401, description = "LOGIN_REQUIRED, INVALID_TOKEN or UNAUTHORIZED", body = crate::openapi::MessageResponse)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Extension(caller): Extension<AuthSeller>,
    page: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<SellerPage>, ApiError> {
    let Query(page) = page
        .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, "PARAMETER_VALIDATION_ERROR").with_detail(e))?;
    Ok(Json(state.sellers.list(&caller, page).await?))
}

#[utoipa::path(
    put, path = "/seller", tag = "sellers",
    request_body = crate::openapi::SellerProfileRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "SUCCESS", body = crate::openapi::MessageResponse),
        (status = 400, description = "PARAMETER_VALIDATION_ERROR", body = crate::openapi::MessageResponse),
        (status = 401, description = "LOGIN_REQUIRED or INVALID_TOKEN", body = crate::openapi::MessageResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(caller): Extension<AuthSeller>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Json(body) = payload.map_err(ApiError::invalid_request)?;
    let update = SellerProfileUpdate::from_json(body)?;
    state.sellers.update_profile(&caller, update).await?;
    Ok(Json(MessageBody::new("SUCCESS")))
}

#[utoipa::path(
    get, path = "/seller_details", tag = "sellers",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's profile under `data`"),
        (status = 400, description = "USER_DOES_NOT_EXIST", body = crate::openapi::MessageResponse),
        (status = 401, description = "LOGIN_REQUIRED or INVALID_TOKEN", body = crate::openapi::MessageResponse)
    )
)]
pub async fn details(
    State(state): State<ServerState>,
    Extension(caller): Extension<AuthSeller>,
) -> Result<Json<DetailsOutput>, ApiError> {
    let data = state.sellers.details(&caller).await?;
    Ok(Json(DetailsOutput { data }))
}
