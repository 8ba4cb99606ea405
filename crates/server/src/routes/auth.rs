use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use common::types::MessageBody;
use service::auth::{
    domain::{SignInInput, SignUpInput},
    repository::AuthRepository,
    AuthService,
};
use service::seller::{SellerRepository, SellerService};

use crate::errors::ApiError;

pub const TOKEN_COOKIE: &str = "access_token";

#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService<dyn AuthRepository>>,
    pub sellers: Arc<SellerService<dyn SellerRepository>>,
}

#[derive(Serialize)]
pub struct TokenOutput {
    pub access_token: String,
}

#[utoipa::path(
    post, path = "/sign-up", tag = "auth",
    request_body = crate::openapi::SignUpRequest,
    responses(
        (status = 200, description = "SUCCESS", body = crate::openapi::MessageResponse),
        (status = 400, description = "KEY_ERROR, TYPE_ERROR, *_VALIDATION_ERROR or USER_ALREADY_EXISTS", body = crate::openapi::MessageResponse),
        (status = 500, description = "DATABASE_* failure", body = crate::openapi::MessageResponse)
    )
)]
pub async fn sign_up(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Json(body) = payload.map_err(ApiError::invalid_request)?;
    let input = SignUpInput::from_json(body)?;
    state.auth.sign_up(input).await?;
    Ok(Json(MessageBody::new("SUCCESS")))
}

#[utoipa::path(
    post, path = "/sign-in", tag = "auth",
    request_body = crate::openapi::SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = crate::openapi::TokenResponse),
        (status = 400, description = "KEY_ERROR or USER_DOES_NOT_EXIST", body = crate::openapi::MessageResponse),
        (status = 401, description = "INVALID_ACCESS", body = crate::openapi::MessageResponse)
    )
)]
pub async fn sign_in(
    State(state): State<ServerState>,
    jar: CookieJar,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(CookieJar, Json<TokenOutput>), ApiError> {
    let Json(body) = payload.map_err(ApiError::invalid_request)?;
    let input = SignInInput::from_json(body)?;
    let session = state.auth.sign_in(input).await?;

    let mut cookie = Cookie::new(TOKEN_COOKIE, session.access_token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    Ok((jar.add(cookie), Json(TokenOutput { access_token: session.access_token })))
}

/// Bearer header first, then the `access_token` cookie.
fn extract_token(req: &Request) -> Result<Option<String>, ApiError> {
    if let Some(h) = req.headers().get(header::AUTHORIZATION) {
        let value = h.to_str().map_err(ApiError::invalid_token)?;
        return match value.strip_prefix("Bearer ") {
            Some(t) if !t.trim().is_empty() => Ok(Some(t.trim().to_string())),
            _ => Err(ApiError::invalid_token("expected `Bearer <token>`")),
        };
    }
    let jar = CookieJar::from_headers(req.headers());
    Ok(jar
        .get(TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty()))
}

/// Verify the access token and put the caller's `AuthSeller` into request extensions.
pub async fn require_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&req)?.ok_or_else(ApiError::login_required)?;
    let seller = state.auth.authenticate(&token).map_err(ApiError::invalid_token)?;
    info!(seller_id = %seller.id, path = %req.uri().path(), "token accepted");
    req.extensions_mut().insert(seller);
    Ok(next.run(req).await)
}
