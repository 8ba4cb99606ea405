use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use common::types::MessageBody;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use service::validation::RequestError;

/// Error response carrying a fixed client code; `detail` only reaches the log.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message, detail: None }
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub fn invalid_request(detail: impl ToString) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST").with_detail(detail)
    }

    pub fn login_required() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "LOGIN_REQUIRED")
    }

    pub fn invalid_token(detail: impl ToString) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "INVALID_TOKEN").with_detail(detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.detail.as_deref().unwrap_or("");
        if self.status.is_server_error() {
            error!(status = %self.status, code = self.message, detail, "request failed");
        } else {
            warn!(status = %self.status, code = self.message, detail, "request rejected");
        }
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, e.code()).with_detail(&e)
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Request(r) => r.into(),
            AuthError::Conflict | AuthError::NotMaster(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, "USER_ALREADY_EXISTS").with_detail(&e)
            }
            AuthError::NotFound => ApiError::new(StatusCode::BAD_REQUEST, "USER_DOES_NOT_EXIST"),
            AuthError::Unauthorized => ApiError::new(StatusCode::UNAUTHORIZED, "INVALID_ACCESS"),
            AuthError::HashError(_) | AuthError::TokenError(_) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR").with_detail(&e)
            }
            AuthError::Repository(f) => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, f.kind.message()).with_detail(&f),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Request(r) => r.into(),
            ServiceError::SellerNotFound => ApiError::new(StatusCode::BAD_REQUEST, "USER_DOES_NOT_EXIST"),
            ServiceError::Unauthorized => ApiError::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ServiceError::Db(f) => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, f.kind.message()).with_detail(&f),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("master bootstrap failed: {0}")]
    Bootstrap(#[from] AuthError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::errors::{DbErrorKind, DbFailure};

    #[test]
    fn auth_errors_map_to_codes() {
        let e: ApiError = AuthError::Conflict.into();
        assert_eq!((e.status, e.message), (StatusCode::BAD_REQUEST, "USER_ALREADY_EXISTS"));
        let e: ApiError = AuthError::Unauthorized.into();
        assert_eq!((e.status, e.message), (StatusCode::UNAUTHORIZED, "INVALID_ACCESS"));
        let e: ApiError = AuthError::Request(RequestError::MissingKey("user".into())).into();
        assert_eq!((e.status, e.message), (StatusCode::BAD_REQUEST, "KEY_ERROR"));
    }

    #[test]
    fn db_failures_are_500_with_kind_message() {
        for kind in [
            DbErrorKind::Internal,
            DbErrorKind::Operational,
            DbErrorKind::Programming,
            DbErrorKind::NotSupported,
            DbErrorKind::Integrity,
        ] {
            let e: ApiError = ServiceError::Db(DbFailure::new(kind, "driver text")).into();
            assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(e.message, kind.message());
            assert_eq!(e.detail.as_deref(), Some(format!("{kind}: driver text").as_str()));
        }
    }

    #[test]
    fn service_errors_map_to_codes() {
        let e: ApiError = ServiceError::Unauthorized.into();
        assert_eq!((e.status, e.message), (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"));
        let e: ApiError = ServiceError::SellerNotFound.into();
        assert_eq!((e.status, e.message), (StatusCode::BAD_REQUEST, "USER_DOES_NOT_EXIST"));
        let e: ApiError = ServiceError::Request(RequestError::Parameter("x".into())).into();
        assert_eq!(e.message, "PARAMETER_VALIDATION_ERROR");
    }
}
