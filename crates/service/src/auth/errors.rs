use thiserror::Error;

use crate::errors::DbFailure;
use crate::validation::RequestError;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("user already exists")]
    Conflict,
    #[error("user does not exist")]
    NotFound,
    #[error("invalid credentials")]
    Unauthorized,
    #[error("account `{0}` exists and is not a master")]
    NotMaster(String),
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error(transparent)]
    Repository(#[from] DbFailure),
}
