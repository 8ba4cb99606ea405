use std::fmt;

use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;

use crate::validation::RequestError;

/// Failure classes of the relational driver; each maps to one fixed client message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbErrorKind {
    /// Server-side fault, or anything not classified below.
    Internal,
    /// Connection refused, dropped, or pool exhausted.
    Operational,
    /// Malformed statement or missing relation.
    Programming,
    /// Feature the backend does not support.
    NotSupported,
    /// Unique, foreign key, not-null or check violation.
    Integrity,
}

impl DbErrorKind {
    pub fn classify(err: &DbErr) -> Self {
        if err.sql_err().is_some() {
            return DbErrorKind::Integrity;
        }
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => DbErrorKind::Operational,
            DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => {
                match e.as_database_error().and_then(|d| d.code()) {
                    Some(code) => Self::from_sqlstate(&code),
                    // io, tls and pool errors surface from the driver without a SQLSTATE
                    None => DbErrorKind::Operational,
                }
            }
            DbErr::Exec(_) | DbErr::Query(_) => DbErrorKind::Programming,
            _ => DbErrorKind::Internal,
        }
    }

    /// Classify by the two-character SQLSTATE class.
    pub fn from_sqlstate(code: &str) -> Self {
        match code.get(..2) {
            Some("23") => DbErrorKind::Integrity,
            Some("0A") => DbErrorKind::NotSupported,
            Some("42") | Some("26") | Some("34") => DbErrorKind::Programming,
            Some("08") | Some("28") | Some("53") | Some("57") => DbErrorKind::Operational,
            _ => DbErrorKind::Internal,
        }
    }

    /// Message returned to clients.
    pub fn message(self) -> &'static str {
        match self {
            DbErrorKind::Internal => "DATABASE_SERVER_ERROR",
            DbErrorKind::Operational => "DATABASE_ACCESS_DENIED",
            DbErrorKind::Programming => "DATABASE_PROGRAMMING_ERROR",
            DbErrorKind::NotSupported => "DATABASE_NOT_SUPPORTED_ERROR",
            DbErrorKind::Integrity => "DATABASE_INTERGRITY_ERROR",
        }
    }
}

impl fmt::Display for DbErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A database error reduced to its kind, with the driver text kept for logs.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {detail}")]
pub struct DbFailure {
    pub kind: DbErrorKind,
    pub detail: String,
}

impl DbFailure {
    pub fn new(kind: DbErrorKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }
}

impl From<DbErr> for DbFailure {
    fn from(e: DbErr) -> Self {
        Self { kind: DbErrorKind::classify(&e), detail: e.to_string() }
    }
}

impl From<models::errors::ModelError> for DbFailure {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Db(db) => db.into(),
            models::errors::ModelError::Validation(msg) => Self::new(DbErrorKind::Integrity, msg),
        }
    }
}

/// Errors of the seller listing, update and detail workflows.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("seller not found")]
    SellerNotFound,
    #[error("master privilege required")]
    Unauthorized,
    #[error(transparent)]
    Db(#[from] DbFailure),
}
