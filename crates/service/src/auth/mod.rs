//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Sign-up, sign-in, token issue/verification and master bootstrap live here.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod token;
pub mod repo;

pub use service::AuthService;
