//! Seller module: listing for the master account, profile update and detail reads.

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::{SeaOrmSellerRepository, SellerRepository};
pub use service::SellerService;
