pub mod errors;
pub mod db;
pub mod seller_attribute;
pub mod seller;
pub mod seller_credentials;
pub mod seller_detail;

#[cfg(test)]
mod tests;
