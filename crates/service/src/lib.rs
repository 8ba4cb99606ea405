//! Service layer providing the seller account workflows on top of models.
//! - Separates business logic from data access behind repository traits.
//! - Reuses entity definitions from the `models` crate.
//! - Reduces every storage failure to a `DbErrorKind` with a fixed client message.

pub mod errors;
pub mod validation;
pub mod pagination;
pub mod auth;
pub mod seller;
pub mod memory;
#[cfg(test)]
pub mod test_support;
