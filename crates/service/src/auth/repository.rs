use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{AuthSeller, Credentials, SignUpInput};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_seller_by_account(&self, account: &str) -> Result<Option<AuthSeller>, AuthError>;

    /// Insert the seller row and its credentials as one unit; nothing is
    /// stored when either insert fails. A taken account yields `Conflict`.
    async fn create_seller(
        &self,
        input: &SignUpInput,
        password_hash: String,
        password_algorithm: &str,
        is_master: bool,
    ) -> Result<AuthSeller, AuthError>;

    async fn get_credentials(&self, seller_id: Uuid) -> Result<Option<Credentials>, AuthError>;
}
