use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};
use tracing::warn;
use uuid::Uuid;

use models::errors::ModelError;
use models::{seller, seller_credentials};

use crate::auth::domain::{AuthSeller, Credentials, SignUpInput};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use crate::errors::DbFailure;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_auth_seller(s: seller::Model) -> AuthSeller {
    AuthSeller { id: s.id, account: s.account, is_master: s.is_master }
}

fn repo_err(e: ModelError) -> AuthError {
    if let ModelError::Db(db) = &e {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = db.sql_err() {
            return AuthError::Conflict;
        }
    }
    AuthError::Repository(DbFailure::from(e))
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_seller_by_account(&self, account: &str) -> Result<Option<AuthSeller>, AuthError> {
        let found = seller::find_by_account(&self.db, account).await.map_err(repo_err)?;
        Ok(found.map(to_auth_seller))
    }

    async fn create_seller(
        &self,
        input: &SignUpInput,
        password_hash: String,
        password_algorithm: &str,
        is_master: bool,
    ) -> Result<AuthSeller, AuthError> {
        let txn = self.db.begin().await.map_err(DbFailure::from)?;
        let result = async {
            let created = seller::create(
                &txn,
                seller::NewSeller {
                    account: &input.account,
                    name: &input.name,
                    eng_name: &input.eng_name,
                    phone_number: &input.phone_number,
                    service_number: &input.service_number,
                    site_url: &input.site_url,
                    seller_attribute_id: input.seller_attribute_id,
                    is_master,
                },
            )
            .await
            .map_err(repo_err)?;
            seller_credentials::upsert_password(&txn, created.id, password_hash, password_algorithm)
                .await
                .map_err(repo_err)?;
            Ok::<_, AuthError>(created)
        }
        .await;

        match result {
            Ok(created) => {
                txn.commit().await.map_err(DbFailure::from)?;
                Ok(to_auth_seller(created))
            }
            Err(e) => {
                if let Err(rb) = txn.rollback().await {
                    warn!(err = %rb, "rollback after failed sign-up failed");
                }
                Err(e)
            }
        }
    }

    async fn get_credentials(&self, seller_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        let res = seller_credentials::find_by_seller(&self.db, seller_id).await.map_err(repo_err)?;
        Ok(res.map(|c| Credentials { seller_id: c.seller_id, password_hash: c.password_hash, password_algorithm: c.password_algorithm }))
    }
}
