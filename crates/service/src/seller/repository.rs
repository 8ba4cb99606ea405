use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::warn;
use uuid::Uuid;

use models::{seller, seller_attribute, seller_detail};

use super::domain::{SellerDetails, SellerProfileUpdate, SellerSummary};
use crate::errors::DbFailure;

/// Persistence seam for the seller listing, profile update and detail reads.
#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn count_sellers(&self) -> Result<u64, DbFailure>;

    /// Live sellers, newest first. `page_idx` is 0-based.
    async fn list_sellers(&self, page_idx: u64, per_page: u64) -> Result<Vec<SellerSummary>, DbFailure>;

    async fn find_details(&self, seller_id: Uuid) -> Result<Option<SellerDetails>, DbFailure>;

    /// Apply the update atomically. `Ok(false)` when the seller does not exist.
    async fn update_profile(&self, seller_id: Uuid, update: &SellerProfileUpdate) -> Result<bool, DbFailure>;
}

pub struct SeaOrmSellerRepository {
    pub db: DatabaseConnection,
}

fn summary(s: seller::Model, detail: Option<&seller_detail::Model>) -> SellerSummary {
    SellerSummary {
        id: s.id,
        seller_attribute: seller_attribute::name_of(s.seller_attribute_id).map(str::to_string),
        account: s.account,
        name: s.name,
        eng_name: s.eng_name,
        status: s.status,
        supervisor_name: detail.map(|d| d.supervisor_name.clone()),
        supervisor_phone_number: detail.map(|d| d.supervisor_phone_number.clone()),
        supervisor_email: detail.map(|d| d.supervisor_email.clone()),
        created_at: s.created_at,
    }
}

#[async_trait]
impl SellerRepository for SeaOrmSellerRepository {
    async fn count_sellers(&self) -> Result<u64, DbFailure> {
        Ok(seller::count_live(&self.db).await?)
    }

    async fn list_sellers(&self, page_idx: u64, per_page: u64) -> Result<Vec<SellerSummary>, DbFailure> {
        let sellers = seller::list_page(&self.db, page_idx, per_page).await?;
        let ids: Vec<Uuid> = sellers.iter().map(|s| s.id).collect();
        let details: HashMap<Uuid, seller_detail::Model> = seller_detail::find_for_sellers(&self.db, &ids)
            .await?
            .into_iter()
            .map(|d| (d.seller_id, d))
            .collect();
        Ok(sellers
            .into_iter()
            .map(|s| {
                let d = details.get(&s.id);
                summary(s, d)
            })
            .collect())
    }

    async fn find_details(&self, seller_id: Uuid) -> Result<Option<SellerDetails>, DbFailure> {
        let Some(s) = seller::find_live(&self.db, seller_id).await? else {
            return Ok(None);
        };
        let detail = seller_detail::find_by_seller(&self.db, seller_id).await?;
        Ok(Some(SellerDetails {
            id: s.id,
            seller_attribute: seller_attribute::name_of(s.seller_attribute_id).map(str::to_string),
            account: s.account,
            name: s.name,
            eng_name: s.eng_name,
            phone_number: s.phone_number,
            service_number: s.service_number,
            site_url: s.site_url,
            seller_attribute_id: s.seller_attribute_id,
            status: s.status,
            created_at: s.created_at,
            detail: detail.map(Into::into),
        }))
    }

    async fn update_profile(&self, seller_id: Uuid, update: &SellerProfileUpdate) -> Result<bool, DbFailure> {
        let txn = self.db.begin().await?;
        let result = async {
            if seller::find_live(&txn, seller_id).await?.is_none() {
                return Ok(false);
            }
            seller::update_contact(&txn, seller_id, &update.service_number, update.site_url.as_deref()).await?;
            seller_detail::upsert(&txn, seller_id, update.detail.clone()).await?;
            Ok::<_, DbFailure>(true)
        }
        .await;

        match result {
            Ok(true) => {
                txn.commit().await?;
                Ok(true)
            }
            Ok(false) => {
                txn.rollback().await?;
                Ok(false)
            }
            Err(e) => {
                if let Err(rb) = txn.rollback().await {
                    warn!(err = %rb, "rollback after failed profile update failed");
                }
                Err(e)
            }
        }
    }
}
