use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{SellerDetails, SellerPage, SellerProfileUpdate};
use super::repository::SellerRepository;
use crate::auth::domain::AuthSeller;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Seller listing, profile update and detail reads on behalf of an authenticated caller.
pub struct SellerService<R: SellerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: SellerRepository + ?Sized> SellerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// One page of sellers. Only the master account may list.
    #[instrument(skip(self, caller), fields(caller = %caller.account, page = page.page, limit = page.limit))]
    pub async fn list(&self, caller: &AuthSeller, page: Pagination) -> Result<SellerPage, ServiceError> {
        if !caller.is_master {
            return Err(ServiceError::Unauthorized);
        }
        let total = self.repo.count_sellers().await?;
        let (idx, per_page) = page.normalize();
        let sellers = self.repo.list_sellers(idx, per_page).await?;
        // ceil(total / limit), so an exact multiple does not report a trailing empty page
        Ok(SellerPage { number_of_sellers: total, number_of_pages: page.page_count(total), sellers })
    }

    /// Overwrite the caller's own profile.
    #[instrument(skip(self, caller, update), fields(seller_id = %caller.id))]
    pub async fn update_profile(&self, caller: &AuthSeller, update: SellerProfileUpdate) -> Result<(), ServiceError> {
        if !self.repo.update_profile(caller.id, &update).await? {
            return Err(ServiceError::SellerNotFound);
        }
        info!(seller_id = %caller.id, "seller_profile_updated");
        Ok(())
    }

    #[instrument(skip(self, caller), fields(seller_id = %caller.id))]
    pub async fn details(&self, caller: &AuthSeller) -> Result<SellerDetails, ServiceError> {
        self.repo.find_details(caller.id).await?.ok_or(ServiceError::SellerNotFound)
    }
}
