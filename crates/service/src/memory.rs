//! In-memory store backing both repositories, for tests, doc examples and benches.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use models::seller_attribute;
use models::seller_detail::DetailFields;
use uuid::Uuid;

use crate::auth::domain::{AuthSeller, Credentials, SignUpInput};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use crate::errors::{DbErrorKind, DbFailure};
use crate::seller::domain::{SellerDetails, SellerProfileUpdate, SellerSummary};
use crate::seller::repository::SellerRepository;

#[derive(Clone)]
struct StoredSeller {
    input: SignUpInput,
    id: Uuid,
    is_master: bool,
    created_at: DateTime<FixedOffset>,
    detail: Option<DetailFields>,
}

#[derive(Default)]
struct State {
    sellers: HashMap<String, StoredSeller>, // key: account
    creds: HashMap<Uuid, Credentials>,      // key: seller id
    fail_next: Option<DbErrorKind>,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make the next repository call fail with a database error of `kind`.
    pub fn fail_next(&self, kind: DbErrorKind) {
        self.lock().fail_next = Some(kind);
    }

    pub fn seller_count(&self) -> usize {
        self.lock().sellers.len()
    }

    fn check(state: &mut State) -> Result<(), DbFailure> {
        match state.fail_next.take() {
            Some(kind) => Err(DbFailure::new(kind, "injected failure")),
            None => Ok(()),
        }
    }
}

fn status(is_master: bool) -> String {
    let s = if is_master { models::seller::STATUS_ACTIVE } else { models::seller::STATUS_PENDING };
    s.to_string()
}

fn auth_seller(s: &StoredSeller) -> AuthSeller {
    AuthSeller { id: s.id, account: s.input.account.clone(), is_master: s.is_master }
}

#[async_trait]
impl AuthRepository for InMemoryStore {
    async fn find_seller_by_account(&self, account: &str) -> Result<Option<AuthSeller>, AuthError> {
        let mut state = self.lock();
        Self::check(&mut state)?;
        Ok(state.sellers.get(account).map(auth_seller))
    }

    async fn create_seller(
        &self,
        input: &SignUpInput,
        password_hash: String,
        password_algorithm: &str,
        is_master: bool,
    ) -> Result<AuthSeller, AuthError> {
        let mut state = self.lock();
        Self::check(&mut state)?;
        if state.sellers.contains_key(&input.account) {
            return Err(AuthError::Conflict);
        }
        let stored = StoredSeller {
            input: input.clone(),
            id: Uuid::new_v4(),
            is_master,
            created_at: Utc::now().into(),
            detail: None,
        };
        state.creds.insert(
            stored.id,
            Credentials { seller_id: stored.id, password_hash, password_algorithm: password_algorithm.to_string() },
        );
        let seller = auth_seller(&stored);
        state.sellers.insert(input.account.clone(), stored);
        Ok(seller)
    }

    async fn get_credentials(&self, seller_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        let mut state = self.lock();
        Self::check(&mut state)?;
        Ok(state.creds.get(&seller_id).cloned())
    }
}

#[async_trait]
impl SellerRepository for InMemoryStore {
    async fn count_sellers(&self) -> Result<u64, DbFailure> {
        let mut state = self.lock();
        Self::check(&mut state)?;
        Ok(state.sellers.len() as u64)
    }

    async fn list_sellers(&self, page_idx: u64, per_page: u64) -> Result<Vec<SellerSummary>, DbFailure> {
        let mut state = self.lock();
        Self::check(&mut state)?;
        let mut all: Vec<&StoredSeller> = state.sellers.values().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.input.account.cmp(&b.input.account)));
        Ok(all
            .into_iter()
            .skip((page_idx * per_page) as usize)
            .take(per_page as usize)
            .map(|s| SellerSummary {
                id: s.id,
                account: s.input.account.clone(),
                name: s.input.name.clone(),
                eng_name: s.input.eng_name.clone(),
                seller_attribute: seller_attribute::name_of(s.input.seller_attribute_id).map(str::to_string),
                status: status(s.is_master),
                supervisor_name: s.detail.as_ref().map(|d| d.supervisor_name.clone()),
                supervisor_phone_number: s.detail.as_ref().map(|d| d.supervisor_phone_number.clone()),
                supervisor_email: s.detail.as_ref().map(|d| d.supervisor_email.clone()),
                created_at: s.created_at,
            })
            .collect())
    }

    async fn find_details(&self, seller_id: Uuid) -> Result<Option<SellerDetails>, DbFailure> {
        let mut state = self.lock();
        Self::check(&mut state)?;
        Ok(state.sellers.values().find(|s| s.id == seller_id).map(|s| SellerDetails {
            id: s.id,
            account: s.input.account.clone(),
            name: s.input.name.clone(),
            eng_name: s.input.eng_name.clone(),
            phone_number: s.input.phone_number.clone(),
            service_number: s.input.service_number.clone(),
            site_url: s.input.site_url.clone(),
            seller_attribute_id: s.input.seller_attribute_id,
            seller_attribute: seller_attribute::name_of(s.input.seller_attribute_id).map(str::to_string),
            status: status(s.is_master),
            created_at: s.created_at,
            detail: s.detail.clone(),
        }))
    }

    async fn update_profile(&self, seller_id: Uuid, update: &SellerProfileUpdate) -> Result<bool, DbFailure> {
        let mut state = self.lock();
        Self::check(&mut state)?;
        let Some(s) = state.sellers.values_mut().find(|s| s.id == seller_id) else {
            return Ok(false);
        };
        s.input.service_number = update.service_number.clone();
        if let Some(url) = &update.site_url {
            s.input.site_url = url.clone();
        }
        s.detail = Some(update.detail.clone());
        Ok(true)
    }
}
