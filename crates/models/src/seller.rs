use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{seller_attribute, seller_detail};

/// Status given to freshly signed-up sellers until an operator reviews them.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ACTIVE: &str = "active";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seller")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub account: String,
    pub name: String,
    pub eng_name: String,
    pub phone_number: String,
    pub service_number: String,
    pub site_url: String,
    pub seller_attribute_id: i32,
    pub status: String,
    pub is_master: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SellerAttribute,
    SellerDetail,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SellerAttribute => Entity::belongs_to(seller_attribute::Entity)
                .from(Column::SellerAttributeId)
                .to(seller_attribute::Column::Id)
                .into(),
            Relation::SellerDetail => Entity::has_one(seller_detail::Entity).into(),
        }
    }
}

impl Related<seller_attribute::Entity> for Entity {
    fn to() -> RelationDef { Relation::SellerAttribute.def() }
}

impl Related<seller_detail::Entity> for Entity {
    fn to() -> RelationDef { Relation::SellerDetail.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Columns supplied at sign-up.
#[derive(Clone, Debug)]
pub struct NewSeller<'a> {
    pub account: &'a str,
    pub name: &'a str,
    pub eng_name: &'a str,
    pub phone_number: &'a str,
    pub service_number: &'a str,
    pub site_url: &'a str,
    pub seller_attribute_id: i32,
    pub is_master: bool,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewSeller<'_>) -> Result<Model, errors::ModelError> {
    if new.account.trim().is_empty() { return Err(errors::ModelError::Validation("account required".into())); }
    if new.name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    let now = Utc::now().into();
    let status = if new.is_master { STATUS_ACTIVE } else { STATUS_PENDING };
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        account: Set(new.account.to_string()),
        name: Set(new.name.to_string()),
        eng_name: Set(new.eng_name.to_string()),
        phone_number: Set(new.phone_number.to_string()),
        service_number: Set(new.service_number.to_string()),
        site_url: Set(new.site_url.to_string()),
        seller_attribute_id: Set(new.seller_attribute_id),
        status: Set(status.to_string()),
        is_master: Set(new.is_master),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    };
    Ok(am.insert(db).await?)
}

/// Live (not soft-deleted) seller by login id.
pub async fn find_by_account<C: ConnectionTrait>(db: &C, account: &str) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::Account.eq(account))
        .filter(Column::DeletedAt.is_null())
        .one(db)
        .await?;
    Ok(found)
}

/// Live seller by id.
pub async fn find_live<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find_by_id(id)
        .filter(Column::DeletedAt.is_null())
        .one(db)
        .await?;
    Ok(found)
}

pub async fn count_live<C: ConnectionTrait>(db: &C) -> Result<u64, errors::ModelError> {
    use sea_orm::PaginatorTrait;
    Ok(Entity::find().filter(Column::DeletedAt.is_null()).count(db).await?)
}

/// One page of live sellers, newest first. `page_idx` is 0-based.
pub async fn list_page<C: ConnectionTrait>(db: &C, page_idx: u64, per_page: u64) -> Result<Vec<Model>, errors::ModelError> {
    use sea_orm::PaginatorTrait;
    let sellers = Entity::find()
        .filter(Column::DeletedAt.is_null())
        .order_by_desc(Column::CreatedAt)
        .order_by_asc(Column::Account)
        .paginate(db, per_page)
        .fetch_page(page_idx)
        .await?;
    Ok(sellers)
}

/// Overwrite the contact columns that the profile update owns.
pub async fn update_contact<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    service_number: &str,
    site_url: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let mut am: ActiveModel = find_live(db, id)
        .await?
        .ok_or_else(|| errors::ModelError::Validation("seller not found".into()))?
        .into();
    am.service_number = Set(service_number.to_string());
    if let Some(url) = site_url {
        am.site_url = Set(url.to_string());
    }
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

pub async fn soft_delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), errors::ModelError> {
    let mut found: ActiveModel = Entity::find_by_id(id).one(db).await?.ok_or_else(|| errors::ModelError::Validation("seller not found".into()))?.into();
    found.deleted_at = Set(Some(Utc::now().into()));
    found.update(db).await?;
    Ok(())
}

pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}
