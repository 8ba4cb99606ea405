use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, seller};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seller_detail")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub seller_id: Uuid,
    pub profile: Option<String>,
    pub background_image: Option<String>,
    pub simple_introduction: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub detail_introduction: Option<String>,
    pub bank: String,
    pub account_owner: String,
    pub bank_account: String,
    pub zip_code: Option<String>,
    pub address: Option<String>,
    pub detail_address: String,
    pub supervisor_name: String,
    pub supervisor_phone_number: String,
    pub supervisor_email: String,
    pub supervisor_order: Option<i32>,
    pub cs_start_time: Option<String>,
    pub cs_end_time: Option<String>,
    pub cs_is_weekend: bool,
    #[sea_orm(column_type = "Text")]
    pub shipping_information: String,
    #[sea_orm(column_type = "Text")]
    pub refund_information: String,
    pub model_height: Option<i32>,
    pub model_size_top: Option<String>,
    pub model_size_bottom: Option<String>,
    pub model_size_foot: Option<String>,
    pub feed_message: Option<String>,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Seller }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Seller => Entity::belongs_to(seller::Entity)
                .from(Column::SellerId)
                .to(seller::Column::Id)
                .into(),
        }
    }
}

impl Related<seller::Entity> for Entity {
    fn to() -> RelationDef { Relation::Seller.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Writable profile columns, everything except keys and timestamps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailFields {
    pub profile: Option<String>,
    pub background_image: Option<String>,
    pub simple_introduction: String,
    pub detail_introduction: Option<String>,
    pub bank: String,
    pub account_owner: String,
    pub bank_account: String,
    pub zip_code: Option<String>,
    pub address: Option<String>,
    pub detail_address: String,
    pub supervisor_name: String,
    pub supervisor_phone_number: String,
    pub supervisor_email: String,
    pub supervisor_order: Option<i32>,
    pub cs_start_time: Option<String>,
    pub cs_end_time: Option<String>,
    pub cs_is_weekend: bool,
    pub shipping_information: String,
    pub refund_information: String,
    pub model_height: Option<i32>,
    pub model_size_top: Option<String>,
    pub model_size_bottom: Option<String>,
    pub model_size_foot: Option<String>,
    pub feed_message: Option<String>,
}

impl From<Model> for DetailFields {
    fn from(m: Model) -> Self {
        Self {
            profile: m.profile,
            background_image: m.background_image,
            simple_introduction: m.simple_introduction,
            detail_introduction: m.detail_introduction,
            bank: m.bank,
            account_owner: m.account_owner,
            bank_account: m.bank_account,
            zip_code: m.zip_code,
            address: m.address,
            detail_address: m.detail_address,
            supervisor_name: m.supervisor_name,
            supervisor_phone_number: m.supervisor_phone_number,
            supervisor_email: m.supervisor_email,
            supervisor_order: m.supervisor_order,
            cs_start_time: m.cs_start_time,
            cs_end_time: m.cs_end_time,
            cs_is_weekend: m.cs_is_weekend,
            shipping_information: m.shipping_information,
            refund_information: m.refund_information,
            model_height: m.model_height,
            model_size_top: m.model_size_top,
            model_size_bottom: m.model_size_bottom,
            model_size_foot: m.model_size_foot,
            feed_message: m.feed_message,
        }
    }
}

fn apply(am: &mut ActiveModel, f: DetailFields) {
    am.profile = Set(f.profile);
    am.background_image = Set(f.background_image);
    am.simple_introduction = Set(f.simple_introduction);
    am.detail_introduction = Set(f.detail_introduction);
    am.bank = Set(f.bank);
    am.account_owner = Set(f.account_owner);
    am.bank_account = Set(f.bank_account);
    am.zip_code = Set(f.zip_code);
    am.address = Set(f.address);
    am.detail_address = Set(f.detail_address);
    am.supervisor_name = Set(f.supervisor_name);
    am.supervisor_phone_number = Set(f.supervisor_phone_number);
    am.supervisor_email = Set(f.supervisor_email);
    am.supervisor_order = Set(f.supervisor_order);
    am.cs_start_time = Set(f.cs_start_time);
    am.cs_end_time = Set(f.cs_end_time);
    am.cs_is_weekend = Set(f.cs_is_weekend);
    am.shipping_information = Set(f.shipping_information);
    am.refund_information = Set(f.refund_information);
    am.model_height = Set(f.model_height);
    am.model_size_top = Set(f.model_size_top);
    am.model_size_bottom = Set(f.model_size_bottom);
    am.model_size_foot = Set(f.model_size_foot);
    am.feed_message = Set(f.feed_message);
    am.updated_at = Set(Utc::now().into());
}

pub async fn find_by_seller<C: ConnectionTrait>(db: &C, seller_id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::SellerId.eq(seller_id)).one(db).await?)
}

/// Details for a batch of sellers, used by the listing.
pub async fn find_for_sellers<C: ConnectionTrait>(db: &C, seller_ids: &[Uuid]) -> Result<Vec<Model>, errors::ModelError> {
    if seller_ids.is_empty() {
        return Ok(Vec::new());
    }
    let found = Entity::find()
        .filter(Column::SellerId.is_in(seller_ids.iter().copied()))
        .all(db)
        .await?;
    Ok(found)
}

/// Insert the seller's detail row, or overwrite it when one exists.
pub async fn upsert<C: ConnectionTrait>(db: &C, seller_id: Uuid, fields: DetailFields) -> Result<Model, errors::ModelError> {
    match find_by_seller(db, seller_id).await? {
        Some(existing) => {
            let mut am: ActiveModel = existing.into();
            apply(&mut am, fields);
            Ok(am.update(db).await?)
        }
        None => {
            let mut am = ActiveModel {
                id: Set(Uuid::new_v4()),
                seller_id: Set(seller_id),
                ..Default::default()
            };
            apply(&mut am, fields);
            Ok(am.insert(db).await?)
        }
    }
}
