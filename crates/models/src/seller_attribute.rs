use sea_orm::{entity::prelude::*, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seller_attribute")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Category ids accepted at sign-up.
pub fn is_known(id: i32) -> bool {
    migration::SELLER_ATTRIBUTES.iter().any(|(known, _)| *known == id)
}

/// Name of a category id, from the seeded table contents.
pub fn name_of(id: i32) -> Option<&'static str> {
    migration::SELLER_ATTRIBUTES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
}

pub async fn all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().all(db).await?)
}
