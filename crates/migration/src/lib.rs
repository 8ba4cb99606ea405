//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_seller_attribute;
mod m20240301_000002_create_seller;
mod m20240301_000003_create_seller_credentials;
mod m20240301_000004_create_seller_detail;
mod m20240301_000005_add_indexes;

pub use m20240301_000001_create_seller_attribute::SELLER_ATTRIBUTES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_seller_attribute::Migration),
            Box::new(m20240301_000002_create_seller::Migration),
            Box::new(m20240301_000003_create_seller_credentials::Migration),
            Box::new(m20240301_000004_create_seller_detail::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000005_add_indexes::Migration),
        ]
    }
}
