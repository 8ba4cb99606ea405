//! Create `seller` table with FK to `seller_attribute`.
//!
//! `account` is the login id; includes soft-delete timestamp.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seller::Table)
                    .if_not_exists()
                    .col(uuid(Seller::Id).primary_key())
                    .col(string_len(Seller::Account, 20).unique_key().not_null())
                    .col(string_len(Seller::Name, 64).not_null())
                    .col(string_len(Seller::EngName, 64).not_null())
                    .col(string_len(Seller::PhoneNumber, 20).not_null())
                    .col(string_len(Seller::ServiceNumber, 20).not_null())
                    .col(string_len(Seller::SiteUrl, 255).not_null())
                    .col(integer(Seller::SellerAttributeId).not_null())
                    .col(string_len(Seller::Status, 32).not_null())
                    .col(boolean(Seller::IsMaster).not_null().default(false))
                    .col(timestamp_with_time_zone(Seller::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Seller::UpdatedAt).not_null())
                    .col(
                        ColumnDef::new(Seller::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seller_attribute")
                            .from(Seller::Table, Seller::SellerAttributeId)
                            .to(SellerAttribute::Table, SellerAttribute::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Seller::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Seller {
    Table,
    Id,
    Account,
    Name,
    EngName,
    PhoneNumber,
    ServiceNumber,
    SiteUrl,
    SellerAttributeId,
    Status,
    IsMaster,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum SellerAttribute { Table, Id }
