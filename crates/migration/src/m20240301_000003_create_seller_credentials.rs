//! Create `seller_credentials` table storing password hashes.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SellerCredentials::Table)
                    .if_not_exists()
                    .col(uuid(SellerCredentials::Id).primary_key())
                    .col(uuid(SellerCredentials::SellerId).unique_key().not_null())
                    .col(string_len(SellerCredentials::PasswordHash, 255).not_null())
                    .col(string_len(SellerCredentials::PasswordAlgorithm, 64).not_null())
                    .col(timestamp_with_time_zone(SellerCredentials::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(SellerCredentials::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seller_credentials_seller")
                            .from(SellerCredentials::Table, SellerCredentials::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SellerCredentials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SellerCredentials {
    Table,
    Id,
    SellerId,
    PasswordHash,
    PasswordAlgorithm,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Seller { Table, Id }
