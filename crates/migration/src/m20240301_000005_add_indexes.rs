use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Seller: listing filters by attribute and orders by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_seller_attribute")
                    .table(Seller::Table)
                    .col(Seller::SellerAttributeId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_seller_created_at")
                    .table(Seller::Table)
                    .col(Seller::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_seller_attribute").table(Seller::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_seller_created_at").table(Seller::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Seller { Table, SellerAttributeId, CreatedAt }
