//! Create `seller_attribute` table and seed the fixed seller categories.
use sea_orm_migration::{prelude::*, schema::*};

/// Seller categories as `(id, name)`.
pub const SELLER_ATTRIBUTES: [(i32, &str); 7] = [
    (1, "쇼핑몰"),
    (2, "마켓"),
    (3, "로드샵"),
    (4, "디자이너브랜드"),
    (5, "제너럴브랜드"),
    (6, "내셔널브랜드"),
    (7, "뷰티"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SellerAttribute::Table)
                    .if_not_exists()
                    .col(integer(SellerAttribute::Id).primary_key())
                    .col(string_len(SellerAttribute::Name, 64).unique_key().not_null())
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(SellerAttribute::Table)
            .columns([SellerAttribute::Id, SellerAttribute::Name]);
        for (id, name) in SELLER_ATTRIBUTES {
            seed.values_panic([id.into(), name.into()]);
        }
        seed.on_conflict(OnConflict::column(SellerAttribute::Id).do_nothing().to_owned());
        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SellerAttribute::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SellerAttribute { Table, Id, Name }
