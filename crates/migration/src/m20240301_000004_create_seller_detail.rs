//! Create `seller_detail` table: storefront profile, settlement account,
//! supervisor contact, CS hours, shipping/refund notes and model sizes.
//!
//! At most one row per seller; written by the profile update.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SellerDetail::Table)
                    .if_not_exists()
                    .col(uuid(SellerDetail::Id).primary_key())
                    .col(uuid(SellerDetail::SellerId).unique_key().not_null())
                    .col(string_len_null(SellerDetail::Profile, 255))
                    .col(string_len_null(SellerDetail::BackgroundImage, 255))
                    .col(string_len(SellerDetail::SimpleIntroduction, 255).not_null())
                    .col(text_null(SellerDetail::DetailIntroduction))
                    .col(string_len(SellerDetail::Bank, 64).not_null())
                    .col(string_len(SellerDetail::AccountOwner, 64).not_null())
                    .col(string_len(SellerDetail::BankAccount, 64).not_null())
                    .col(string_len_null(SellerDetail::ZipCode, 16))
                    .col(string_len_null(SellerDetail::Address, 255))
                    .col(string_len(SellerDetail::DetailAddress, 255).not_null())
                    .col(string_len(SellerDetail::SupervisorName, 64).not_null())
                    .col(string_len(SellerDetail::SupervisorPhoneNumber, 20).not_null())
                    .col(string_len(SellerDetail::SupervisorEmail, 255).not_null())
                    .col(integer_null(SellerDetail::SupervisorOrder))
                    .col(string_len_null(SellerDetail::CsStartTime, 8))
                    .col(string_len_null(SellerDetail::CsEndTime, 8))
                    .col(boolean(SellerDetail::CsIsWeekend).not_null().default(false))
                    .col(text(SellerDetail::ShippingInformation).not_null())
                    .col(text(SellerDetail::RefundInformation).not_null())
                    .col(integer_null(SellerDetail::ModelHeight))
                    .col(string_len_null(SellerDetail::ModelSizeTop, 16))
                    .col(string_len_null(SellerDetail::ModelSizeBottom, 16))
                    .col(string_len_null(SellerDetail::ModelSizeFoot, 16))
                    .col(string_len_null(SellerDetail::FeedMessage, 255))
                    .col(timestamp_with_time_zone(SellerDetail::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seller_detail_seller")
                            .from(SellerDetail::Table, SellerDetail::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SellerDetail::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SellerDetail {
    Table,
    Id,
    SellerId,
    Profile,
    BackgroundImage,
    SimpleIntroduction,
    DetailIntroduction,
    Bank,
    AccountOwner,
    BankAccount,
    ZipCode,
    Address,
    DetailAddress,
    SupervisorName,
    SupervisorPhoneNumber,
    SupervisorEmail,
    SupervisorOrder,
    CsStartTime,
    CsEndTime,
    CsIsWeekend,
    ShippingInformation,
    RefundInformation,
    ModelHeight,
    ModelSizeTop,
    ModelSizeBottom,
    ModelSizeFoot,
    FeedMessage,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Seller { Table, Id }
