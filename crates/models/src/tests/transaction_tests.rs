use anyhow::Result;
use sea_orm::TransactionTrait;

use super::{setup_test_db, unique_account};
use crate::{seller, seller_credentials};

fn new_seller(account: &str) -> seller::NewSeller<'_> {
    seller::NewSeller {
        account,
        name: "롤백샵",
        eng_name: "rollback shop",
        phone_number: "010-9999-0000",
        service_number: "02-999-0000",
        site_url: "https://rollback.example.com",
        seller_attribute_id: 2,
        is_master: false,
    }
}

/// Rows written inside a rolled-back transaction must not be visible afterwards.
#[tokio::test]
async fn rollback_discards_seller_and_credentials() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let account = unique_account();
    let txn = db.begin().await?;
    let created = seller::create(&txn, new_seller(&account)).await?;
    seller_credentials::upsert_password(&txn, created.id, "hash".into(), "argon2").await?;
    txn.rollback().await?;

    assert!(seller::find_by_account(&db, &account).await?.is_none());
    assert!(seller_credentials::find_by_seller(&db, created.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn commit_persists_seller() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let account = unique_account();
    let txn = db.begin().await?;
    let created = seller::create(&txn, new_seller(&account)).await?;
    txn.commit().await?;

    assert_eq!(seller::find_by_account(&db, &account).await?.map(|s| s.id), Some(created.id));
    seller::hard_delete(&db, created.id).await?;
    Ok(())
}

/// A failed statement inside a transaction leaves nothing behind once rolled back.
#[tokio::test]
async fn unknown_attribute_fails_and_rolls_back() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let account = unique_account();
    let txn = db.begin().await?;
    let mut bad = new_seller(&account);
    bad.seller_attribute_id = 999;
    assert!(seller::create(&txn, bad).await.is_err());
    txn.rollback().await?;

    assert!(seller::find_by_account(&db, &account).await?.is_none());
    Ok(())
}
