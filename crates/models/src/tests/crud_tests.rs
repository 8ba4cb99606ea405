use anyhow::Result;
use sea_orm::EntityTrait;

use super::{setup_test_db, unique_account};
use crate::{seller, seller_attribute, seller_credentials, seller_detail};

fn new_seller(account: &str) -> seller::NewSeller<'_> {
    seller::NewSeller {
        account,
        name: "테스트샵",
        eng_name: "test shop",
        phone_number: "010-1234-5678",
        service_number: "02-123-4567",
        site_url: "https://shop.example.com",
        seller_attribute_id: 1,
        is_master: false,
    }
}

#[tokio::test]
async fn seeded_attributes_present() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let all = seller_attribute::all(&db).await?;
    assert!(all.len() >= 7);
    assert!(all.iter().any(|a| a.id == 7 && a.name == "뷰티"));
    Ok(())
}

#[tokio::test]
async fn test_seller_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let account = unique_account();
    let created = seller::create(&db, new_seller(&account)).await?;
    assert_eq!(created.account, account);
    assert_eq!(created.status, seller::STATUS_PENDING);
    assert!(!created.is_master);

    let found = seller::find_by_account(&db, &account).await?;
    assert_eq!(found.map(|s| s.id), Some(created.id));

    let updated = seller::update_contact(&db, created.id, "1588-0000", None).await?;
    assert_eq!(updated.service_number, "1588-0000");
    assert_eq!(updated.site_url, "https://shop.example.com");

    seller::soft_delete(&db, created.id).await?;
    assert!(seller::find_live(&db, created.id).await?.is_none());
    assert!(seller::Entity::find_by_id(created.id).one(&db).await?.is_some());

    seller::hard_delete(&db, created.id).await?;
    assert!(seller::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn duplicate_account_violates_unique_constraint() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let account = unique_account();
    let first = seller::create(&db, new_seller(&account)).await?;
    let err = seller::create(&db, new_seller(&account)).await.unwrap_err();
    match err {
        crate::errors::ModelError::Db(e) => assert!(e.sql_err().is_some(), "expected sql constraint error, got {e}"),
        other => panic!("unexpected error: {other}"),
    }
    seller::hard_delete(&db, first.id).await?;
    Ok(())
}

#[tokio::test]
async fn credentials_upsert_replaces_hash() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let s = seller::create(&db, new_seller(&unique_account())).await?;
    let first = seller_credentials::upsert_password(&db, s.id, "hash-1".into(), "argon2").await?;
    let second = seller_credentials::upsert_password(&db, s.id, "hash-2".into(), "argon2").await?;
    assert_eq!(first.id, second.id);
    let stored = seller_credentials::find_by_seller(&db, s.id).await?.unwrap();
    assert_eq!(stored.password_hash, "hash-2");

    seller::hard_delete(&db, s.id).await?;
    assert!(seller_credentials::find_by_seller(&db, s.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn detail_upsert_inserts_then_updates() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let s = seller::create(&db, new_seller(&unique_account())).await?;
    let mut fields = seller_detail::DetailFields {
        simple_introduction: "hello".into(),
        bank: "KB".into(),
        account_owner: "Kim".into(),
        bank_account: "123-456".into(),
        detail_address: "3F".into(),
        supervisor_name: "Lee".into(),
        supervisor_phone_number: "010-0000-0000".into(),
        supervisor_email: "lee@example.com".into(),
        shipping_information: "ships in 2 days".into(),
        refund_information: "7 days".into(),
        ..Default::default()
    };
    let inserted = seller_detail::upsert(&db, s.id, fields.clone()).await?;
    fields.feed_message = Some("new arrivals".into());
    let updated = seller_detail::upsert(&db, s.id, fields).await?;
    assert_eq!(inserted.id, updated.id);
    assert_eq!(updated.feed_message.as_deref(), Some("new arrivals"));

    let batch = seller_detail::find_for_sellers(&db, &[s.id]).await?;
    assert_eq!(batch.len(), 1);

    seller::hard_delete(&db, s.id).await?;
    Ok(())
}
