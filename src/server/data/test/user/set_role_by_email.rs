use super::*;

/// Tests promoting an existing account.
///
/// Expected: Ok(true) and the stored role becomes ADMIN
#[tokio::test]
async fn promotes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("boss@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .set_role_by_email("boss@example.com", UserRole::Admin)
        .await?;

    assert!(updated);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(stored.is_admin());

    Ok(())
}

/// Expected: Ok(false) when no account has the email
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .set_role_by_email("ghost@example.com", UserRole::Admin)
        .await?;

    assert!(!updated);

    Ok(())
}
