use super::*;

/// Tests creating an account.
///
/// Verifies that the repository stores every field and returns the generated id.
///
/// Expected: Ok(User) with role USER
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.password_hash, "hash");
    assert_eq!(user.role, UserRole::User);

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err(DbErr) and a single stored row
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            name: "Other".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
