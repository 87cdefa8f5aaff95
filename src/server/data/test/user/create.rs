use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user and assigns an id.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "anna".to_string(),
            email: "anna@example.com".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "anna");
    assert_eq!(user.email, "anna@example.com");

    let stored = repo.find_by_id(user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests that duplicate usernames are rejected.
///
/// Expected: Err(DbErr) reporting a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("anna")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            username: "anna".to_string(),
            email: "other@example.com".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
