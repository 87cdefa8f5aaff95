use super::*;

/// Tests that a partial update only touches provided fields.
///
/// Expected: username changed, email kept
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("anna")
        .email("anna@example.com")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParam {
                username: Some("annika".to_string()),
                email: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "annika");
    assert_eq!(updated.email, "anna@example.com");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, UpdateUserParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
