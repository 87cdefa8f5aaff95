use super::*;

/// Tests listing users in id order.
///
/// Expected: Ok with users in insertion order
#[tokio::test]
async fn returns_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first.id);
    assert_eq!(users[1].id, second.id);

    Ok(())
}

/// Tests listing users on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}
