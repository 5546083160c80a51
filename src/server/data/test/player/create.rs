use super::*;

/// Tests creating a player.
///
/// Verifies that the repository inserts the player, assigns an ID and returns
/// every submitted field.
///
/// Expected: Ok with player persisted
#[tokio::test]
async fn creates_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(CreatePlayerParams {
            fields: fields("James", "PC789"),
        })
        .await?;

    assert!(player.id > 0);
    assert_eq!(player.name, "James");
    assert_eq!(player.personal_code, "PC789");

    let db_player = Player::find_by_id(player.id).one(db).await?;
    assert!(db_player.is_some());

    Ok(())
}

/// Tests that identical personal codes are accepted.
///
/// Verifies that no uniqueness constraint is placed on the personal code.
///
/// Expected: Ok with two distinct players
#[tokio::test]
async fn allows_duplicate_personal_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let first = repo
        .create(CreatePlayerParams {
            fields: fields("James", "PC789"),
        })
        .await?;
    let second = repo
        .create(CreatePlayerParams {
            fields: fields("Jim", "PC789"),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
