use super::*;

/// Tests listing players.
///
/// Verifies that all players are returned in ascending ID order.
///
/// Expected: Ok with players ordered by ID
#[tokio::test]
async fn returns_players_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;
    let third = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let players = repo.get_all().await?;

    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing players from an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let players = repo.get_all().await?;

    assert!(players.is_empty());

    Ok(())
}
