use super::*;

/// Tests resolving a set of player IDs.
///
/// Verifies that unknown IDs are skipped and results come back ordered by ID
/// regardless of the requested order.
///
/// Expected: Ok with only existing players
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let players = repo.get_by_ids(&[second.id, 999999, first.id]).await?;

    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests resolving an empty ID set.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let players = repo.get_by_ids(&[]).await?;

    assert!(players.is_empty());

    Ok(())
}
