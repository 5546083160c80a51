use super::*;

/// Tests deleting a player who belongs to no team.
///
/// Expected: Ok with player removed from database
#[tokio::test]
async fn deletes_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    repo.delete(player.id).await?;

    assert!(!repo.exists(player.id).await?);

    Ok(())
}

/// Tests deleting a player still listed on a team.
///
/// Verifies that the membership foreign key blocks the delete, so callers
/// must remove memberships first.
///
/// Expected: Err and player still present
#[tokio::test]
async fn fails_while_player_is_team_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let team = factory::create_team(db).await?;
    factory::add_team_player(db, team.team_id, player.id).await?;

    let repo = PlayerRepository::new(db);
    let result = repo.delete(player.id).await;

    assert!(result.is_err());
    assert!(repo.exists(player.id).await?);

    Ok(())
}

/// Tests deleting a nonexistent player.
///
/// Expected: Ok without error
#[tokio::test]
async fn deletes_nonexistent_player_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(result.is_ok());

    Ok(())
}
