use super::*;

/// Tests deleting a player who belongs to several teams.
///
/// Verifies that the player is removed from every team before the row is
/// deleted and that the other members stay.
///
/// Expected: Ok(true) with no team referencing the player
#[tokio::test]
async fn delete_removes_player_from_every_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, players, first) = create_team_with_members(db, 2).await?;
    let target = players[0].id;
    let second = factory::team::TeamFactory::new(db)
        .player_ids(vec![target])
        .build()
        .await?;

    let deleted = PlayerService::new(db).delete(target).await?;
    assert!(deleted);

    let teams = TeamService::new(db);
    let first = teams.get_by_id(first.team_id).await?.unwrap();
    assert_eq!(first.team.player_ids, vec![players[1].id]);
    let second = teams.get_by_id(second.team_id).await?.unwrap();
    assert!(second.team.player_ids.is_empty());

    assert!(Player::find_by_id(target).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a nonexistent player.
///
/// Expected: Ok(false) with nothing mutated
#[tokio::test]
async fn delete_returns_false_for_nonexistent_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db).await?;

    let deleted = PlayerService::new(db).delete(999999).await?;

    assert!(!deleted);
    assert_eq!(Player::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting the same player twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn repeated_delete_reports_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let service = PlayerService::new(db);

    assert!(service.delete(player.id).await?);
    assert!(!service.delete(player.id).await?);

    Ok(())
}

/// Tests that a failing delete rolls back the team scrub.
///
/// A trigger aborts the final player delete after the player has been
/// removed from both teams inside the transaction.
///
/// Expected: Err with both memberships and the player still present
#[tokio::test]
async fn failed_delete_keeps_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, players, first) = create_team_with_members(db, 1).await?;
    let target = players[0].id;
    let second = factory::team::TeamFactory::new(db)
        .player_ids(vec![target])
        .build()
        .await?;

    db.execute_unprepared(
        "CREATE TRIGGER block_player_delete BEFORE DELETE ON player \
         BEGIN SELECT RAISE(ABORT, 'player delete blocked'); END",
    )
    .await?;

    let result = PlayerService::new(db).delete(target).await;
    assert!(matches!(result, Err(AppError::DbErr(_))));

    let teams = TeamService::new(db);
    let first = teams.get_by_id(first.team_id).await?.unwrap();
    assert_eq!(first.team.player_ids, vec![target]);
    let second = teams.get_by_id(second.team_id).await?.unwrap();
    assert_eq!(second.team.player_ids, vec![target]);

    assert!(Player::find_by_id(target).one(db).await?.is_some());
    assert_eq!(TeamPlayer::find().count(db).await?, 2);

    Ok(())
}
