use super::*;

/// Tests adding a player to a team.
///
/// Expected: Ok(true) and membership present
#[tokio::test]
async fn adds_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let player = factory::create_player(db).await?;

    let repo = TeamRepository::new(db);
    let added = repo.add_player(team.team_id, player.id).await?;

    assert!(added);
    assert!(repo.has_player(team.team_id, player.id).await?);

    Ok(())
}

/// Tests adding a player who is already a member.
///
/// Verifies that no duplicate membership row is created.
///
/// Expected: Ok(false) with a single membership row
#[tokio::test]
async fn adding_existing_member_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, players, team) = create_team_with_members(db, 1).await?;

    let repo = TeamRepository::new(db);
    let added = repo.add_player(team.team_id, players[0].id).await?;

    assert!(!added);
    assert_eq!(TeamPlayer::find().count(db).await?, 1);

    Ok(())
}

/// Tests removing a member from a team.
///
/// Expected: Ok(true) and membership gone
#[tokio::test]
async fn removes_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, players, team) = create_team_with_members(db, 2).await?;

    let repo = TeamRepository::new(db);
    let removed = repo.remove_player(team.team_id, players[0].id).await?;

    assert!(removed);
    let team = repo.get_by_id(team.team_id).await?.unwrap();
    assert_eq!(team.player_ids, vec![players[1].id]);

    Ok(())
}

/// Tests removing a player who is not a member.
///
/// Expected: Ok(false)
#[tokio::test]
async fn removing_non_member_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let player = factory::create_player(db).await?;

    let repo = TeamRepository::new(db);
    let removed = repo.remove_player(team.team_id, player.id).await?;

    assert!(!removed);

    Ok(())
}
