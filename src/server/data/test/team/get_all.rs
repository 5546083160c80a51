use super::*;

/// Tests listing teams with their memberships.
///
/// Verifies that each team carries only its own player IDs and that teams
/// are ordered by ID.
///
/// Expected: Ok with memberships grouped per team
#[tokio::test]
async fn groups_players_per_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, players, first) = create_team_with_members(db, 2).await?;
    let second = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let teams = repo.get_all().await?;

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].team_id, first.team_id);
    assert_eq!(
        teams[0].player_ids,
        players.iter().map(|p| p.id).collect::<Vec<_>>()
    );
    assert_eq!(teams[1].team_id, second.team_id);
    assert!(teams[1].player_ids.is_empty());

    Ok(())
}

/// Tests getting a nonexistent team.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo.get_by_id(999999).await?;

    assert!(team.is_none());

    Ok(())
}
