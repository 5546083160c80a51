use super::*;

/// Tests that an update replaces coach and player set.
///
/// Expected: Ok with coach cleared and only the submitted player left
#[tokio::test]
async fn update_replaces_coach_and_players() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, players, team) = create_team_with_members(db, 3).await?;

    let updated = TeamService::new(db)
        .update(UpdateTeamParams {
            team_id: team.team_id,
            fields: team_fields(None, vec![players[2].id]),
        })
        .await?
        .unwrap();

    assert!(updated.coach.is_none());
    assert_eq!(updated.players.len(), 1);
    assert_eq!(updated.players[0].id, players[2].id);
    assert_eq!(TeamPlayer::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating a nonexistent team.
///
/// Verifies the missing team is reported before references are checked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_nonexistent_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db)
        .update(UpdateTeamParams {
            team_id: 999,
            fields: team_fields(Some(999), Vec::new()),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests updating a team to reference an unknown player.
///
/// Expected: Err(AppError::BadRequest) with the original members kept
#[tokio::test]
async fn update_rejects_unknown_player_without_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coach, players, team) = create_team_with_members(db, 2).await?;

    let result = TeamService::new(db)
        .update(UpdateTeamParams {
            team_id: team.team_id,
            fields: team_fields(None, vec![999]),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let unchanged = TeamService::new(db)
        .get_by_id(team.team_id)
        .await?
        .unwrap();
    assert_eq!(unchanged.team.coach_id, Some(coach.id));
    assert_eq!(unchanged.players.len(), players.len());

    Ok(())
}
