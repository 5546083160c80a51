use super::*;

/// Tests creating a team with a coach and a player.
///
/// Verifies that the returned team resolves the coach and players into full
/// records.
///
/// Expected: Ok with coach and player embedded
#[tokio::test]
async fn create_resolves_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let james = factory::player::PlayerFactory::new(db)
        .name("James")
        .surname("Wilson")
        .personal_code("PC789")
        .build()
        .await?;

    let team = TeamService::new(db)
        .create(CreateTeamParams {
            fields: team_fields(Some(coach.id), vec![james.id]),
        })
        .await?;

    assert_eq!(team.team.team_name, "Eagles");
    assert_eq!(team.coach.as_ref().map(|c| c.id), Some(coach.id));
    assert_eq!(team.players.len(), 1);
    assert_eq!(team.players[0].name, "James");

    Ok(())
}

/// Tests creating a team with an unknown coach.
///
/// Expected: Err(AppError::BadRequest) with no team persisted
#[tokio::test]
async fn create_rejects_unknown_coach() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db)
        .create(CreateTeamParams {
            fields: team_fields(Some(999), Vec::new()),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Coach not found with id: 999"));
    assert_eq!(Team::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating a team listing an unknown player.
///
/// Verifies that neither the team nor the memberships of the known players
/// are written.
///
/// Expected: Err(AppError::BadRequest) with nothing persisted
#[tokio::test]
async fn create_rejects_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let result = TeamService::new(db)
        .create(CreateTeamParams {
            fields: team_fields(None, vec![player.id, 999]),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Player not found with id: 999"));
    assert_eq!(Team::find().count(db).await?, 0);
    assert_eq!(TeamPlayer::find().count(db).await?, 0);

    Ok(())
}
