use super::*;

/// Tests finding every team that lists a player.
///
/// Expected: Ok with IDs of the teams containing the player, ordered by ID
#[tokio::test]
async fn finds_teams_by_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let first = factory::team::TeamFactory::new(db)
        .player_ids(vec![player.id])
        .build()
        .await?;
    factory::create_team(db).await?;
    let third = factory::team::TeamFactory::new(db)
        .player_ids(vec![player.id])
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let team_ids = repo.get_ids_by_player(player.id).await?;

    assert_eq!(team_ids, vec![first.team_id, third.team_id]);

    Ok(())
}

/// Tests finding every team coached by a coach.
///
/// Expected: Ok with IDs of the coached teams only
#[tokio::test]
async fn finds_teams_by_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let other = factory::create_coach(db).await?;
    let coached = factory::team::TeamFactory::new(db)
        .coach_id(Some(coach.id))
        .build()
        .await?;
    factory::team::TeamFactory::new(db)
        .coach_id(Some(other.id))
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let team_ids = repo.get_ids_by_coach(coach.id).await?;

    assert_eq!(team_ids, vec![coached.team_id]);

    Ok(())
}

/// Tests clearing a team's coach.
///
/// Expected: Ok with coach reference set to null and coach row untouched
#[tokio::test]
async fn clears_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coach, _, team) = create_team_with_members(db, 0).await?;

    let repo = TeamRepository::new(db);
    repo.clear_coach(team.team_id).await?;

    let team = repo.get_by_id(team.team_id).await?.unwrap();
    assert!(team.coach_id.is_none());
    assert!(Coach::find_by_id(coach.id).one(db).await?.is_some());

    Ok(())
}
